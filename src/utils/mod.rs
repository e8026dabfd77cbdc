//! Various unsorted geometrical and logical operators.

pub use self::inv::inv;
pub use self::isometry_ops::IsometryOps;
pub use self::wops::WSign;

mod inv;
mod isometry_ops;
mod wops;
