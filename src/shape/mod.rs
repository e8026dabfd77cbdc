//! Shapes supported by solid3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
pub use self::shape_error::ShapeError;
#[doc(inline)]
pub use self::support_map::SupportMap;

pub(crate) use self::shape_error::check_dimension;

mod ball;
mod capsule;
mod cuboid;
mod cylinder;
#[doc(hidden)]
pub mod shape;
mod shape_error;
#[doc(hidden)]
pub mod support_map;
