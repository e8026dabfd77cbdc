//! Application of the Separating Axis Theorem (SAT).
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. Every analytic shape of this crate gives its exact projection
//! interval on any axis in constant time, so testing a candidate axis costs two projections.
//!
//! ```rust
//! # #[cfg(all(feature = "dim3", feature = "f32"))] {
//! use solid3d::math::{Isometry, Vector};
//! use solid3d::query::sat;
//! use solid3d::shape::{Ball, Cuboid, Shape};
//!
//! let cuboid = Shape::from(Cuboid::new(Vector::new(1.0, 1.0, 1.0)));
//! let ball = Shape::from(Ball::new(0.5));
//! let pos1 = Isometry::identity();
//! let pos2 = Isometry::translation(2.0, 0.0, 0.0);
//!
//! let separation = sat::separation_along_axis(&cuboid, &pos1, &ball, &pos2, &Vector::x_axis());
//! assert_eq!(separation, 0.5);
//! # }
//! ```

pub use self::sat_shape_shape::{
    find_separating_axis, intersection_test_with_axes, project_on_world_axis,
    separation_along_axis,
};

mod sat_shape_shape;
