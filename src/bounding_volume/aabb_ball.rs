use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Ball;

/// Computes the Axis-Aligned Bounding Box of a ball centered at `center`.
#[inline]
fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::from_half_extents(*center, Vector::repeat(radius))
}

impl Ball {
    /// Computes the world-space AABB of this ball transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        ball_aabb(&Point::from(pos.translation.vector), self.radius())
    }

    /// Computes the local-space AABB of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        ball_aabb(&Point::origin(), self.radius())
    }
}
