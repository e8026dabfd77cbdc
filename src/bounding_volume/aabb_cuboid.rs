use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::Cuboid;
use crate::utils::IsometryOps;

impl Cuboid {
    /// Computes the world-space AABB of this cuboid, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let center = Point::from(pos.translation.vector);
        let ws_half_extents = pos.absolute_transform_vector(&self.half_extents());

        Aabb::from_half_extents(center, ws_half_extents)
    }

    /// Computes the local-space AABB of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.half_extents());

        Aabb::new(-half_extents, half_extents)
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Isometry, Point, Real, Vector};
    use crate::shape::Cuboid;
    use approx::assert_relative_eq;

    #[test]
    fn cuboid_local_aabb_is_the_box_itself() {
        let cuboid = Cuboid::from_dimensions(2.0, 4.0, 6.0);
        let aabb = cuboid.local_aabb();

        assert_eq!(aabb.mins, Point::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn cuboid_world_aabb_under_rotation() {
        let cuboid = Cuboid::new(Vector::new(1.0, 0.5, 0.5));
        let angle = core::f64::consts::FRAC_PI_4 as Real;
        let pos = Isometry::new(Vector::new(0.0, 0.0, 2.0), Vector::z() * angle);
        let aabb = cuboid.aabb(&pos);
        let expected = 1.5 / Real::sqrt(2.0);

        assert_relative_eq!(aabb.maxs, Point::new(expected, expected, 2.5), epsilon = 1.0e-5);
        assert_relative_eq!(aabb.mins, Point::new(-expected, -expected, 1.5), epsilon = 1.0e-5);
    }
}
