use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Point, Real};
use crate::shape::Cylinder;

impl Cylinder {
    /// Computes the world-space bounding sphere of this cylinder, transformed by `pos`.
    #[inline]
    pub fn bounding_sphere(&self, pos: &Isometry<Real>) -> BoundingSphere {
        let bv: BoundingSphere = self.local_bounding_sphere();
        bv.transform_by(pos)
    }

    /// Computes the local-space bounding sphere of this cylinder.
    ///
    /// The radius is `max(radius, half_height)`. This sphere contains the axis and the caps
    /// centers but the rim points, at distance `sqrt(radius² + half_height²)` from the center,
    /// lie outside of it. Use [`Cylinder::local_aabb`] when a true enclosing volume is needed.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        let radius = self.radius().max(self.half_height());
        BoundingSphere::new(Point::origin(), radius)
    }
}

#[cfg(test)]
mod test {
    use crate::shape::Cylinder;

    #[test]
    fn cylinder_bounding_sphere_radius() {
        assert_eq!(Cylinder::new(1.0, 0.5).local_bounding_sphere().radius, 1.0);
        assert_eq!(Cylinder::new(0.25, 2.0).local_bounding_sphere().radius, 2.0);
    }
}
