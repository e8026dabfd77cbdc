use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// The world-space axis-aligned bounding box of this capsule, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let (a, b) = self.segment();
        let (a, b) = (pos * a, pos * b);
        let mins = a.coords.inf(&b.coords) - Vector::repeat(self.radius());
        let maxs = a.coords.sup(&b.coords) + Vector::repeat(self.radius());
        Aabb::new(mins.into(), maxs.into())
    }

    /// The local-space axis-aligned bounding box of this capsule.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let r = self.radius();
        let half_extents = Vector::new(r, self.half_height() + r, r);
        Aabb::from_half_extents(Point::origin(), half_extents)
    }
}
