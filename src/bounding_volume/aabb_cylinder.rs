use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::Cylinder;

impl Cylinder {
    /// Computes the world-space AABB of this cylinder, transformed by `pos`.
    ///
    /// Each half-extent is the exact support of the cylinder along the corresponding world axis,
    /// so the box touches the rims of the cylinder.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let mut half_extents = Vector::zeros();

        for i in 0..DIM {
            let local_axis = pos
                .rotation
                .inverse_transform_unit_vector(&Vector::ith_axis(i));
            half_extents[i] = self.project_on_axis(&local_axis).1;
        }

        Aabb::from_half_extents(Point::from(pos.translation.vector), half_extents)
    }

    /// Computes the local-space AABB of this cylinder.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let r = self.radius();
        Aabb::from_half_extents(Point::origin(), Vector::new(r, self.half_height(), r))
    }
}
