use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{check_dimension, ShapeError, SupportMap};
use crate::utils::WSign;
use na::{RealField, Unit};
#[cfg(not(feature = "std"))]
use na::ComplexField;

/// A capsule shape: a cylinder capped by two hemispheres of the same radius.
///
/// The capsule is aligned with the local `y` axis and centered at the origin. Its height is the
/// length of the cylindrical part, i.e., the distance between the centers of the two hemispheres.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    half_height: Real,
    radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis.
    ///
    /// # Arguments:
    /// * `half_height` - half the distance between the centers of the two hemispheres.
    /// * `radius` - the radius of the cylindrical part and of the hemispheres.
    ///
    /// Panics if either argument is not strictly positive.
    pub fn new(half_height: Real, radius: Real) -> Capsule {
        assert!(
            Self::try_new(half_height, radius).is_ok(),
            "The half-height and radius of a capsule must be strictly positive."
        );
        Capsule {
            half_height,
            radius,
        }
    }

    /// Creates a new capsule aligned with the `y` axis, checking its dimensions.
    pub fn try_new(half_height: Real, radius: Real) -> Result<Capsule, ShapeError> {
        Ok(Capsule {
            half_height: check_dimension("half-height", half_height)?,
            radius: check_dimension("radius", radius)?,
        })
    }

    /// The radius of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The height of the cylindrical part of this capsule.
    #[inline]
    pub fn height(&self) -> Real {
        self.half_height * 2.0
    }

    /// The half-height of the cylindrical part of this capsule.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_height
    }

    /// The centers of the bottom and top hemispheres of this capsule.
    #[inline]
    pub fn segment(&self) -> (Point<Real>, Point<Real>) {
        let b = Point::from(Vector::y() * self.half_height);
        (-b, b)
    }

    /// Sets the radius of this capsule.
    pub fn set_radius(&mut self, radius: Real) -> Result<(), ShapeError> {
        self.radius = check_dimension("radius", radius)?;
        Ok(())
    }

    /// Sets the height of the cylindrical part of this capsule.
    pub fn set_height(&mut self, height: Real) -> Result<(), ShapeError> {
        self.half_height = check_dimension("height", height)? / 2.0;
        Ok(())
    }

    /// Sets the half-height of the cylindrical part of this capsule.
    pub fn set_half_height(&mut self, half_height: Real) -> Result<(), ShapeError> {
        self.half_height = check_dimension("half-height", half_height)?;
        Ok(())
    }

    /// The surface area of this capsule.
    ///
    /// This is the lateral area of the cylindrical part, `2π r h`, plus `2π r²` for the caps.
    /// The cap term is the area of a single hemisphere, so the result is smaller than the true
    /// surface area `2π r h + 4π r²`.
    #[inline]
    pub fn area(&self) -> Real {
        let cylinder_area = Real::two_pi() * self.radius * self.height();
        let caps_area = Real::two_pi() * self.radius * self.radius;
        cylinder_area + caps_area
    }

    /// The volume of this capsule.
    #[inline]
    pub fn volume(&self) -> Real {
        let sq_radius = self.radius * self.radius;
        let cylinder_volume = Real::pi() * sq_radius * self.height();
        let ball_volume = Real::pi() * sq_radius * self.radius * 4.0 / 3.0;
        cylinder_volume + ball_volume
    }

    /// Projects every point of this capsule on the local-space `axis`.
    ///
    /// The returned `(min, max)` interval is the exact support interval of the capsule, relative
    /// to its center: `max = half_height * |axis.y| + radius` and `min = -max`.
    #[inline]
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let radius = self.half_height * axis.y.abs() + self.radius;
        (-radius, radius)
    }

    /// Conservative projection of this capsule on the local-space `axis`.
    ///
    /// Sums the absolute projections of six surface offsets (plus and minus the half-height along
    /// each local axis) and adds the radius. The result always contains the exact interval given
    /// by [`Capsule::project_on_axis`] and is always strictly larger than it. Separating-axis
    /// tests using it never miss an overlap but may report overlaps that do not exist.
    #[inline]
    pub fn project_on_axis_conservative(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let offsets = self.half_height * 2.0;
        let radius = offsets * (axis.x.abs() + axis.y.abs() + axis.z.abs()) + self.radius;
        (-radius, radius)
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::y_axis());
        self.local_support_point_toward(&dir)
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        let center = Vector::y() * dir.y.copy_sign_to(self.half_height);
        Point::from(center + **dir * self.radius)
    }
}
