//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{check_dimension, ShapeError, SupportMap};
use crate::utils::WSign;
use na::{ComplexField, RealField};
use num::Zero;

/// Cylinder shape with its principal axis aligned with the `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    half_height: Real,
    radius: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    ///
    /// Panics if either argument is not strictly positive.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        assert!(
            Self::try_new(half_height, radius).is_ok(),
            "The half-height and radius of a cylinder must be strictly positive."
        );

        Cylinder {
            half_height,
            radius,
        }
    }

    /// Creates a new cylinder, checking its dimensions.
    pub fn try_new(half_height: Real, radius: Real) -> Result<Cylinder, ShapeError> {
        Ok(Cylinder {
            half_height: check_dimension("half-height", half_height)?,
            radius: check_dimension("radius", radius)?,
        })
    }

    /// The radius of this cylinder.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The full height of this cylinder.
    #[inline]
    pub fn height(&self) -> Real {
        self.half_height * 2.0
    }

    /// The half-height of this cylinder.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_height
    }

    /// Sets the radius of this cylinder.
    pub fn set_radius(&mut self, radius: Real) -> Result<(), ShapeError> {
        self.radius = check_dimension("radius", radius)?;
        Ok(())
    }

    /// Sets the full height of this cylinder.
    pub fn set_height(&mut self, height: Real) -> Result<(), ShapeError> {
        self.half_height = check_dimension("height", height)? / 2.0;
        Ok(())
    }

    /// Sets the half-height of this cylinder.
    pub fn set_half_height(&mut self, half_height: Real) -> Result<(), ShapeError> {
        self.half_height = check_dimension("half-height", half_height)?;
        Ok(())
    }

    /// The surface area of this cylinder, caps included.
    #[inline]
    pub fn area(&self) -> Real {
        Real::two_pi() * self.radius * (self.radius + self.height())
    }

    /// The volume of this cylinder.
    #[inline]
    pub fn volume(&self) -> Real {
        Real::pi() * self.radius * self.radius * self.height()
    }

    /// Projects every point of this cylinder on the local-space `axis`.
    ///
    /// The interval is exact: the half-height contributes along `axis.y` and the radius along the
    /// horizontal part of `axis`.
    #[inline]
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        // sqrt(x² + z²) rather than sqrt(1 - y²) to avoid cancellation near the `y` axis.
        let horizontal = ComplexField::sqrt(axis.x * axis.x + axis.z * axis.z);
        let radius = self.half_height * ComplexField::abs(axis.y) + self.radius * horizontal;
        (-radius, radius)
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        vres[1] = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = na::zero()
        } else {
            vres *= self.radius;
        }

        vres[1] = dir[1].copy_sign_to(self.half_height);

        Point::from(vres)
    }
}
