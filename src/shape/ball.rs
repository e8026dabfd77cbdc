use na::{RealField, Unit};

use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::shape::{check_dimension, ShapeError, SupportMap};

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    ///
    /// Panics if `radius` is not strictly positive.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        assert!(
            Self::try_new(radius).is_ok(),
            "The radius of a ball must be strictly positive."
        );
        Ball { radius }
    }

    /// Creates a new ball with the given radius, checking that it is strictly positive.
    #[inline]
    pub fn try_new(radius: Real) -> Result<Ball, ShapeError> {
        Ok(Ball {
            radius: check_dimension("radius", radius)?,
        })
    }

    /// The radius of this ball.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the radius of this ball.
    pub fn set_radius(&mut self, radius: Real) -> Result<(), ShapeError> {
        self.radius = check_dimension("radius", radius)?;
        Ok(())
    }

    /// The surface area of this ball.
    #[inline]
    pub fn area(&self) -> Real {
        Real::pi() * self.radius * self.radius * 4.0
    }

    /// The volume of this ball.
    #[inline]
    pub fn volume(&self) -> Real {
        Real::pi() * self.radius * self.radius * self.radius * 4.0 / 3.0
    }

    /// Projects every point of this ball on the local-space `axis`.
    #[inline]
    pub fn project_on_axis(&self, _axis: &UnitVector<Real>) -> (Real, Real) {
        (-self.radius, self.radius)
    }
}

impl SupportMap for Ball {
    #[inline]
    fn support_point(&self, m: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = m.inverse_transform_vector(dir);
        m * self.local_support_point(&local_dir)
    }

    #[inline]
    fn support_point_toward(&self, m: &Isometry<Real>, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(m.translation.vector) + **dir * self.radius
    }

    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::y_axis());
        self.local_support_point_toward(&dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}
