//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{check_dimension, ShapeError, SupportMap};
use crate::utils::WSign;

/// Shape of a box, axis-aligned in its local frame and centered at the origin.
///
/// The box length is measured along the local `x` axis, its width along `y`
/// and its height along `z`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis.
    ///
    /// Panics if any half-extent is not strictly positive. See [`Cuboid::try_new`] for a
    /// fallible version.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        assert!(
            Self::try_new(half_extents).is_ok(),
            "The half-extents of a cuboid must be strictly positive."
        );
        Cuboid { half_extents }
    }

    /// Creates a new box from its half-extents, checking that each of them is strictly positive.
    pub fn try_new(half_extents: Vector<Real>) -> Result<Cuboid, ShapeError> {
        let _ = check_dimension("half-length", half_extents.x)?;
        let _ = check_dimension("half-width", half_extents.y)?;
        let _ = check_dimension("half-height", half_extents.z)?;
        Ok(Cuboid { half_extents })
    }

    /// Creates a new box from its full length (along `x`), width (along `y`) and height
    /// (along `z`).
    ///
    /// Panics if any dimension is not strictly positive.
    #[inline]
    pub fn from_dimensions(length: Real, width: Real, height: Real) -> Cuboid {
        assert!(
            Self::try_from_dimensions(length, width, height).is_ok(),
            "The dimensions of a cuboid must be strictly positive."
        );
        Cuboid {
            half_extents: Vector::new(length, width, height) / 2.0,
        }
    }

    /// Fallible version of [`Cuboid::from_dimensions`].
    pub fn try_from_dimensions(
        length: Real,
        width: Real,
        height: Real,
    ) -> Result<Cuboid, ShapeError> {
        let length = check_dimension("length", length)?;
        let width = check_dimension("width", width)?;
        let height = check_dimension("height", height)?;
        Ok(Cuboid {
            half_extents: Vector::new(length, width, height) / 2.0,
        })
    }

    /// The half-extents of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.half_extents
    }

    /// The full length of this box, along the local `x` axis.
    #[inline]
    pub fn length(&self) -> Real {
        self.half_extents.x * 2.0
    }

    /// The full width of this box, along the local `y` axis.
    #[inline]
    pub fn width(&self) -> Real {
        self.half_extents.y * 2.0
    }

    /// The full height of this box, along the local `z` axis.
    #[inline]
    pub fn height(&self) -> Real {
        self.half_extents.z * 2.0
    }

    /// Replaces the half-extents of this box.
    ///
    /// The box is left unchanged if any of the half-extents is invalid.
    pub fn set_half_extents(&mut self, half_extents: Vector<Real>) -> Result<(), ShapeError> {
        *self = Self::try_new(half_extents)?;
        Ok(())
    }

    /// Sets the full length of this box, along the local `x` axis.
    pub fn set_length(&mut self, length: Real) -> Result<(), ShapeError> {
        self.half_extents.x = check_dimension("length", length)? / 2.0;
        Ok(())
    }

    /// Sets the full width of this box, along the local `y` axis.
    pub fn set_width(&mut self, width: Real) -> Result<(), ShapeError> {
        self.half_extents.y = check_dimension("width", width)? / 2.0;
        Ok(())
    }

    /// Sets the full height of this box, along the local `z` axis.
    pub fn set_height(&mut self, height: Real) -> Result<(), ShapeError> {
        self.half_extents.z = check_dimension("height", height)? / 2.0;
        Ok(())
    }

    /// The surface area of this box.
    #[inline]
    pub fn area(&self) -> Real {
        let e = self.half_extents * 2.0;
        (e.x * e.y + e.x * e.z + e.y * e.z) * 2.0
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.half_extents.x * self.half_extents.y * self.half_extents.z * 8.0
    }

    /// Projects every point of this box on the local-space `axis`.
    ///
    /// Returns the `(min, max)` interval, relative to the box center, of the dot products between
    /// `axis` and the points of the box. The interval is exact and symmetric.
    #[inline]
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let radius = self.half_extents.dot(&axis.abs());
        (-radius, radius)
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}
