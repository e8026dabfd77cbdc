use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse, cheap-to-test approximations of shapes, used by the
/// broad-phase to discard pairs of shapes that are obviously disjoint. Two bounding
/// volumes of the same kind can always be merged into a bigger one.
pub trait BoundingVolume: Copy {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersect with another one.
    fn intersects(&self, other: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, other: &Self) -> bool;

    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, other: &Self);

    /// Enlarges this bounding volume by `amount` on every side.
    ///
    /// Panics if `amount` is negative.
    fn loosen(&mut self, amount: Real);

    /// Shrinks this bounding volume by `amount` on every side.
    ///
    /// Panics if `amount` is negative or larger than the volume itself.
    fn tighten(&mut self, amount: Real);

    /// Merges this bounding volume with another one.
    #[must_use]
    fn merged(&self, other: &Self) -> Self {
        let mut res = *self;
        res.merge(other);
        res
    }

    /// Creates a new, enlarged version, of this bounding volume.
    #[must_use]
    fn loosened(&self, amount: Real) -> Self {
        let mut res = *self;
        res.loosen(amount);
        res
    }

    /// Creates a new, tightened version, of this bounding volume.
    #[must_use]
    fn tightened(&self, amount: Real) -> Self {
        let mut res = *self;
        res.tighten(amount);
        res
    }
}
