use crate::math::{Isometry, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::Shape;
use na::Unit;

/// Projects `shape`, placed at `pos`, on the world-space `axis`.
///
/// Returns the `(min, max)` interval of the world-space projections of every point of the shape.
pub fn project_on_world_axis(
    shape: &Shape,
    pos: &Isometry<Real>,
    axis: &UnitVector<Real>,
) -> (Real, Real) {
    let local_axis = pos.rotation.inverse_transform_unit_vector(axis);
    let center = pos.translation.vector.dot(axis);
    let (min, max) = shape.project_on_axis(&local_axis);
    (center + min, center + max)
}

/// The signed gap between the projections of two placed shapes on the world-space `axis`.
///
/// Positive if the intervals are disjoint, zero if they touch, and negative (the opposite of the
/// overlap length) if they overlap.
pub fn separation_along_axis(
    shape1: &Shape,
    pos1: &Isometry<Real>,
    shape2: &Shape,
    pos2: &Isometry<Real>,
    axis: &UnitVector<Real>,
) -> Real {
    let (min1, max1) = project_on_world_axis(shape1, pos1, axis);
    let (min2, max2) = project_on_world_axis(shape2, pos2, axis);
    (min2 - max1).max(min1 - max2)
}

/// Finds the candidate axis along which two placed shapes are the most separated.
///
/// Candidates do not need to be normalized. Those with a norm smaller than
/// [`DEFAULT_EPSILON`] (typically cross products of parallel edges) are skipped.
///
/// Returns the best normalized axis and its separation if that separation is strictly positive,
/// `None` if no candidate separates the shapes.
pub fn find_separating_axis<'a>(
    shape1: &Shape,
    pos1: &Isometry<Real>,
    shape2: &Shape,
    pos2: &Isometry<Real>,
    axes: impl IntoIterator<Item = &'a Vector<Real>>,
) -> Option<(UnitVector<Real>, Real)> {
    let mut best: Option<(UnitVector<Real>, Real)> = None;

    for candidate in axes {
        let Some(axis) = Unit::try_new(*candidate, DEFAULT_EPSILON) else {
            log::debug!("Skipping degenerate separating axis candidate {:?}.", candidate);
            continue;
        };

        let separation = separation_along_axis(shape1, pos1, shape2, pos2, &axis);

        if best.map_or(true, |(_, best_sep)| separation > best_sep) {
            best = Some((axis, separation));
        }
    }

    best.filter(|(_, separation)| *separation > 0.0)
}

/// Tests if two placed shapes overlap along every candidate axis.
///
/// This is an exact intersection test only if the candidates include every potential
/// separating axis of the pair. Otherwise `true` means "possibly intersecting".
pub fn intersection_test_with_axes<'a>(
    shape1: &Shape,
    pos1: &Isometry<Real>,
    shape2: &Shape,
    pos2: &Isometry<Real>,
    axes: impl IntoIterator<Item = &'a Vector<Real>>,
) -> bool {
    find_separating_axis(shape1, pos1, shape2, pos2, axes).is_none()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::{Ball, Capsule, Cuboid, Cylinder};
    use approx::assert_relative_eq;

    #[test]
    fn world_projection_of_translated_capsule() {
        let capsule = Shape::from(Capsule::new(1.0, 0.5));
        let pos = Isometry::translation(0.0, 3.0, 0.0);

        assert_eq!(
            project_on_world_axis(&capsule, &pos, &Vector::y_axis()),
            (1.5, 4.5)
        );
        assert_eq!(
            project_on_world_axis(&capsule, &pos, &-Vector::y_axis()),
            (-4.5, -1.5)
        );
    }

    #[test]
    fn world_projection_of_rotated_cylinder() {
        let cylinder = Shape::from(Cylinder::new(2.0, 0.5));
        let half_pi = core::f64::consts::FRAC_PI_2 as Real;
        let pos = Isometry::new(Vector::new(1.0, 0.0, 0.0), Vector::z() * half_pi);
        let (min, max) = project_on_world_axis(&cylinder, &pos, &Vector::x_axis());

        assert_relative_eq!(min, -1.0, epsilon = 1.0e-5);
        assert_relative_eq!(max, 3.0, epsilon = 1.0e-5);
    }

    #[test]
    fn separation_sign() {
        let ball = Shape::from(Ball::new(1.0));
        let pos1 = Isometry::identity();

        let far = Isometry::translation(3.0, 0.0, 0.0);
        let touching = Isometry::translation(2.0, 0.0, 0.0);
        let overlapping = Isometry::translation(1.5, 0.0, 0.0);
        let axis = Vector::x_axis();

        assert_eq!(separation_along_axis(&ball, &pos1, &ball, &far, &axis), 1.0);
        assert_eq!(separation_along_axis(&ball, &pos1, &ball, &touching, &axis), 0.0);
        assert_eq!(separation_along_axis(&ball, &pos1, &ball, &overlapping, &axis), -0.5);
        assert_eq!(separation_along_axis(&ball, &far, &ball, &pos1, &axis), 1.0);
    }

    #[test]
    fn best_separating_axis() {
        let cuboid = Shape::from(Cuboid::new(Vector::repeat(1.0)));
        let pos1 = Isometry::identity();
        let pos2 = Isometry::translation(3.0, 2.5, 0.0);
        let axes = [Vector::x(), Vector::y(), Vector::z(), Vector::zeros()];

        let (axis, separation) =
            find_separating_axis(&cuboid, &pos1, &cuboid, &pos2, &axes).unwrap();
        assert_eq!(axis, Vector::x_axis());
        assert_eq!(separation, 1.0);
        assert!(!intersection_test_with_axes(
            &cuboid, &pos1, &cuboid, &pos2, &axes
        ));
    }

    #[test]
    fn no_separating_axis_when_overlapping() {
        let cuboid = Shape::from(Cuboid::new(Vector::repeat(1.0)));
        let capsule = Shape::from(Capsule::new(1.0, 0.5));
        let pos1 = Isometry::identity();
        let pos2 = Isometry::translation(1.2, 0.0, 0.0);
        let axes = [Vector::x(), Vector::y(), Vector::z()];

        assert_eq!(
            find_separating_axis(&cuboid, &pos1, &capsule, &pos2, &axes),
            None
        );
        assert!(intersection_test_with_axes(
            &cuboid, &pos1, &capsule, &pos2, &axes
        ));
    }

    #[test]
    fn degenerate_candidates_only() {
        let ball = Shape::from(Ball::new(1.0));
        let pos2 = Isometry::translation(5.0, 0.0, 0.0);
        let axes = [Vector::zeros()];

        assert!(find_separating_axis(&ball, &Isometry::identity(), &ball, &pos2, &axes).is_none());
    }
}
