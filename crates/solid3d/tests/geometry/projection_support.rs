use crate::common::{random_axis, random_isometry, rng, sample_shapes};
use approx::assert_relative_eq;
use solid3d::query::sat;
use solid3d::shape::{Capsule, SupportMap};

#[test]
fn local_projection_matches_support_point() {
    let mut rng = rng();

    for shape in sample_shapes() {
        for _ in 0..200 {
            let axis = random_axis(&mut rng);
            let (min, max) = shape.project_on_axis(&axis);
            let top = shape.local_support_point_toward(&axis).coords.dot(&axis);
            let bottom = shape.local_support_point_toward(&-axis).coords.dot(&axis);

            assert_relative_eq!(max, top, epsilon = 1.0e-4);
            assert_relative_eq!(min, bottom, epsilon = 1.0e-4);
            assert_eq!(min, -max);
        }
    }
}

#[test]
fn world_projection_matches_world_support_point() {
    let mut rng = rng();

    for shape in sample_shapes() {
        for _ in 0..50 {
            let pos = random_isometry(&mut rng);
            let axis = random_axis(&mut rng);
            let (min, max) = sat::project_on_world_axis(&shape, &pos, &axis);
            let top = shape.support_point_toward(&pos, &axis).coords.dot(&axis);
            let bottom = shape.support_point_toward(&pos, &-axis).coords.dot(&axis);

            assert_relative_eq!(max, top, epsilon = 1.0e-3);
            assert_relative_eq!(min, bottom, epsilon = 1.0e-3);
        }
    }
}

#[test]
fn capsule_conservative_projection_is_looser() {
    let mut rng = rng();
    let capsules = [
        Capsule::new(1.0, 1.0),
        Capsule::new(0.1, 2.0),
        Capsule::new(3.0, 0.5),
    ];

    for capsule in capsules {
        for _ in 0..200 {
            let axis = random_axis(&mut rng);
            let (exact_min, exact_max) = capsule.project_on_axis(&axis);
            let (loose_min, loose_max) = capsule.project_on_axis_conservative(&axis);

            assert!(loose_max > exact_max);
            assert!(loose_min < exact_min);
        }
    }
}
