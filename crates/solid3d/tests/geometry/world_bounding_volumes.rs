use crate::common::{random_axis, random_isometry, rng, sample_shapes};
use solid3d::bounding_volume::BoundingVolume;
use solid3d::math::{Point, Real};
use solid3d::shape::SupportMap;

const TOLERANCE: Real = 1.0e-3;

#[test]
fn world_aabb_contains_transformed_support_points() {
    let mut rng = rng();

    for shape in sample_shapes() {
        for _ in 0..20 {
            let pos = random_isometry(&mut rng);
            let aabb = shape.aabb(&pos).loosened(TOLERANCE);

            for _ in 0..50 {
                let pt = shape.support_point_toward(&pos, &random_axis(&mut rng));
                assert!(aabb.contains_local_point(&pt), "{:?} outside {:?}", pt, aabb);
            }
        }
    }
}

#[test]
fn world_aabb_never_grows_past_the_transformed_local_one() {
    let mut rng = rng();

    for shape in sample_shapes() {
        let pos = random_isometry(&mut rng);
        let tight = shape.aabb(&pos);
        let coarse = shape.local_aabb().transform_by(&pos).loosened(TOLERANCE);

        assert!(coarse.contains(&tight));
    }
}

#[test]
fn world_bounding_sphere_follows_translation() {
    let mut rng = rng();

    for shape in sample_shapes() {
        let pos = random_isometry(&mut rng);
        let local = shape.local_bounding_sphere();
        let world = shape.bounding_sphere(&pos);

        assert_eq!(world.radius, local.radius);
        assert_eq!(world.center, Point::from(pos.translation.vector));
    }
}

#[test]
fn local_bounding_volumes_are_centered() {
    for shape in sample_shapes() {
        assert_eq!(shape.local_aabb().center(), Point::origin());
        assert_eq!(shape.local_bounding_sphere().center, Point::origin());
    }
}
