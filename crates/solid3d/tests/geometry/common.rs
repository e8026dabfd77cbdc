use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solid3d::math::{Isometry, Real, UnitVector, Vector};
use solid3d::na::Unit;
use solid3d::shape::{Ball, Capsule, Cuboid, Cylinder, Shape};

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn random_axis(rng: &mut StdRng) -> UnitVector<Real> {
    loop {
        let v: Vector<Real> = Vector::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );

        if let Some(axis) = Unit::try_new(v, 1.0e-3) {
            return axis;
        }
    }
}

pub fn random_isometry(rng: &mut StdRng) -> Isometry<Real> {
    let translation: Vector<Real> = Vector::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    );
    let angle: Real = rng.gen_range(0.0..3.0);
    Isometry::new(translation, *random_axis(rng) * angle)
}

pub fn sample_shapes() -> Vec<Shape> {
    vec![
        Ball::new(0.75).into(),
        Cuboid::from_dimensions(2.0, 4.0, 6.0).into(),
        Cuboid::new(Vector::new(0.1, 3.0, 0.5)).into(),
        Capsule::new(1.0, 1.0).into(),
        Capsule::new(2.5, 0.25).into(),
        Cylinder::new(1.0, 1.0).into(),
        Cylinder::new(0.2, 3.0).into(),
    ]
}
