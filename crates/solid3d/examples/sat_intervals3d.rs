use solid3d::math::{Isometry, Vector};
use solid3d::query::sat;
use solid3d::shape::{Capsule, Cuboid, Shape};

fn main() {
    let cuboid = Shape::from(Cuboid::new(Vector::new(1.0, 0.5, 0.5)));
    let capsule = Shape::from(Capsule::new(1.0, 0.25));
    let pos1 = Isometry::identity();

    // Face normals of the cuboid, the capsule axis, and their cross products.
    let capsule_axis = Vector::x();
    let axes = [
        Vector::x(),
        Vector::y(),
        Vector::z(),
        capsule_axis,
        Vector::x().cross(&capsule_axis),
        Vector::y().cross(&capsule_axis),
        Vector::z().cross(&capsule_axis),
    ];

    for dist in [3.0, 2.5, 2.0, 1.5] {
        // The capsule lies along the world `x` axis.
        let pos2 = Isometry::new(
            Vector::new(dist, 0.0, 0.0),
            Vector::z() * core::f32::consts::FRAC_PI_2,
        );

        match sat::find_separating_axis(&cuboid, &pos1, &capsule, &pos2, &axes) {
            Some((axis, separation)) => println!(
                "distance {}: separated by {:.3} along {}",
                dist,
                separation,
                axis.into_inner()
            ),
            None => println!("distance {}: the projections overlap on every axis", dist),
        }
    }
}
