use solid3d::math::{Isometry, Vector};
use solid3d::na::Unit;
use solid3d::shape::{Ball, Capsule, Cuboid, Cylinder, Shape};

fn main() {
    /*
     * Initialize the shapes.
     */
    let shapes: [Shape; 4] = [
        Ball::new(0.5).into(),
        Cuboid::from_dimensions(2.0, 4.0, 6.0).into(),
        Capsule::new(1.0, 1.0).into(),
        Cylinder::new(1.0, 1.0).into(),
    ];

    let pos = Isometry::new(Vector::new(1.0, 2.0, 3.0), Vector::y() * 0.5);
    let axis = Unit::new_normalize(Vector::new(1.0, 1.0, 0.0));

    for shape in &shapes {
        let aabb = shape.aabb(&pos);
        let sphere = shape.local_bounding_sphere();
        let props = shape.mass_properties(1000.0);

        println!("{:?}", shape.shape_type());
        println!("    area: {:.4}, volume: {:.4}", shape.area(), shape.volume());
        println!("    world aabb: {} -> {}", aabb.mins, aabb.maxs);
        println!("    bounding sphere radius: {:.4}", sphere.radius);
        println!("    projection on {}: {:?}", axis.into_inner(), shape.project_on_axis(&axis));
        println!(
            "    mass: {:.2}, principal inertia: {}",
            props.mass(),
            props.principal_inertia()
        );
    }
}
