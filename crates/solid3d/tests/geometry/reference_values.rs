use crate::common::rng;
use approx::assert_relative_eq;
use rand::Rng;
use solid3d::math::{Point, Real, Vector};
use solid3d::na::RealField;
use solid3d::shape::{Capsule, Cuboid, Cylinder, Shape};

#[test]
fn cuboid_2_4_6() {
    let cuboid = Cuboid::from_dimensions(2.0, 4.0, 6.0);
    let shape = Shape::from(cuboid);

    assert_eq!(shape.volume(), 48.0);
    assert_eq!(shape.area(), 88.0);
    assert_eq!(shape.local_aabb().maxs, Point::new(1.0, 2.0, 3.0));
    assert_eq!(shape.project_on_axis(&Vector::x_axis()), (-1.0, 1.0));
    assert_eq!(shape.project_on_axis(&Vector::z_axis()), (-3.0, 3.0));
    assert_relative_eq!(
        shape.local_bounding_sphere().radius,
        Real::sqrt(14.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn cuboid_closed_forms_for_random_dimensions() {
    let mut rng = rng();

    for _ in 0..500 {
        let l: Real = rng.gen_range(0.01..20.0);
        let w: Real = rng.gen_range(0.01..20.0);
        let h: Real = rng.gen_range(0.01..20.0);
        let shape = Shape::from(Cuboid::from_dimensions(l, w, h));
        let aabb = shape.local_aabb();

        assert_relative_eq!(shape.volume(), l * w * h, max_relative = 1.0e-5);
        assert_relative_eq!(
            shape.area(),
            (l * w + l * h + w * h) * 2.0,
            max_relative = 1.0e-5
        );
        assert_relative_eq!(aabb.maxs, Point::new(l, w, h) / 2.0, max_relative = 1.0e-6);
        assert_eq!(aabb.mins, -aabb.maxs);
        assert_eq!(shape.project_on_axis(&Vector::x_axis()).1, l / 2.0);
    }
}

#[test]
fn cylinder_r1_h2() {
    let shape = Shape::from(Cylinder::new(1.0, 1.0));

    assert_relative_eq!(shape.volume(), 6.2832, epsilon = 1.0e-4);
    assert_relative_eq!(shape.area(), 18.8496, epsilon = 1.0e-4);
    assert_eq!(shape.local_bounding_sphere().radius, 1.0);
    assert_eq!(shape.project_on_axis(&Vector::y_axis()), (-1.0, 1.0));
    assert_eq!(shape.project_on_axis(&Vector::x_axis()), (-1.0, 1.0));
}

#[test]
fn capsule_r1_h2() {
    let shape = Shape::from(Capsule::new(1.0, 1.0));
    let inertia = shape.angular_inertia(1.0);

    assert_relative_eq!(shape.volume(), 10.4720, epsilon = 1.0e-4);
    assert_relative_eq!(shape.area(), Real::pi() * 6.0, epsilon = 1.0e-4);
    assert_eq!(shape.local_aabb().maxs, Point::new(1.0, 2.0, 1.0));
    assert_eq!(shape.local_bounding_sphere().radius, 2.0);
    assert_eq!(shape.project_on_axis(&Vector::y_axis()), (-2.0, 2.0));
    assert_relative_eq!(inertia[(0, 0)], 1.21, epsilon = 1.0e-5);
    assert_relative_eq!(inertia[(1, 1)], 0.46, epsilon = 1.0e-5);
    assert_relative_eq!(inertia[(2, 2)], 1.21, epsilon = 1.0e-5);
}
