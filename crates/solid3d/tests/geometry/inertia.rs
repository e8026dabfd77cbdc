use crate::common::sample_shapes;
use approx::assert_relative_eq;
use solid3d::math::Real;

#[test]
fn inertia_is_diagonal_and_positive() {
    for shape in sample_shapes() {
        let inertia = shape.angular_inertia(2.0);

        for i in 0..3 {
            assert!(inertia[(i, i)] > 0.0);
            for j in 0..3 {
                if i != j {
                    assert_eq!(inertia[(i, j)], 0.0);
                }
            }
        }
    }
}

#[test]
fn inertia_scales_linearly_with_mass() {
    for shape in sample_shapes() {
        let unit = shape.angular_inertia(1.0);
        assert_relative_eq!(shape.angular_inertia(3.5), unit * 3.5, epsilon = 1.0e-4);
    }
}

#[test]
fn mass_properties_agree_with_volume_and_inertia() {
    let density: Real = 2.5;

    for shape in sample_shapes() {
        let props = shape.mass_properties(density);
        let mass = shape.volume() * density;

        assert_relative_eq!(props.mass(), mass, max_relative = 1.0e-5);
        assert_relative_eq!(
            props.reconstruct_inertia_matrix(),
            shape.angular_inertia(mass),
            max_relative = 1.0e-4
        );
    }
}
