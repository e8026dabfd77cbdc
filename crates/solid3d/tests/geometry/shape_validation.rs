use solid3d::math::{Real, Vector};
use solid3d::shape::{Ball, Capsule, Cuboid, Cylinder, ShapeError};

#[test]
fn constructors_reject_degenerate_dimensions() {
    let bad: [Real; 4] = [0.0, -1.0, Real::NAN, Real::INFINITY];

    for value in bad {
        assert!(Ball::try_new(value).is_err());
        assert!(Cuboid::try_new(Vector::new(1.0, value, 1.0)).is_err());
        assert!(Cuboid::try_from_dimensions(value, 1.0, 1.0).is_err());
        assert!(Capsule::try_new(value, 1.0).is_err());
        assert!(Capsule::try_new(1.0, value).is_err());
        assert!(Cylinder::try_new(value, 1.0).is_err());
        assert!(Cylinder::try_new(1.0, value).is_err());
    }
}

#[test]
fn error_names_the_rejected_dimension() {
    assert_eq!(
        Cuboid::try_from_dimensions(1.0, -2.0, 3.0),
        Err(ShapeError::NonPositiveDimension {
            dimension: "width",
            value: -2.0
        })
    );
    assert_eq!(
        Cylinder::try_new(1.0, 0.0),
        Err(ShapeError::NonPositiveDimension {
            dimension: "radius",
            value: 0.0
        })
    );
}

#[test]
fn failed_setters_leave_shapes_untouched() {
    let mut cuboid = Cuboid::from_dimensions(1.0, 2.0, 3.0);
    let before = cuboid;

    assert!(cuboid.set_length(0.0).is_err());
    assert!(cuboid.set_width(-4.0).is_err());
    assert!(cuboid.set_height(Real::NAN).is_err());
    assert!(cuboid.set_half_extents(Vector::new(1.0, 0.0, 1.0)).is_err());
    assert_eq!(cuboid, before);

    assert!(cuboid.set_height(5.0).is_ok());
    assert_eq!(cuboid.height(), 5.0);
}

#[test]
#[should_panic]
fn panicking_constructor_on_flat_cylinder() {
    let _ = Cylinder::new(0.0, 1.0);
}
