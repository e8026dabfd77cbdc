use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Matrix, Point, Real, UnitVector, Vector};
use crate::shape::{Ball, Capsule, Cuboid, Cylinder, SupportMap};
use na::Unit;
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A cylindrical shape.
    Cylinder,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// An analytic shape, with its actual type.
///
/// Every query is dispatched with a `match` on the variant: no allocation and
/// no dynamic dispatch are involved.
pub enum Shape {
    /// A ball shape.
    Ball(Ball),
    /// A cuboid shape.
    Cuboid(Cuboid),
    /// A capsule shape.
    Capsule(Capsule),
    /// A cylindrical shape.
    Cylinder(Cylinder),
}

impl Shape {
    /// The type of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Ball(_) => ShapeType::Ball,
            Shape::Cuboid(_) => ShapeType::Cuboid,
            Shape::Capsule(_) => ShapeType::Capsule,
            Shape::Cylinder(_) => ShapeType::Cylinder,
        }
    }

    /// Converts this shape into a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            Shape::Ball(b) => Some(b),
            _ => None,
        }
    }

    /// Converts this shape into a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            Shape::Cuboid(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this shape into a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match self {
            Shape::Capsule(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this shape into a cylinder, if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            Shape::Cylinder(c) => Some(c),
            _ => None,
        }
    }

    /// Computes the local-space [`Aabb`] of this shape.
    pub fn local_aabb(&self) -> Aabb {
        match self {
            Shape::Ball(b) => b.local_aabb(),
            Shape::Cuboid(c) => c.local_aabb(),
            Shape::Capsule(c) => c.local_aabb(),
            Shape::Cylinder(c) => c.local_aabb(),
        }
    }

    /// Computes the world-space [`Aabb`] of this shape, transformed by `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        match self {
            Shape::Ball(b) => b.aabb(pos),
            Shape::Cuboid(c) => c.aabb(pos),
            Shape::Capsule(c) => c.aabb(pos),
            Shape::Cylinder(c) => c.aabb(pos),
        }
    }

    /// Computes the local-space bounding sphere of this shape.
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        match self {
            Shape::Ball(b) => b.local_bounding_sphere(),
            Shape::Cuboid(c) => c.local_bounding_sphere(),
            Shape::Capsule(c) => c.local_bounding_sphere(),
            Shape::Cylinder(c) => c.local_bounding_sphere(),
        }
    }

    /// Computes the world-space bounding sphere of this shape, transformed by `pos`.
    pub fn bounding_sphere(&self, pos: &Isometry<Real>) -> BoundingSphere {
        self.local_bounding_sphere().transform_by(pos)
    }

    /// The surface area of this shape.
    pub fn area(&self) -> Real {
        match self {
            Shape::Ball(b) => b.area(),
            Shape::Cuboid(c) => c.area(),
            Shape::Capsule(c) => c.area(),
            Shape::Cylinder(c) => c.area(),
        }
    }

    /// The volume of this shape.
    pub fn volume(&self) -> Real {
        match self {
            Shape::Ball(b) => b.volume(),
            Shape::Cuboid(c) => c.volume(),
            Shape::Capsule(c) => c.volume(),
            Shape::Cylinder(c) => c.volume(),
        }
    }

    /// The angular inertia tensor of this shape with the given `mass`, about its local center.
    ///
    /// The local axes are the principal axes of every analytic shape so the tensor is diagonal.
    pub fn angular_inertia(&self, mass: Real) -> Matrix<Real> {
        match self {
            Shape::Ball(b) => b.angular_inertia(mass),
            Shape::Cuboid(c) => c.angular_inertia(mass),
            Shape::Capsule(c) => c.angular_inertia(mass),
            Shape::Cylinder(c) => c.angular_inertia(mass),
        }
    }

    /// Computes the mass properties of this shape given its uniform `density`.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        match self {
            Shape::Ball(b) => b.mass_properties(density),
            Shape::Cuboid(c) => c.mass_properties(density),
            Shape::Capsule(c) => c.mass_properties(density),
            Shape::Cylinder(c) => c.mass_properties(density),
        }
    }

    /// Projects every point of this shape on the local-space `axis`.
    ///
    /// Returns the exact `(min, max)` support interval relative to the shape center. Because every
    /// analytic shape is centrally symmetric, `min == -max`.
    #[inline]
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        match self {
            Shape::Ball(b) => b.project_on_axis(axis),
            Shape::Cuboid(c) => c.project_on_axis(axis),
            Shape::Capsule(c) => c.project_on_axis(axis),
            Shape::Cylinder(c) => c.project_on_axis(axis),
        }
    }
}

impl SupportMap for Shape {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match self {
            Shape::Ball(b) => b.local_support_point(dir),
            Shape::Cuboid(c) => c.local_support_point(dir),
            Shape::Capsule(c) => c.local_support_point(dir),
            Shape::Cylinder(c) => c.local_support_point(dir),
        }
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        match self {
            Shape::Ball(b) => b.local_support_point_toward(dir),
            Shape::Cuboid(c) => c.local_support_point_toward(dir),
            Shape::Capsule(c) => c.local_support_point_toward(dir),
            Shape::Cylinder(c) => c.local_support_point_toward(dir),
        }
    }
}

impl From<Ball> for Shape {
    fn from(ball: Ball) -> Self {
        Shape::Ball(ball)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Shape::Cuboid(cuboid)
    }
}

impl From<Capsule> for Shape {
    fn from(capsule: Capsule) -> Self {
        Shape::Capsule(capsule)
    }
}

impl From<Cylinder> for Shape {
    fn from(cylinder: Cylinder) -> Self {
        Shape::Cylinder(cylinder)
    }
}
