use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, PrincipalAngularInertia, Real, Vector};
use crate::shape::Ball;
use na::RealField;

impl MassProperties {
    pub(crate) fn ball_volume_unit_angular_inertia(
        radius: Real,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        let volume = Real::pi() * radius * radius * radius * 4.0 / 3.0;
        let i = radius * radius * 2.0 / 5.0;

        (volume, Vector::repeat(i))
    }

    /// Computes the mass properties of a ball.
    ///
    /// The angular inertia is `2/5 · mass · radius²` along every axis.
    pub fn from_ball(density: Real, radius: Real) -> Self {
        let (vol, unit_i) = Self::ball_volume_unit_angular_inertia(radius);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}

impl Ball {
    /// The angular inertia tensor of this ball with the given `mass`, about its center.
    pub fn angular_inertia(&self, mass: Real) -> Matrix<Real> {
        let (_, unit_i) = MassProperties::ball_volume_unit_angular_inertia(self.radius());
        Matrix::from_diagonal(&(unit_i * mass))
    }

    /// Computes the mass properties of this ball given its uniform `density`.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_ball(density, self.radius())
    }
}
