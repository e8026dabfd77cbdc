use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, PrincipalAngularInertia, Real, Vector};
use crate::shape::Cylinder;
use na::RealField;

impl MassProperties {
    pub(crate) fn cylinder_y_volume_unit_inertia(
        half_height: Real,
        radius: Real,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        let volume = half_height * radius * radius * Real::pi() * 2.0;
        let sq_radius = radius * radius;
        let sq_height = half_height * half_height * 4.0;
        let off_principal = (sq_radius * 3.0 + sq_height) / 12.0;

        let inertia = Vector::new(off_principal, sq_radius / 2.0, off_principal);
        (volume, inertia)
    }

    /// Computes the mass properties of a cylinder aligned with the `y` axis.
    ///
    /// The axial inertia is `m r²/2`, the two others are `m(3r² + h²)/12`.
    pub fn from_cylinder(density: Real, half_height: Real, radius: Real) -> Self {
        let (cyl_vol, cyl_unit_i) = Self::cylinder_y_volume_unit_inertia(half_height, radius);
        let cyl_mass = cyl_vol * density;

        Self::new(Point::origin(), cyl_mass, cyl_unit_i * cyl_mass)
    }
}

impl Cylinder {
    /// The angular inertia tensor of this cylinder with the given `mass`, about its center.
    pub fn angular_inertia(&self, mass: Real) -> Matrix<Real> {
        let (_, unit_i) =
            MassProperties::cylinder_y_volume_unit_inertia(self.half_height(), self.radius());
        Matrix::from_diagonal(&(unit_i * mass))
    }

    /// Computes the mass properties of this cylinder given its uniform `density`.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_cylinder(density, self.half_height(), self.radius())
    }
}
