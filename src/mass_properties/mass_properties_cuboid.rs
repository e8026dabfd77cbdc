use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, PrincipalAngularInertia, Real, Vector};
use crate::shape::Cuboid;

impl MassProperties {
    pub(crate) fn cuboid_volume_unit_inertia(
        half_extents: Vector<Real>,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        let volume = half_extents.x * half_extents.y * half_extents.z * 8.0;
        let ix = (half_extents.x * half_extents.x) / 3.0;
        let iy = (half_extents.y * half_extents.y) / 3.0;
        let iz = (half_extents.z * half_extents.z) / 3.0;

        (volume, Vector::new(iy + iz, ix + iz, ix + iy))
    }

    /// Computes the mass properties of a cuboid.
    pub fn from_cuboid(density: Real, half_extents: Vector<Real>) -> Self {
        let (vol, unit_i) = Self::cuboid_volume_unit_inertia(half_extents);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}

impl Cuboid {
    /// The angular inertia tensor of this cuboid with the given `mass`, about its center.
    ///
    /// `Ixx = m(w² + h²)/12`, `Iyy = m(l² + h²)/12` and `Izz = m(l² + w²)/12`.
    pub fn angular_inertia(&self, mass: Real) -> Matrix<Real> {
        let (_, unit_i) = MassProperties::cuboid_volume_unit_inertia(self.half_extents());
        Matrix::from_diagonal(&(unit_i * mass))
    }

    /// Computes the mass properties of this cuboid given its uniform `density`.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_cuboid(density, self.half_extents())
    }
}
