use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, PrincipalAngularInertia, Real};
use crate::shape::Capsule;

impl MassProperties {
    /// Total volume and per-unit-mass principal inertia of a capsule aligned with `y`.
    ///
    /// The cylindrical body and the two caps (one ball together) get a share of the mass
    /// proportional to their volume. The caps are shifted away from the center, which adds
    /// `(h²/4 + 3hr/8)` per unit of cap mass to the axes perpendicular to `y`.
    pub(crate) fn capsule_y_volume_unit_inertia(
        half_height: Real,
        radius: Real,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        let (cyl_vol, cyl_unit_i) = Self::cylinder_y_volume_unit_inertia(half_height, radius);
        let (ball_vol, ball_unit_i) = Self::ball_volume_unit_angular_inertia(radius);
        let cap_vol = cyl_vol + ball_vol;
        let mut cap_i = cyl_unit_i * cyl_vol + ball_unit_i * ball_vol;

        let h = half_height * 2.0;
        let extra = (h * h * 0.25 + h * radius * 3.0 / 8.0) * ball_vol;
        cap_i.x += extra;
        cap_i.z += extra;

        (cap_vol, cap_i / cap_vol)
    }

    /// Computes the mass properties of a capsule aligned with the `y` axis.
    ///
    /// `half_height` is half the distance between the centers of the two hemispherical caps.
    pub fn from_capsule(density: Real, half_height: Real, radius: Real) -> Self {
        let (cap_vol, cap_unit_i) = Self::capsule_y_volume_unit_inertia(half_height, radius);
        let cap_mass = cap_vol * density;

        Self::new(Point::origin(), cap_mass, cap_unit_i * cap_mass)
    }
}

impl Capsule {
    /// The angular inertia tensor of this capsule with the given `mass`, about its center.
    ///
    /// The symmetry axis is `y`, so `Iyy` is the axial term and `Ixx == Izz`.
    pub fn angular_inertia(&self, mass: Real) -> Matrix<Real> {
        let (_, unit_i) =
            MassProperties::capsule_y_volume_unit_inertia(self.half_height(), self.radius());
        Matrix::from_diagonal(&(unit_i * mass))
    }

    /// Computes the mass properties of this capsule given its uniform `density`.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_capsule(density, self.half_height(), self.radius())
    }
}
