use crate::math::{Isometry, Matrix, Point, PrincipalAngularInertia, Real, Rotation};
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};
use na::ComplexField;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a solid shape with uniform density.
pub struct MassProperties {
    /// The center of mass expressed in the local-space of the shape.
    pub local_com: Point<Real>,
    /// The inverse of the mass.
    ///
    /// If this is zero, the mass is assumed to be infinite.
    pub inv_mass: Real,
    /// The inverse of the square root of the principal angular inertia.
    ///
    /// Components set to zero are assumed to be infinite along the corresponding principal axis.
    pub inv_principal_inertia_sqrt: PrincipalAngularInertia<Real>,
    /// The principal vectors of the local angular inertia tensor.
    pub principal_inertia_local_frame: Rotation<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from a center-of-mass, a mass, and principal inertia.
    ///
    /// The principal angular inertia are the angular inertia along the coordinate axes in the
    /// local-space of the shape.
    pub fn new(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        Self::with_principal_inertia_frame(local_com, mass, principal_inertia, Rotation::identity())
    }

    /// Initializes the mass properties from a center-of-mass, a mass, principal inertia and axes.
    ///
    /// The principal angular inertia are the angular inertia along the coordinate axes defined by
    /// `principal_inertia_local_frame`.
    pub fn with_principal_inertia_frame(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
        principal_inertia_local_frame: Rotation<Real>,
    ) -> Self {
        let inv_mass = utils::inv(mass);
        let inv_principal_inertia_sqrt =
            principal_inertia.map(|e| utils::inv(ComplexField::sqrt(e)));
        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
            principal_inertia_local_frame,
        }
    }

    /// The mass.
    #[inline]
    pub fn mass(&self) -> Real {
        utils::inv(self.inv_mass)
    }

    /// The angular inertia along the principal inertia axes.
    pub fn principal_inertia(&self) -> PrincipalAngularInertia<Real> {
        self.inv_principal_inertia_sqrt.map(|e| utils::inv(e * e))
    }

    /// The world-space center of mass.
    pub fn world_com(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.local_com
    }

    /// Reconstructs the inverse angular inertia tensor from its principal values and axes.
    pub fn reconstruct_inverse_inertia_matrix(&self) -> Matrix<Real> {
        let inv_principal_inertia = self.inv_principal_inertia_sqrt.map(|e| e * e);
        self.rotate_diagonal(&inv_principal_inertia)
    }

    /// Reconstructs the angular inertia tensor from its principal values and axes.
    pub fn reconstruct_inertia_matrix(&self) -> Matrix<Real> {
        self.rotate_diagonal(&self.principal_inertia())
    }

    fn rotate_diagonal(&self, diag: &PrincipalAngularInertia<Real>) -> Matrix<Real> {
        let frame = self
            .principal_inertia_local_frame
            .to_rotation_matrix()
            .into_inner();
        frame * Matrix::from_diagonal(diag) * frame.transpose()
    }

    /// Transform each element of the mass properties.
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        // The parallel axis theorem is not applied: the center of mass moves along.
        Self {
            local_com: m * self.local_com,
            inv_mass: self.inv_mass,
            inv_principal_inertia_sqrt: self.inv_principal_inertia_sqrt,
            principal_inertia_local_frame: m.rotation * self.principal_inertia_local_frame,
        }
    }

    /// Changes the mass on these mass-properties.
    ///
    /// If `adjust_angular_inertia` is `true`, the angular inertia is multiplied by
    /// `new_mass / prev_mass`. Otherwise it is left unchanged.
    pub fn set_mass(&mut self, new_mass: Real, adjust_angular_inertia: bool) {
        let new_inv_mass = utils::inv(new_mass);

        if adjust_angular_inertia {
            let curr_mass = utils::inv(self.inv_mass);
            self.inv_principal_inertia_sqrt *=
                ComplexField::sqrt(new_inv_mass) * ComplexField::sqrt(curr_mass);
        }

        self.inv_mass = new_inv_mass;
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.reconstruct_inverse_inertia_matrix()
            .abs_diff_eq(&other.reconstruct_inverse_inertia_matrix(), epsilon)
            && self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.inv_mass.abs_diff_eq(&other.inv_mass, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.reconstruct_inverse_inertia_matrix().relative_eq(
            &other.reconstruct_inverse_inertia_matrix(),
            epsilon,
            max_relative,
        ) && self
            .local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self
                .inv_mass
                .relative_eq(&other.inv_mass, epsilon, max_relative)
    }
}
