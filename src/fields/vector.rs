use crate::math::{R2, Scalar};
use crate::units::FluxDensity;

/// Magnetic field sample in the coil's cylindrical frame, in tesla (T).
///
/// Axisymmetry leaves no azimuthal component, so a sample is fully described
/// by its radial and axial parts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldVector {
    /// Radial component Br (T).
    pub br: Scalar,
    /// Axial component Bz (T).
    pub bz: Scalar,
}

impl FieldVector {
    /// The zero field.
    pub const ZERO: Self = Self { br: 0.0, bz: 0.0 };

    /// Constructs a field sample from its components.
    #[must_use]
    pub const fn new(br: Scalar, bz: Scalar) -> Self {
        Self { br, bz }
    }

    /// Flux density magnitude |B|.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.br.hypot(self.bz)
    }

    /// Magnitude as a typed tesla quantity.
    #[must_use]
    pub fn flux_density(&self) -> FluxDensity {
        FluxDensity::new(self.magnitude())
    }

    /// Unit direction of the field, or `None` when the magnitude sits below
    /// `floor` and no meaningful direction exists.
    #[must_use]
    pub fn direction(&self, floor: Scalar) -> Option<R2> {
        let magnitude = self.magnitude();
        if magnitude < floor {
            None
        } else {
            Some(R2::new(self.br / magnitude, self.bz / magnitude))
        }
    }
}
