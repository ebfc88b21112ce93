//! Baseline physical constants and closed-form reference fields.
//!
//! ## Accuracy
//!
//! μ₀ is a measured constant under the 2019 SI revision and is provided with
//! 12 significant figures, suitable for engineering applications. For the
//! latest values consult NIST directly.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Mohr, P. J., Newell, D. B., Taylor, B. N., & Tiesinga, E. (2019). CODATA Recommended Values of the Fundamental Physical Constants: 2018.

use crate::math::Scalar;

/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
/// Note: CODATA 2022 value is 1.25663706127 × 10⁻⁶ H/m with relative uncertainty ~10⁻¹⁰.
pub const VACUUM_PERMEABILITY: Scalar = 1.256_637_062_12e-6;

/// On-axis flux density of an ideal (infinitely long) solenoid,
/// `B = μ₀ n I`, for a winding density `n` in turns per meter.
#[inline]
#[must_use]
pub fn ideal_solenoid_axial_field(turns_per_meter: Scalar, current: Scalar) -> Scalar {
    VACUUM_PERMEABILITY * turns_per_meter * current
}

/// Flux density at the center of a single circular loop, `B = μ₀ I / (2 R)`.
/// Requires `radius > 0`.
#[inline]
#[must_use]
pub fn loop_center_field(radius: Scalar, current: Scalar) -> Scalar {
    assert!(radius > 0.0);
    VACUUM_PERMEABILITY * current / (2.0 * radius)
}
