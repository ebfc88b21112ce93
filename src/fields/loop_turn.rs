use std::f64::consts::PI;

use crate::constants::VACUUM_PERMEABILITY;
use crate::math::{R3, Scalar};

use super::FieldVector;

/// Angular segments per loop in the Biot–Savart discretization.
pub const LOOP_SEGMENTS: usize = 80;

/// Separation magnitudes below this put the query point on the wire itself;
/// the segment's contribution is skipped instead of divided by.
const WIRE_EPSILON: Scalar = 1.0e-9;

/// Magnetic field of one circular current loop at a point `(r, z)` relative
/// to the loop center, with the loop lying in the `z = 0` plane.
///
/// The loop is discretized into [`LOOP_SEGMENTS`] equal angular segments and
/// each midpoint contributes `dB = (μ₀ I / 4π) · (dl × r⃗) / |r⃗|³`. By
/// axisymmetry the result depends only on `(r, z)`; `Br` is odd and `Bz`
/// even in `r`. A non-positive or non-finite radius yields the zero field.
#[must_use]
pub fn loop_field(radius: Scalar, current: Scalar, r: Scalar, z: Scalar) -> FieldVector {
    if !radius.is_finite() || radius <= 0.0 {
        return FieldVector::ZERO;
    }

    let coeff = VACUUM_PERMEABILITY * current / (4.0 * PI);
    let d_phi = 2.0 * PI / LOOP_SEGMENTS as Scalar;
    // Evaluate at azimuth 0; the x axis then carries the radial direction.
    let point = R3::new(r, 0.0, z);

    let mut b = R3::zeros();
    for k in 0..LOOP_SEGMENTS {
        let phi = (k as Scalar + 0.5) * d_phi;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let segment = R3::new(radius * cos_phi, radius * sin_phi, 0.0);
        let dl = R3::new(-sin_phi, cos_phi, 0.0) * (radius * d_phi);
        let separation = point - segment;
        let distance = separation.norm();
        if distance <= WIRE_EPSILON {
            continue;
        }
        b += dl.cross(&separation) * (coeff / (distance * distance * distance));
    }

    FieldVector::new(b.x, b.z)
}
