use crate::geometry::CoilGeometry;
use crate::math::Scalar;

use super::{loop_field, FieldVector};

/// Axial turn-center offsets, evenly spaced across `[-length/2, +length/2]`.
/// A single turn sits at `0`. Also consumed by renderers drawing the winding
/// cross-section.
pub fn turn_offsets(length: Scalar, turns: u32) -> impl Iterator<Item = Scalar> {
    let half = length / 2.0;
    let spacing = if turns > 1 {
        length / Scalar::from(turns - 1)
    } else {
        0.0
    };
    (0..turns).map(move |i| {
        if turns == 1 {
            0.0
        } else {
            Scalar::from(i) * spacing - half
        }
    })
}

/// Net field of the full winding at `(r, z)`, superposing [`loop_field`]
/// over every turn.
///
/// This is the hot path of the crate: a render frame may evaluate it once
/// per background-grid cell plus once per trace step, so the cost is kept at
/// O(turns · segments) with no allocation. Linear in the drive current. A
/// degenerate coil yields the zero field rather than an error.
#[must_use]
pub fn solenoid_field(geometry: &CoilGeometry, r: Scalar, z: Scalar) -> FieldVector {
    if geometry.is_degenerate() {
        return FieldVector::ZERO;
    }

    let mut br = 0.0;
    let mut bz = 0.0;
    for turn_z in turn_offsets(geometry.length, geometry.turns) {
        let b = loop_field(geometry.radius, geometry.current, r, z - turn_z);
        br += b.br;
        bz += b.bz;
    }
    FieldVector::new(br, bz)
}
