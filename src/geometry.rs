//! Coil geometry description, boundary validation, and cache keying.

use thiserror::Error;

use crate::math::Scalar;

/// Errors raised when coil parameters fail validation at the UI boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Raised when the winding radius is zero, negative, or non-finite.
    #[error("coil radius must be a positive finite length, got {0}")]
    InvalidRadius(Scalar),
    /// Raised when the coil length is zero, negative, or non-finite.
    #[error("coil length must be a positive finite length, got {0}")]
    InvalidLength(Scalar),
    /// Raised when the winding has no turns.
    #[error("coil must have at least one turn")]
    ZeroTurns,
    /// Raised when the drive current is not a finite number.
    #[error("coil current must be finite, got {0}")]
    InvalidCurrent(Scalar),
}

/// Immutable description of a finite solenoid: a stack of `turns` coaxial
/// circular loops of radius `radius`, spread over `length` along the axis,
/// each carrying `current`.
///
/// Equal geometries produce numerically identical fields; the struct is the
/// sole input to every evaluator in the crate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilGeometry {
    /// Winding radius in meters.
    pub radius: Scalar,
    /// Axial length of the winding in meters.
    pub length: Scalar,
    /// Number of turns.
    pub turns: u32,
    /// Drive current in amperes.
    pub current: Scalar,
}

impl CoilGeometry {
    /// Validates UI-bound parameters into a coil description.
    pub fn new(
        radius: Scalar,
        length: Scalar,
        turns: u32,
        current: Scalar,
    ) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(GeometryError::InvalidLength(length));
        }
        if turns == 0 {
            return Err(GeometryError::ZeroTurns);
        }
        if !current.is_finite() {
            return Err(GeometryError::InvalidCurrent(current));
        }
        Ok(Self {
            radius,
            length,
            turns,
            current,
        })
    }

    /// True when the parameters cannot support field evaluation. The
    /// evaluators answer the zero field for such a coil instead of erroring.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
            || !(self.length.is_finite() && self.length > 0.0)
            || self.turns == 0
            || !self.current.is_finite()
    }

    /// Winding density `turns / length` in turns per meter.
    #[must_use]
    pub fn turns_per_meter(&self) -> Scalar {
        Scalar::from(self.turns) / self.length
    }

    /// Structural key identifying the field-line set this coil produces.
    #[must_use]
    pub fn cache_key(&self) -> FieldKey {
        FieldKey {
            current_bits: self.current.to_bits(),
            turns: self.turns,
            length_bits: self.length.to_bits(),
        }
    }
}

/// Structural identity of a computed field-line set, derived from
/// `(current, turns, length)`. The winding radius is fixed per
/// visualization instance and intentionally not part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    current_bits: u64,
    turns: u32,
    length_bits: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_parameters() {
        let coil = CoilGeometry::new(0.02, 0.2, 200, 5.0).expect("valid coil");
        assert!(!coil.is_degenerate());
        assert_eq!(coil.turns, 200);
    }

    #[test]
    fn new_rejects_each_degenerate_parameter() {
        assert_eq!(
            CoilGeometry::new(0.0, 0.2, 200, 5.0),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert_eq!(
            CoilGeometry::new(0.02, -1.0, 200, 5.0),
            Err(GeometryError::InvalidLength(-1.0))
        );
        assert_eq!(
            CoilGeometry::new(0.02, 0.2, 0, 5.0),
            Err(GeometryError::ZeroTurns)
        );
        assert!(matches!(
            CoilGeometry::new(0.02, 0.2, 200, Scalar::NAN),
            Err(GeometryError::InvalidCurrent(_))
        ));
    }

    #[test]
    fn nan_radius_reads_as_degenerate() {
        let coil = CoilGeometry {
            radius: Scalar::NAN,
            length: 0.2,
            turns: 10,
            current: 1.0,
        };
        assert!(coil.is_degenerate());
    }

    #[test]
    fn cache_key_tracks_current_turns_and_length() {
        let a = CoilGeometry::new(0.02, 0.2, 200, 5.0).unwrap();
        let b = CoilGeometry::new(0.02, 0.2, 200, 5.0).unwrap();
        assert_eq!(a.cache_key(), b.cache_key());

        let different_current = CoilGeometry::new(0.02, 0.2, 200, 5.5).unwrap();
        assert_ne!(a.cache_key(), different_current.cache_key());

        let different_turns = CoilGeometry::new(0.02, 0.2, 201, 5.0).unwrap();
        assert_ne!(a.cache_key(), different_turns.cache_key());

        // Radius is fixed per visualization instance and excluded by design.
        let different_radius = CoilGeometry::new(0.03, 0.2, 200, 5.0).unwrap();
        assert_eq!(a.cache_key(), different_radius.cache_key());
    }
}
