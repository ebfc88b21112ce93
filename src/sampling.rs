//! Background-grid sampling of field magnitude.
//!
//! The renderer colors its background cells by |B|; this module batches the
//! per-point evaluator over a rectangular (r, z) window so that consumer
//! only handles plain sample rows.

use crate::errors::CoilFieldError;
use crate::fields::solenoid_field;
use crate::geometry::CoilGeometry;
use crate::math::{linspace, Scalar};

/// Rectangular (r, z) sampling window and its resolution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Radial window, in meters.
    pub r_range: (Scalar, Scalar),
    /// Axial window, in meters.
    pub z_range: (Scalar, Scalar),
    /// Samples across the radial window (columns).
    pub cols: usize,
    /// Samples across the axial window (rows).
    pub rows: usize,
}

impl GridSpec {
    /// Validates an explicit window.
    pub fn new(
        r_range: (Scalar, Scalar),
        z_range: (Scalar, Scalar),
        cols: usize,
        rows: usize,
    ) -> Result<Self, CoilFieldError> {
        if cols == 0 || rows == 0 {
            return Err(CoilFieldError::InvalidConfig(
                "grid must have at least one row and one column".into(),
            ));
        }
        Ok(Self {
            r_range,
            z_range,
            cols,
            rows,
        })
    }

    /// Window centered on the coil, matching the tracer's extent of four
    /// coil lengths in each direction.
    #[must_use]
    pub fn centered(geometry: &CoilGeometry, cols: usize, rows: usize) -> Self {
        let extent = 4.0 * geometry.length;
        Self {
            r_range: (-extent, extent),
            z_range: (-extent, extent),
            cols,
            rows,
        }
    }
}

/// Row-major |B| samples over `spec`: rows sweep the axial window, columns
/// the radial window. A degenerate coil yields all-zero samples.
#[must_use]
pub fn sample_magnitude_grid(geometry: &CoilGeometry, spec: &GridSpec) -> Vec<Scalar> {
    let rs = linspace(spec.r_range.0, spec.r_range.1, spec.cols);
    let zs = linspace(spec.z_range.0, spec.z_range.1, spec.rows);
    let mut samples = Vec::with_capacity(spec.rows * spec.cols);
    for z in &zs {
        for r in &rs {
            samples.push(solenoid_field(geometry, *r, *z).magnitude());
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn test_coil() -> CoilGeometry {
        CoilGeometry::new(0.02, 0.2, 50, 2.0).unwrap()
    }

    #[test]
    fn grid_has_rows_times_cols_samples() {
        let coil = test_coil();
        let spec = GridSpec::centered(&coil, 16, 9);
        let samples = sample_magnitude_grid(&coil, &spec);
        assert_eq!(samples.len(), 16 * 9);
        assert!(samples.iter().all(|b| b.is_finite()));
    }

    #[test]
    fn magnitude_is_symmetric_across_the_axis() {
        let coil = test_coil();
        // Odd column count puts a sample on r = 0; mirrored columns must
        // match by axisymmetry.
        let spec = GridSpec::new((-0.05, 0.05), (-0.1, 0.1), 5, 3).unwrap();
        let samples = sample_magnitude_grid(&coil, &spec);
        for row in 0..spec.rows {
            let base = row * spec.cols;
            assert_relative_eq!(
                samples[base],
                samples[base + 4],
                max_relative = 1.0e-9
            );
            assert_relative_eq!(
                samples[base + 1],
                samples[base + 3],
                max_relative = 1.0e-9
            );
        }
    }

    #[test]
    fn interior_samples_dominate_exterior_ones() {
        let coil = test_coil();
        let spec = GridSpec::new((0.0, 0.0), (0.0, 0.0), 1, 1).unwrap();
        let center = sample_magnitude_grid(&coil, &spec)[0];
        let far_spec = GridSpec::new((0.3, 0.3), (0.0, 0.0), 1, 1).unwrap();
        let far = sample_magnitude_grid(&coil, &far_spec)[0];
        assert!(center > 100.0 * far);
    }

    #[test]
    fn grid_spec_rejects_empty_resolution() {
        assert!(GridSpec::new((0.0, 1.0), (0.0, 1.0), 0, 4).is_err());
        assert!(GridSpec::new((0.0, 1.0), (0.0, 1.0), 4, 0).is_err());
    }

    #[test]
    fn degenerate_coil_samples_to_zero() {
        let coil = CoilGeometry {
            radius: -1.0,
            length: 0.2,
            turns: 50,
            current: 2.0,
        };
        let spec = GridSpec::centered(&coil, 4, 4);
        let samples = sample_magnitude_grid(&coil, &spec);
        assert!(samples.iter().all(|b| *b == 0.0));
    }
}
