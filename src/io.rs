//! CSV export helpers for streamlines and grid samples.

use std::io::{self, Write};

use crate::math::Scalar;
use crate::sampling::GridSpec;
use crate::trace::Streamline;

/// Writes a field-line set as CSV rows `line,point,r,z`.
pub fn write_streamlines_csv<W: Write>(mut w: W, lines: &[Streamline]) -> io::Result<()> {
    writeln!(w, "line,point,r,z")?;
    for (line_index, line) in lines.iter().enumerate() {
        for (point_index, point) in line.points().iter().enumerate() {
            writeln!(
                w,
                "{},{},{:.16e},{:.16e}",
                line_index, point_index, point.x, point.y
            )?;
        }
    }
    Ok(())
}

/// Writes row-major grid samples as CSV rows `row,col,magnitude`. The sample
/// slice must have `spec.rows * spec.cols` entries, as produced by
/// [`crate::sampling::sample_magnitude_grid`].
pub fn write_grid_csv<W: Write>(mut w: W, spec: &GridSpec, samples: &[Scalar]) -> io::Result<()> {
    writeln!(w, "row,col,magnitude")?;
    for row in 0..spec.rows {
        for col in 0..spec.cols {
            let value = samples[row * spec.cols + col];
            writeln!(w, "{},{},{:.16e}", row, col, value)?;
        }
    }
    Ok(())
}
