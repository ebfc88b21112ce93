//! Field-line tracing by fixed-step Euler integration.
//!
//! A trace advances a point along the normalized local field direction in
//! fixed arc-length steps until the field magnitude underflows, the point
//! leaves the trace window, or the step budget runs out. All three are
//! normal terminations producing a valid (possibly short) polyline.
//!
//! Known limitation: fixed-step Euler accumulates geometric error where
//! lines curve sharply, most visibly near the coil's open ends. The drift is
//! part of the visualization's accepted fidelity; keep the integrator as is
//! unless the fidelity requirements change.

use crate::errors::CoilFieldError;
use crate::fields::FieldVector;
use crate::geometry::CoilGeometry;
use crate::math::{R2, Scalar};

/// Field magnitudes below this terminate a trace (no meaningful direction).
pub const FIELD_FLOOR: Scalar = 1.0e-12;

/// Step size and step budget for one directional trace.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceConfig {
    /// Arc-length advanced per step, in meters. Negative integrates
    /// upstream.
    pub step_size: Scalar,
    /// Maximum steps per directional trace.
    pub max_steps: usize,
}

impl TraceConfig {
    /// Validates an explicit configuration.
    pub fn new(step_size: Scalar, max_steps: usize) -> Result<Self, CoilFieldError> {
        if !step_size.is_finite() || step_size == 0.0 {
            return Err(CoilFieldError::InvalidConfig(format!(
                "step size must be finite and non-zero, got {step_size}"
            )));
        }
        if max_steps == 0 {
            return Err(CoilFieldError::InvalidConfig(
                "max steps must be at least 1".into(),
            ));
        }
        Ok(Self {
            step_size,
            max_steps,
        })
    }

    /// Step sizing used by the coil visualization: 1/400 of the coil length
    /// per step, with enough budget to cross the trace window and back.
    #[must_use]
    pub fn for_coil(geometry: &CoilGeometry) -> Self {
        Self {
            step_size: geometry.length / 400.0,
            max_steps: 4000,
        }
    }

    /// The same configuration integrating in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            step_size: -self.step_size,
            max_steps: self.max_steps,
        }
    }
}

/// Axis-aligned window a trace is confined to; stepping outside it ends the
/// trace at the exit point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceBounds {
    /// Maximum |r| in meters.
    pub r_extent: Scalar,
    /// Maximum |z| in meters.
    pub z_extent: Scalar,
}

impl TraceBounds {
    /// Window used by the coil visualization: four coil lengths in both the
    /// radial and axial directions.
    #[must_use]
    pub fn for_coil(geometry: &CoilGeometry) -> Self {
        let extent = 4.0 * geometry.length;
        Self {
            r_extent: extent,
            z_extent: extent,
        }
    }

    /// True while `point` is inside the window.
    #[must_use]
    pub fn contains(&self, point: R2) -> bool {
        point.x.abs() <= self.r_extent && point.y.abs() <= self.z_extent
    }
}

/// Ordered, immutable polyline approximating one field line in the (r, z)
/// half-plane. Carries no reference to the coil that produced it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Streamline {
    points: Vec<R2>,
}

impl Streamline {
    pub(crate) fn new(points: Vec<R2>) -> Self {
        Self { points }
    }

    /// The traced points, in order.
    #[must_use]
    pub fn points(&self) -> &[R2] {
        &self.points
    }

    /// Number of traced points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the line carries no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Traces one directional field line from `seed`, sampling `field` at each
/// step. `config.step_size` may be negative to integrate upstream.
///
/// The seed is always the first point. The trace ends when the field
/// magnitude drops under [`FIELD_FLOOR`], the point exits `bounds`, or
/// `config.max_steps` steps have been taken, whichever comes first.
#[must_use]
pub fn trace_field_line<F>(
    mut field: F,
    seed: R2,
    config: &TraceConfig,
    bounds: &TraceBounds,
) -> Streamline
where
    F: FnMut(Scalar, Scalar) -> FieldVector,
{
    let mut points = Vec::with_capacity(config.max_steps + 1);
    let mut position = seed;
    points.push(position);

    for _ in 0..config.max_steps {
        if !bounds.contains(position) {
            break;
        }
        let sample = field(position.x, position.y);
        let Some(direction) = sample.direction(FIELD_FLOOR) else {
            break;
        };
        position += direction * config.step_size;
        points.push(position);
    }

    Streamline::new(points)
}

/// Traces the full field line passing through `seed`: once downstream, once
/// upstream, concatenated as reversed-backward ++ forward with the seed
/// appearing exactly once. The order is fixed so consecutive frames render
/// the same polyline without reordering.
#[must_use]
pub fn trace_bidirectional<F>(
    mut field: F,
    seed: R2,
    config: &TraceConfig,
    bounds: &TraceBounds,
) -> Streamline
where
    F: FnMut(Scalar, Scalar) -> FieldVector,
{
    let backward = trace_field_line(&mut field, seed, &config.reversed(), bounds);
    let forward = trace_field_line(&mut field, seed, config, bounds);

    let mut points = backward.points().to_vec();
    points.reverse();
    points.pop(); // the seed; the forward half starts with it
    points.extend_from_slice(forward.points());
    Streamline::new(points)
}
