//! Convenience re-exports for building coil-field visualizations.

pub use crate::constants::{
    ideal_solenoid_axial_field, loop_center_field, VACUUM_PERMEABILITY,
};
pub use crate::errors::CoilFieldError;
pub use crate::fields::{loop_field, solenoid_field, turn_offsets, FieldVector, LOOP_SEGMENTS};
pub use crate::geometry::{CoilGeometry, FieldKey, GeometryError};
pub use crate::io::{write_grid_csv, write_streamlines_csv};
pub use crate::lines::{FieldLineBuilder, SeedLayout};
pub use crate::math::{linspace, Scalar, R2, R3};
pub use crate::sampling::{sample_magnitude_grid, GridSpec};
pub use crate::trace::{
    trace_bidirectional, trace_field_line, Streamline, TraceBounds, TraceConfig, FIELD_FLOOR,
};
pub use crate::units::{Ampere, Current, FluxDensity, Length, Meter, Quantity, Tesla, Unit};
