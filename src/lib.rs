#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and closed-form reference fields.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared mathematical utilities (scalar/vector aliases, sample spacing).
pub mod math;
/// Coil geometry description, validation, and cache keying.
pub mod geometry;
/// Magnetic field evaluation for current loops and finite solenoids.
pub mod fields;
/// Field-line tracing by fixed-step Euler integration.
pub mod trace;
/// Field-line set construction and per-geometry caching.
pub mod lines;
/// Background-grid sampling of field magnitude.
pub mod sampling;
/// CSV export helpers for streamlines and grid samples.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
