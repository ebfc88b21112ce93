//! Magnetic field evaluation for current loops and finite solenoids.

mod loop_turn;
mod solenoid;
mod vector;

pub use loop_turn::{loop_field, LOOP_SEGMENTS};
pub use solenoid::{solenoid_field, turn_offsets};
pub use vector::FieldVector;
