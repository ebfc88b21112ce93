use std::io::{self, Write};

use coil_field::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Classroom coil: 200 turns, 2 cm radius, 20 cm long, 5 A.
    let coil = CoilGeometry::new(0.02, 0.2, 200, 5.0)?;

    let center = solenoid_field(&coil, 0.0, 0.0);
    let ideal = ideal_solenoid_axial_field(coil.turns_per_meter(), coil.current);
    eprintln!("center Bz      : {}", center.flux_density());
    eprintln!("ideal solenoid : {}", FluxDensity::new(ideal));

    // Traced field lines as CSV on stdout (line,point,r,z).
    let mut builder = FieldLineBuilder::new();
    let lines = builder.compute_field_lines(&coil);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_streamlines_csv(&mut out, lines)?;
    out.flush()?;
    Ok(())
}
