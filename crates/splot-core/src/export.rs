// File: crates/splot-core/src/export.rs
// Summary: CSV export of sampled data.

use std::io::Write;

use crate::error::Result;
use crate::series::{SampleSet, SurfaceMesh};

/// Long-format CSV: `trace,axis,x,y`, one row per sample.
/// The trace column uses the name plus param suffix so rows from same-named functions stay apart.
pub fn write_csv<W: Write>(sets: &[SampleSet], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["trace", "axis", "x", "y"])?;
    for s in sets {
        let label = format!("{}{}", s.name, s.param_suffix);
        for (x, y) in s.points() {
            let (x, y) = (x.to_string(), y.to_string());
            wtr.write_record([label.as_str(), s.axis.id(), x.as_str(), y.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// `surface,x,y,z` rows for every grid point of every mesh.
pub fn write_surface_csv<W: Write>(meshes: &[SurfaceMesh], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["surface", "x", "y", "z"])?;
    for mesh in meshes {
        let label = format!("{}{}", mesh.name, mesh.param_suffix);
        for (row, &y) in mesh.z.iter().zip(&mesh.y) {
            for (&z, &x) in row.iter().zip(&mesh.x) {
                wtr.write_record([label.clone(), x.to_string(), y.to_string(), z.to_string()])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}
