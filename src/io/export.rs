//! Export sweeps and orbital profiles to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! plotting scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::{CurveKind, OrbitalProfile, SweepRow};
use crate::error::AppError;

/// Write a sweep as `natoms,<curve>_units,<curve>_mb,...`.
pub fn write_sweep_csv(path: &Path, rows: &[SweepRow], curves: &[CurveKind]) -> Result<(), AppError> {
    let mut file = create(path)?;

    let mut header = String::from("natoms");
    for kind in curves {
        header.push_str(&format!(",{0}_units,{0}_mb", kind.slug()));
    }
    writeln!(file, "{header}").map_err(|e| write_error("header", e))?;

    for row in rows {
        let mut line = format!("{}", row.natoms);
        for &kind in curves {
            match row.sample(kind) {
                Some(s) => line.push_str(&format!(",{},{:.6}", s.units, s.memory_mb)),
                None => line.push_str(",,"),
            }
        }
        writeln!(file, "{line}").map_err(|e| write_error("row", e))?;
    }

    file.flush().map_err(|e| write_error("file", e))?;
    info!(path = %path.display(), rows = rows.len(), "wrote sweep CSV");
    Ok(())
}

/// Write orbital profiles as `r,<basis>_psi,<basis>_rdf,...`.
pub fn write_orbital_csv(path: &Path, r: &[f64], profiles: &[OrbitalProfile]) -> Result<(), AppError> {
    let mut file = create(path)?;

    let mut header = String::from("r");
    for p in profiles {
        header.push_str(&format!(",{0}_psi,{0}_rdf", p.basis.slug()));
    }
    writeln!(file, "{header}").map_err(|e| write_error("header", e))?;

    for (i, ri) in r.iter().enumerate() {
        let mut line = format!("{ri:.10}");
        for p in profiles {
            line.push_str(&format!(",{:.10},{:.10}", p.psi[i], p.distribution[i]));
        }
        writeln!(file, "{line}").map_err(|e| write_error("row", e))?;
    }

    file.flush().map_err(|e| write_error("file", e))?;
    info!(path = %path.display(), rows = r.len(), "wrote orbital CSV");
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, AppError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))
}

fn write_error(what: &str, e: std::io::Error) -> AppError {
    AppError::input(format!("Failed to write export CSV {what}: {e}"))
}
