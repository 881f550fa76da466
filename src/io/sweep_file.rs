//! Read/write sweep JSON files.
//!
//! A sweep file is the portable representation of one run:
//! - model settings and the anchors derived from them
//! - which curves were evaluated
//! - every evaluated row, so the figure can be redrawn without recomputing
//!
//! The schema is defined by `domain::SweepFile`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::app::pipeline::SweepOutput;
use crate::domain::{CurveKind, SweepFile};
use crate::error::AppError;

/// Tool name stamped into every sweep file.
pub const TOOL_NAME: &str = "cpg";

/// Package a sweep for serialization.
pub fn to_sweep_file(output: &SweepOutput, curves: &[CurveKind]) -> SweepFile {
    SweepFile {
        tool: TOOL_NAME.to_string(),
        generated_at: Utc::now(),
        settings: *output.model.settings(),
        anchors: output.model.anchors(),
        curves: curves.to_vec(),
        rows: output.rows.clone(),
    }
}

/// Write a sweep JSON file.
pub fn write_sweep_json(path: &Path, sweep: &SweepFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create sweep JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(BufWriter::new(file), sweep)
        .map_err(|e| AppError::input(format!("Failed to write sweep JSON: {e}")))?;

    info!(path = %path.display(), rows = sweep.rows.len(), "wrote sweep JSON");
    Ok(())
}

/// Read a sweep JSON file.
pub fn read_sweep_json(path: &Path) -> Result<SweepFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open sweep JSON '{}': {e}", path.display())))?;
    let sweep: SweepFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid sweep JSON: {e}")))?;

    if sweep.curves.is_empty() {
        return Err(AppError::input("Sweep JSON lists no curves."));
    }
    Ok(sweep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_sweep;
    use crate::domain::SweepConfig;

    #[test]
    fn sweep_json_reloads_rows_and_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        let config = SweepConfig {
            points: 12,
            ..SweepConfig::default()
        };
        let out = run_sweep(&config).unwrap();
        let file = to_sweep_file(&out, &config.curves);

        write_sweep_json(&path, &file).unwrap();
        let back = read_sweep_json(&path).unwrap();

        assert_eq!(back.tool, "cpg");
        assert_eq!(back.settings, config.settings);
        assert_eq!(back.anchors, out.model.anchors());
        assert_eq!(back.curves, config.curves);
        assert_eq!(back.rows, out.rows);
    }

    #[test]
    fn malformed_json_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_sweep_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().starts_with("Invalid sweep JSON"));
    }

    #[test]
    fn missing_file_is_input_error() {
        let err = read_sweep_json(Path::new("/nonexistent/sweep.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
