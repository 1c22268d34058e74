//! Sample-set loading from single-column CSV files.
//!
//! Each input file carries one nanosecond latency value per line, no header.
//! That is the exact layout the capture benchmark dumps.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Handled in `main` with a user notice and a clean exit; every other
    /// variant propagates as an unrecoverable failure.
    #[error("no such file: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sample {value:?} ({path}, line {line})", value = .value, path = .path.display(), line = .line)]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Read one latency sample per line. Blank lines (including the trailing
/// newline the producer writes) are skipped.
pub fn read_samples(path: &Path) -> Result<Vec<f64>, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut samples = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let field = line.trim();
        if field.is_empty() {
            continue;
        }
        let value: f64 = field.parse().map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            value: field.to_string(),
            source: e,
        })?;
        samples.push(value);
    }
    Ok(samples)
}
