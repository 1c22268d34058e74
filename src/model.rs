//! Report data model: the two loaded series and everything derived from them.

use anyhow::{ensure, Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::hist;
use crate::loader;
use crate::scale::MinMaxScaler;
use crate::stats::{self, SeriesSummary};

/// Fixed chart strings, inherited from the capture campaign the input files
/// come from.
pub const CHART_TITLE: &str = "Distribución de Latencias en Idle (Mutex vs Semáforo)";
pub const X_LABEL: &str = "Latencia (ns)";
pub const Y_LABEL: &str = "Frecuencia";
pub const MUTEX_LABEL: &str = "Mutex";
pub const SEM_LABEL: &str = "Semáforo";

/// One loaded sample set plus its derived data.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub label: &'static str,
    pub samples: Vec<f64>,
    /// Jointly normalized values in [0, 1]. The chart plots raw samples;
    /// these ride along on the report and show up in `--json` output.
    pub normalized: Vec<f64>,
    /// Occupancy of the shared bins.
    pub counts: Vec<u64>,
    pub summary: SeriesSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scaler: MinMaxScaler,
    /// Shared bin edges spanning the union of both raw ranges.
    pub edges: Vec<f64>,
    pub mutex: Series,
    pub sem: Series,
}

impl Report {
    /// Run the whole pipeline: load both files, fit the joint scaler,
    /// transform each set, compute shared bin edges over the raw values, and
    /// count both series into them. Pure function of the inputs.
    pub fn build(mutex_path: &Path, sem_path: &Path, bins: usize) -> Result<Self> {
        ensure!(bins >= 2, "at least 2 bin edges are required (got {bins})");

        let mutex_samples = loader::read_samples(mutex_path)?;
        let sem_samples = loader::read_samples(sem_path)?;

        let mut combined = Vec::with_capacity(mutex_samples.len() + sem_samples.len());
        combined.extend_from_slice(&mutex_samples);
        combined.extend_from_slice(&sem_samples);
        let scaler = MinMaxScaler::fit(&combined)
            .with_context(|| format!("fitting shared scaler over {} samples", combined.len()))?;

        let normalized_mutex = scaler.transform(&mutex_samples);
        let normalized_sem = scaler.transform(&sem_samples);

        let mutex_summary = stats::summarize(&mutex_samples)
            .with_context(|| format!("no samples in {}", mutex_path.display()))?;
        let sem_summary = stats::summarize(&sem_samples)
            .with_context(|| format!("no samples in {}", sem_path.display()))?;

        // The bin span is derived from the raw per-series extremes; the
        // scaler range is not consumed here.
        let raw_min = mutex_summary.min_ns.min(sem_summary.min_ns);
        let raw_max = mutex_summary.max_ns.max(sem_summary.max_ns);
        let edges = hist::linspace(raw_min, raw_max, bins);

        let mutex_counts = hist::count_into_bins(&mutex_samples, &edges);
        let sem_counts = hist::count_into_bins(&sem_samples, &edges);

        Ok(Self {
            scaler,
            edges,
            mutex: Series {
                label: MUTEX_LABEL,
                samples: mutex_samples,
                normalized: normalized_mutex,
                counts: mutex_counts,
                summary: mutex_summary,
            },
            sem: Series {
                label: SEM_LABEL,
                samples: sem_samples,
                normalized: normalized_sem,
                counts: sem_counts,
                summary: sem_summary,
            },
        })
    }
}
