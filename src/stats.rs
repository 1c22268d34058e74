//! Per-series summary statistics.

use hdrhistogram::Histogram;
use serde::Serialize;

/// Streaming mean/variance accumulator (Welford's update).
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlineStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl OnlineStats {
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation, matching what the capture benchmark
    /// prints alongside each dump.
    pub fn stddev(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.m2 / self.count as f64).sqrt()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub min_ns: f64,
    pub max_ns: f64,
    pub mean_ns: f64,
    pub stddev_ns: f64,
    pub median_ns: f64,
    pub p25_ns: f64,
    pub p75_ns: f64,
    pub p95_ns: f64,
    pub p99_ns: f64,
}

/// Compute the summary for one sample set, or `None` when it is empty.
///
/// min/max/median/quartiles come from a sort, tail percentiles from an
/// hdrhistogram recording of the nanosecond values.
pub fn summarize(samples: &[f64]) -> Option<SeriesSummary> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();

    let mut online = OnlineStats::default();
    let mut hist = Histogram::<u64>::new(3).ok()?;
    for &v in samples {
        online.push(v);
        // latencies are positive; clamp keeps the recording in range
        hist.record(v.round().max(1.0) as u64).ok()?;
    }

    Some(SeriesSummary {
        count: n,
        min_ns: sorted[0],
        max_ns: sorted[n - 1],
        mean_ns: online.mean(),
        stddev_ns: online.stddev(),
        median_ns: sorted[n / 2],
        p25_ns: sorted[n / 4],
        p75_ns: sorted[3 * n / 4],
        p95_ns: hist.value_at_quantile(0.95) as f64,
        p99_ns: hist.value_at_quantile(0.99) as f64,
    })
}
