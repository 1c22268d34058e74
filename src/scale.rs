//! Joint min-max normalization.
//!
//! The scaler is fitted once over the union of both sample sets so that the
//! two series share a single [0, 1] range.

use anyhow::{bail, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinMaxScaler {
    pub min: f64,
    pub max: f64,
}

impl MinMaxScaler {
    /// Fit the range over one combined value set.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            bail!("cannot fit a min-max scaler on zero samples");
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if !v.is_finite() {
                bail!("non-finite sample {v} in scaler input");
            }
            min = min.min(v);
            max = max.max(v);
        }
        Ok(Self { min, max })
    }

    /// Map values into [0, 1] using the fitted range. A degenerate range
    /// (max == min) maps every value to 0.0.
    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        let range = self.max - self.min;
        values
            .iter()
            .map(|&v| {
                if range == 0.0 {
                    0.0
                } else {
                    (v - self.min) / range
                }
            })
            .collect()
    }
}
