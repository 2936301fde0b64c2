//! Missing-value classification for numeric and symbolic sequences.

use serde::{Deserialize, Serialize};

use crate::telemetry::LogManager;

/// Threshold at or below which a numeric value counts as missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingConfig {
    pub threshold: f64,
}

impl Default for MissingConfig {
    fn default() -> Self {
        Self { threshold: 0.0 }
    }
}

impl MissingConfig {
    pub fn is_missing(&self, value: f64) -> bool {
        value.is_nan() || value <= self.threshold
    }
}

/// Flags every value that is NaN or `<= threshold`.
pub fn is_missing_numeric(x: &[f64], threshold: f64) -> Vec<bool> {
    let config = MissingConfig { threshold };
    x.iter().map(|&v| config.is_missing(v)).collect()
}

/// Flags every entry that is absent (`None`) or exactly equal to one of
/// `sentinels`.
pub fn is_missing_text<S: AsRef<str>>(x: &[Option<S>], sentinels: &[&str]) -> Vec<bool> {
    x.iter()
        .map(|value| match value {
            None => true,
            Some(text) => sentinels.contains(&text.as_ref()),
        })
        .collect()
}

/// Share of missing values in `x`, in `[0, 1]`. `None` for an empty slice.
pub fn missing_fraction(x: &[f64], threshold: f64) -> Option<f64> {
    if x.is_empty() {
        return LogManager::new("missing_fraction").undefined("empty sequence");
    }
    let count = is_missing_numeric(x, threshold)
        .into_iter()
        .filter(|&m| m)
        .count();
    Some(count as f64 / x.len() as f64)
}
