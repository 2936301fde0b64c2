//! Transitions between missing and present values.
//!
//! Positions are reported 1-based: a result of `k` means the value at 1-based
//! position `k` differs in missingness from the one at `k - 1`.

use super::missing::is_missing_numeric;
use crate::telemetry::LogManager;

fn transitions(x: &[f64], threshold: f64) -> impl Iterator<Item = usize> {
    let flags = is_missing_numeric(x, threshold);
    (1..flags.len())
        .filter(move |&i| flags[i] != flags[i - 1])
        .map(|i| i + 1)
}

/// First 1-based position where missingness flips, if any.
pub fn first_changepoint(x: &[f64], threshold: f64) -> Option<usize> {
    let logger = LogManager::new("first_changepoint");
    if x.len() < 2 {
        return logger.undefined("fewer than two values");
    }
    transitions(x, threshold)
        .next()
        .or_else(|| logger.undefined("no transition"))
}

/// Last 1-based position where missingness flips, if any.
pub fn last_changepoint(x: &[f64], threshold: f64) -> Option<usize> {
    let logger = LogManager::new("last_changepoint");
    if x.len() < 2 {
        return logger.undefined("fewer than two values");
    }
    transitions(x, threshold)
        .last()
        .or_else(|| logger.undefined("no transition"))
}
