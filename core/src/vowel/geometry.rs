//! Per-vowel polar coordinates relative to a vowel-space centre.
//!
//! Output is aligned 1:1 with the input; a vowel with a NaN formant maps to
//! `None`.

use super::check_paired;
use crate::prelude::StatsResult;
use crate::telemetry::LogManager;

fn per_vowel<F>(
    f1: &[f64],
    f2: &[f64],
    logger: &LogManager,
    op: F,
) -> StatsResult<Vec<Option<f64>>>
where
    F: Fn(f64, f64) -> f64,
{
    check_paired(f1, f2, logger)?;
    Ok(f1
        .iter()
        .zip(f2)
        .map(|(&a, &b)| {
            if a.is_nan() || b.is_nan() {
                None
            } else {
                Some(op(a, b))
            }
        })
        .collect())
}

/// Euclidean distance of each vowel from `(f1c, f2c)`.
pub fn vowel_norms(
    f1: &[f64],
    f2: &[f64],
    f1c: f64,
    f2c: f64,
) -> StatsResult<Vec<Option<f64>>> {
    let logger = LogManager::new("vowel_norms");
    per_vowel(f1, f2, &logger, |a, b| {
        let (d1, d2) = (a - f1c, b - f2c);
        (d1 * d1 + d2 * d2).sqrt()
    })
}

/// Angle in radians of each vowel around `(f1c, f2c)`, measured as
/// `atan2(f1 - f1c, f2 - f2c)`.
pub fn vowel_angles(
    f1: &[f64],
    f2: &[f64],
    f1c: f64,
    f2c: f64,
) -> StatsResult<Vec<Option<f64>>> {
    let logger = LogManager::new("vowel_angles");
    per_vowel(f1, f2, &logger, |a, b| (a - f1c).atan2(b - f2c))
}
