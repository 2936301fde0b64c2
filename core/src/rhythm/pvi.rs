//! Pairwise Variability Indices over duration sequences.

use crate::math::StatsHelper;
use crate::prelude::{Measure, StatsResult};
use crate::telemetry::LogManager;

/// Raw PVI: mean absolute difference between consecutive values.
pub fn rpvi(x: &[f64], remove_na: bool) -> Option<f64> {
    let x = StatsHelper::filtered(x, remove_na);
    if x.len() <= 1 {
        return LogManager::new("rpvi").undefined("fewer than two values");
    }
    let total: f64 = x.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    Some(total / (x.len() - 1) as f64)
}

/// Normalised PVI: mean of each pairwise difference divided by the pair mean,
/// scaled by 100.
///
/// A pair averaging zero is not guarded and yields an infinite or NaN term.
pub fn npvi(x: &[f64], remove_na: bool) -> Option<f64> {
    let x = StatsHelper::filtered(x, remove_na);
    if x.len() <= 1 {
        return LogManager::new("npvi").undefined("fewer than two values");
    }
    let total: f64 = x
        .windows(2)
        .map(|w| (w[1] - w[0]).abs() / ((w[1] + w[0]) / 2.0))
        .sum();
    Some(100.0 * total / (x.len() - 1) as f64)
}

/// [`rpvi`] as a [`Measure`].
#[derive(Debug, Clone, Copy)]
pub struct Rpvi {
    pub remove_na: bool,
}

impl Default for Rpvi {
    fn default() -> Self {
        Self { remove_na: true }
    }
}

impl Measure for Rpvi {
    fn name(&self) -> &'static str {
        "rpvi"
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        Ok(rpvi(x, self.remove_na))
    }
}

/// [`npvi`] as a [`Measure`].
#[derive(Debug, Clone, Copy)]
pub struct Npvi {
    pub remove_na: bool,
}

impl Default for Npvi {
    fn default() -> Self {
        Self { remove_na: true }
    }
}

impl Measure for Npvi {
    fn name(&self) -> &'static str {
        "npvi"
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        Ok(npvi(x, self.remove_na))
    }
}
