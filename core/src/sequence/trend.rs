//! Linear trend of a sequence against its 1-based position.
//!
//! Missing values (NaN or `<= threshold`) are dropped but keep their position,
//! so the fitted line still runs over the unfiltered index axis.

use ndarray::Array1;

use super::missing::MissingConfig;
use crate::math::LinearFit;
use crate::prelude::{Measure, StatsResult};
use crate::telemetry::LogManager;

fn retained(y: &[f64], threshold: f64) -> (Array1<f64>, Array1<f64>) {
    let config = MissingConfig { threshold };
    let (positions, values): (Vec<f64>, Vec<f64>) = y
        .iter()
        .enumerate()
        .filter(|(_, &v)| !config.is_missing(v))
        .map(|(i, &v)| ((i + 1) as f64, v))
        .unzip();
    (Array1::from(positions), Array1::from(values))
}

fn fit_trend(
    y: &[f64],
    threshold: f64,
    logger: &LogManager,
) -> Option<(Array1<f64>, Array1<f64>, LinearFit)> {
    let (positions, values) = retained(y, threshold);
    if positions.len() < 2 {
        return logger.undefined("fewer than two retained values");
    }
    match LinearFit::fit(&positions, &values) {
        Some(fit) => Some((positions, values, fit)),
        None => logger.undefined("zero position variance"),
    }
}

/// Least-squares slope of the retained values against their position.
pub fn lm_slope(y: &[f64], threshold: f64) -> Option<f64> {
    let logger = LogManager::new("lm_slope");
    fit_trend(y, threshold, &logger).map(|(_, _, fit)| fit.slope)
}

/// Largest residual above the fitted trend line.
pub fn peak_prominence(y: &[f64], threshold: f64) -> Option<f64> {
    let logger = LogManager::new("peak_prominence");
    let (positions, values, fit) = fit_trend(y, threshold, &logger)?;
    let max_residual = fit
        .residuals(&positions, &values)
        .fold(f64::NEG_INFINITY, |acc, &r| if r > acc { r } else { acc });
    Some(max_residual)
}

/// [`lm_slope`] as a [`Measure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Slope {
    pub missing: MissingConfig,
}

impl Measure for Slope {
    fn name(&self) -> &'static str {
        "lm_slope"
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        Ok(lm_slope(x, self.missing.threshold))
    }
}

/// [`peak_prominence`] as a [`Measure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PeakProminence {
    pub missing: MissingConfig,
}

impl Measure for PeakProminence {
    fn name(&self) -> &'static str {
        "peak_prominence"
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        Ok(peak_prominence(x, self.missing.threshold))
    }
}
