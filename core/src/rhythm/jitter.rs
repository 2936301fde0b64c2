//! Cycle-to-cycle perturbation of inter-event periods.
//!
//! Each variant only counts windows whose relevant periods fall inside
//! `[minperiod, maxperiod]`. Relative jitter divides the mean deviation by
//! the mean of the counted periods plus the edge periods that seed the sum.
//! When nothing is counted the deviation stays zero and the result is still
//! returned.

use serde::{Deserialize, Serialize};

use crate::math::StatsHelper;
use crate::prelude::{Measure, StatsResult};
use crate::telemetry::LogManager;

/// Parameters shared by all jitter variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    pub minperiod: f64,
    pub maxperiod: f64,
    /// Report the mean deviation itself instead of dividing by the mean period.
    pub absolute: bool,
    pub remove_na: bool,
}

impl Default for JitterConfig {
    /// 0.1 ms to 20 ms, the usual period range for voice analysis.
    fn default() -> Self {
        Self {
            minperiod: 0.0001,
            maxperiod: 0.02,
            absolute: false,
            remove_na: true,
        }
    }
}

impl JitterConfig {
    pub fn new(minperiod: f64, maxperiod: f64) -> Self {
        Self {
            minperiod,
            maxperiod,
            ..Self::default()
        }
    }

    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn remove_na(mut self, remove_na: bool) -> Self {
        self.remove_na = remove_na;
        self
    }

    fn in_range(&self, period: f64) -> bool {
        period >= self.minperiod && period <= self.maxperiod
    }

    fn finish(&self, totaldev: f64, divisor: usize, sum: f64, n: usize) -> f64 {
        let jitter = totaldev / divisor as f64;
        if self.absolute {
            jitter
        } else {
            jitter / (sum / n as f64)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterKind {
    Local,
    Ddp,
    Rap,
    Ppq5,
}

impl JitterKind {
    pub fn compute(self, x: &[f64], config: &JitterConfig) -> Option<f64> {
        match self {
            JitterKind::Local => jitter_local(x, config),
            JitterKind::Ddp => jitter_ddp(x, config),
            JitterKind::Rap => jitter_rap(x, config),
            JitterKind::Ppq5 => jitter_ppq5(x, config),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JitterKind::Local => "jitter_local",
            JitterKind::Ddp => "jitter_ddp",
            JitterKind::Rap => "jitter_rap",
            JitterKind::Ppq5 => "jitter_ppq5",
        }
    }
}

/// Mean absolute difference of consecutive periods, both in range.
pub fn jitter_local(x: &[f64], config: &JitterConfig) -> Option<f64> {
    let x = StatsHelper::filtered(x, config.remove_na);
    let n = x.len();
    if n <= 1 {
        return LogManager::new("jitter_local").undefined("fewer than two periods");
    }

    let mut totaldev = 0.0;
    let mut sum = x[0];
    for w in x.windows(2) {
        if config.in_range(w[0]) && config.in_range(w[1]) {
            totaldev += (w[1] - w[0]).abs();
            sum += w[1];
        }
    }
    Some(config.finish(totaldev, n - 1, sum, n))
}

/// Difference of differences of periods over three-period windows.
pub fn jitter_ddp(x: &[f64], config: &JitterConfig) -> Option<f64> {
    three_point(x, config, "jitter_ddp", |w| ((w[2] - w[1]) - (w[1] - w[0])).abs())
}

/// Relative average perturbation: distance of each period from its
/// three-period mean.
pub fn jitter_rap(x: &[f64], config: &JitterConfig) -> Option<f64> {
    three_point(x, config, "jitter_rap", |w| (w[1] - (w[0] + w[1] + w[2]) / 3.0).abs())
}

fn three_point<F>(
    x: &[f64],
    config: &JitterConfig,
    routine: &'static str,
    deviation: F,
) -> Option<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let x = StatsHelper::filtered(x, config.remove_na);
    let n = x.len();
    if n <= 3 {
        return LogManager::new(routine).undefined("fewer than four periods");
    }

    let mut totaldev = 0.0;
    let mut sum = x[0] + x[n - 1];
    for w in x.windows(3) {
        if config.in_range(w[1]) {
            totaldev += deviation(w);
            sum += w[1];
        }
    }
    Some(config.finish(totaldev, n - 2, sum, n))
}

/// Five-point period perturbation quotient.
pub fn jitter_ppq5(x: &[f64], config: &JitterConfig) -> Option<f64> {
    let x = StatsHelper::filtered(x, config.remove_na);
    let n = x.len();
    if n <= 4 {
        return LogManager::new("jitter_ppq5").undefined("fewer than five periods");
    }

    let mut totaldev = 0.0;
    let mut sum = x[0] + x[1] + x[n - 2] + x[n - 1];
    for w in x.windows(5) {
        if config.in_range(w[2]) {
            totaldev += (w[2] - StatsHelper::mean(w)).abs();
            sum += w[2];
        }
    }
    Some(config.finish(totaldev, n - 4, sum, n))
}

/// A jitter variant with fixed parameters, usable as a [`Measure`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    pub kind: JitterKind,
    #[serde(default)]
    pub config: JitterConfig,
}

impl Measure for Jitter {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        Ok(self.kind.compute(x, &self.config))
    }
}
