//! Dispersion and stability of syllable or interval durations.

use serde::{Deserialize, Serialize};

use crate::math::StatsHelper;
use crate::prelude::{Measure, StatsError, StatsResult};
use crate::telemetry::LogManager;

/// Number of leading intervals that form the reference block.
const REFERENCE_LEN: usize = 4;

/// Coefficient of variation: sample SD divided by the mean.
///
/// Undefined for fewer than two values, for any NaN left after filtering and
/// for a zero mean.
pub fn cov(x: &[f64], remove_na: bool) -> Option<f64> {
    let logger = LogManager::new("cov");
    let x = StatsHelper::filtered(x, remove_na);
    if x.len() <= 1 {
        return logger.undefined("fewer than two values");
    }
    if x.iter().any(|v| v.is_nan()) {
        return logger.undefined("NaN in input");
    }
    let mean = StatsHelper::mean(&x);
    if mean == 0.0 {
        return logger.undefined("zero mean");
    }
    Some(StatsHelper::sample_sd(&x) / mean)
}

/// What [`cov5_x`] does when the sequence is shorter than its window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortInput {
    #[default]
    Undefined,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cov5Config {
    /// Number of leading intervals considered, reference block included.
    pub n: usize,
    pub remove_na: bool,
    pub on_short: ShortInput,
}

impl Default for Cov5Config {
    fn default() -> Self {
        Self {
            n: 20,
            remove_na: true,
            on_short: ShortInput::Undefined,
        }
    }
}

/// Relative coefficient of variation after Skodda et al. (2012): SD of
/// intervals 5..=n relative to the mean of intervals 1..=4.
pub fn cov5_x(x: &[f64], config: &Cov5Config) -> StatsResult<Option<f64>> {
    let logger = LogManager::new("cov5_x");
    let n = config.n;
    if n <= REFERENCE_LEN {
        let message = format!("window n = {} must exceed {}", n, REFERENCE_LEN);
        logger.rejected(&message);
        return Err(StatsError::InvalidArgument(message));
    }

    let x = StatsHelper::filtered(x, config.remove_na);
    if x.len() < n {
        return match config.on_short {
            ShortInput::Undefined => Ok(logger.undefined("sequence shorter than window")),
            ShortInput::Fail => {
                logger.rejected("sequence shorter than window");
                Err(StatsError::InsufficientData {
                    required: n,
                    actual: x.len(),
                })
            }
        };
    }

    let ref_mean = StatsHelper::mean(&x[..REFERENCE_LEN]);
    let comparison = &x[REFERENCE_LEN..n];
    let comp_sd = StatsHelper::sample_sd(comparison);
    let comp_n = comparison.len() as f64;
    Ok(Some((comp_sd / (ref_mean / comp_n.sqrt())) * 100.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelStabConfig {
    /// 1-based first interval of the comparison block; at least 5.
    pub compstart: usize,
    /// Exclusive 0-based end of the comparison block.
    pub compstop: usize,
    pub remove_na: bool,
}

impl Default for RelStabConfig {
    fn default() -> Self {
        Self {
            compstart: 5,
            compstop: 12,
            remove_na: true,
        }
    }
}

/// Relative stability: sum of the comparison block as a percentage of the
/// sum of the first four intervals.
///
/// A sequence of exactly `compstop - 1` values is accepted; the comparison
/// block then ends at the last value. When `compstop` does not reach past
/// `compstart - 1` the comparison block is empty and the result is `0.0`.
pub fn relstab(x: &[f64], config: &RelStabConfig) -> StatsResult<Option<f64>> {
    let logger = LogManager::new("relstab");
    if config.compstart <= REFERENCE_LEN {
        let message = format!("compstart = {} must be at least 5", config.compstart);
        logger.rejected(&message);
        return Err(StatsError::InvalidArgument(message));
    }

    let x = StatsHelper::filtered(x, config.remove_na);
    let required = config.compstop.saturating_sub(1).max(REFERENCE_LEN);
    if x.len() < required {
        return Ok(logger.undefined("sequence shorter than comparison block"));
    }

    let refsum = StatsHelper::sum(&x[..REFERENCE_LEN]);
    let start = config.compstart - 1;
    let stop = config.compstop.min(x.len());
    let compsum = if start < stop {
        StatsHelper::sum(&x[start..stop])
    } else {
        0.0
    };
    Ok(Some(compsum / refsum * 100.0))
}

/// [`cov`] as a [`Measure`].
#[derive(Debug, Clone, Copy)]
pub struct Cov {
    pub remove_na: bool,
}

impl Default for Cov {
    fn default() -> Self {
        Self { remove_na: true }
    }
}

impl Measure for Cov {
    fn name(&self) -> &'static str {
        "cov"
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        Ok(cov(x, self.remove_na))
    }
}

/// [`cov5_x`] as a [`Measure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Cov5(pub Cov5Config);

impl Measure for Cov5 {
    fn name(&self) -> &'static str {
        "cov5_x"
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        cov5_x(x, &self.0)
    }
}

/// [`relstab`] as a [`Measure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelStab(pub RelStabConfig);

impl Measure for RelStab {
    fn name(&self) -> &'static str {
        "relstab"
    }

    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>> {
        relstab(x, &self.0)
    }
}
