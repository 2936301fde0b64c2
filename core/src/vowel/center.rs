use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::check_paired;
use crate::math::StatsHelper;
use crate::prelude::{StatsError, StatsResult};
use crate::telemetry::LogManager;

/// How the centre of a vowel space is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterMethod {
    /// Mean of both formants.
    Centroid,
    /// Mean F1; F2 is the average of the F2 means above and below it.
    Twomeans,
    /// Mean F1; F2 is the mean F2 of the vowels below mean F1.
    #[default]
    Wcentroid,
}

impl FromStr for CenterMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "centroid" => Ok(CenterMethod::Centroid),
            "twomeans" => Ok(CenterMethod::Twomeans),
            "wcentroid" => Ok(CenterMethod::Wcentroid),
            other => Err(StatsError::InvalidArgument(format!(
                "unknown center method '{}': expected centroid, twomeans or wcentroid",
                other
            ))),
        }
    }
}

impl fmt::Display for CenterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CenterMethod::Centroid => "centroid",
            CenterMethod::Twomeans => "twomeans",
            CenterMethod::Wcentroid => "wcentroid",
        };
        f.write_str(name)
    }
}

/// Centre of a vowel space in (F1, F2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VowelCenter {
    pub f1c: f64,
    pub f2c: f64,
}

fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        StatsHelper::mean(values)
    }
}

/// Locates the centre of the vowel space spanned by paired formants.
///
/// With `remove_na`, a vowel is dropped when either of its formants is NaN.
pub fn vowel_center(
    f1: &[f64],
    f2: &[f64],
    method: CenterMethod,
    remove_na: bool,
) -> StatsResult<Option<VowelCenter>> {
    let logger = LogManager::new("vowel_center");
    check_paired(f1, f2, &logger)?;

    let (f1, f2): (Vec<f64>, Vec<f64>) = f1
        .iter()
        .zip(f2)
        .filter(|(a, b)| !remove_na || !(a.is_nan() || b.is_nan()))
        .map(|(&a, &b)| (a, b))
        .unzip();
    if f1.is_empty() {
        return Ok(logger.undefined("no complete vowels"));
    }

    let f1c = StatsHelper::mean(&f1);
    let f2c = match method {
        CenterMethod::Centroid => StatsHelper::mean(&f2),
        CenterMethod::Twomeans => {
            let mut upper = Vec::new();
            let mut lower = Vec::new();
            for (&a, &b) in f1.iter().zip(&f2) {
                if a > f1c {
                    upper.push(b);
                } else {
                    lower.push(b);
                }
            }
            // An empty half contributes zero to the average.
            (mean_or_zero(&upper) + mean_or_zero(&lower)) / 2.0
        }
        CenterMethod::Wcentroid => {
            let lower: Vec<f64> = f1
                .iter()
                .zip(&f2)
                .filter(|(&a, _)| a < f1c)
                .map(|(_, &b)| b)
                .collect();
            if lower.is_empty() {
                StatsHelper::mean(&f2)
            } else {
                StatsHelper::mean(&lower)
            }
        }
    };

    Ok(Some(VowelCenter { f1c, f2c }))
}
