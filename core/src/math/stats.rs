use std::borrow::Cow;

pub struct StatsHelper;

impl StatsHelper {
    /// Returns `x` with NaN entries removed when `remove_na` is set, borrowing
    /// otherwise.
    pub fn filtered(x: &[f64], remove_na: bool) -> Cow<'_, [f64]> {
        if remove_na && x.iter().any(|v| v.is_nan()) {
            Cow::Owned(x.iter().copied().filter(|v| !v.is_nan()).collect())
        } else {
            Cow::Borrowed(x)
        }
    }

    pub fn sum(samples: &[f64]) -> f64 {
        samples.iter().sum()
    }

    /// Arithmetic mean; NaN for an empty slice.
    pub fn mean(samples: &[f64]) -> f64 {
        Self::sum(samples) / samples.len() as f64
    }

    /// Standard deviation with the `n - 1` denominator.
    pub fn sample_sd(samples: &[f64]) -> f64 {
        let mean = Self::mean(samples);
        let sum_sq: f64 = samples.iter().map(|&v| (v - mean) * (v - mean)).sum();
        (sum_sq / (samples.len() as f64 - 1.0)).sqrt()
    }
}
