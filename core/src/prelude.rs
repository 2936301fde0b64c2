use serde::{Deserialize, Serialize};

/// Common error type for measures that can reject their arguments.
///
/// Insufficient data is never an error: it is reported as `None`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("insufficient data: need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[error("paired sequences differ in length: f1 has {f1}, f2 has {f2}")]
    LengthMismatch { f1: usize, f2: usize },
}

pub type StatsResult<T> = Result<T, StatsError>;

/// A single-sequence summary statistic.
///
/// `Ok(None)` is an undefined result (too little data, degenerate
/// denominator); `Err` means the measure was configured incorrectly.
pub trait Measure {
    fn name(&self) -> &'static str;
    fn measure(&self, x: &[f64]) -> StatsResult<Option<f64>>;
}

/// One named result inside a [`MeasureReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureEntry {
    pub name: String,
    pub value: Option<f64>,
}

/// Results of running several measures over the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasureReport {
    pub entries: Vec<MeasureEntry>,
}

impl MeasureReport {
    /// Runs every measure in order, stopping at the first rejected argument.
    pub fn evaluate(measures: &[&dyn Measure], x: &[f64]) -> StatsResult<Self> {
        let mut entries = Vec::with_capacity(measures.len());
        for measure in measures {
            entries.push(MeasureEntry {
                name: measure.name().to_string(),
                value: measure.measure(x)?,
            });
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.value)
    }

    /// Number of entries whose value is undefined.
    pub fn undefined_count(&self) -> usize {
        self.entries.iter().filter(|e| e.value.is_none()).count()
    }
}
