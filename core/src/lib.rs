//! Scalar statistics over numeric sequences for speech-rhythm and vowel-space
//! analysis.
//!
//! Every routine is a pure function over in-memory slices. Undefined results
//! (too few values, degenerate denominators) are returned as `None` rather
//! than as errors; only misconfigured calls produce a [`StatsError`].

pub mod math;
pub mod prelude;
pub mod rhythm;
pub mod sequence;
pub mod telemetry;
pub mod vowel;

pub use prelude::{Measure, MeasureEntry, MeasureReport, StatsError, StatsResult};
pub use rhythm::{
    cov, cov5_x, jitter_ddp, jitter_local, jitter_ppq5, jitter_rap, npvi, relstab, rpvi,
    Cov5Config, JitterConfig, JitterKind, RelStabConfig, ShortInput,
};
pub use sequence::{
    first_changepoint, is_missing_numeric, is_missing_text, last_changepoint, lm_slope,
    missing_fraction, peak_prominence, MissingConfig,
};
pub use vowel::{vowel_angles, vowel_center, vowel_norms, CenterMethod, VowelCenter};
