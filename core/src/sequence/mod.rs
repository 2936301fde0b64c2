pub mod changepoint;
pub mod missing;
pub mod trend;

pub use changepoint::{first_changepoint, last_changepoint};
pub use missing::{is_missing_numeric, is_missing_text, missing_fraction, MissingConfig};
pub use trend::{lm_slope, peak_prominence, PeakProminence, Slope};
