pub mod regression;
pub mod stats;

pub use regression::LinearFit;
pub use stats::StatsHelper;
