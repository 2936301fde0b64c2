pub mod center;
pub mod geometry;

pub use center::{vowel_center, CenterMethod, VowelCenter};
pub use geometry::{vowel_angles, vowel_norms};

use crate::prelude::{StatsError, StatsResult};
use crate::telemetry::LogManager;

fn check_paired(f1: &[f64], f2: &[f64], logger: &LogManager) -> StatsResult<()> {
    if f1.len() != f2.len() {
        let err = StatsError::LengthMismatch {
            f1: f1.len(),
            f2: f2.len(),
        };
        logger.rejected(&err.to_string());
        return Err(err);
    }
    Ok(())
}
