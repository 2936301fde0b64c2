use log::{debug, warn};

/// Routes diagnostic records for measures that resolve to nothing or reject
/// their arguments. The library never installs a logger itself.
pub struct LogManager {
    routine: &'static str,
}

impl LogManager {
    pub fn new(routine: &'static str) -> Self {
        Self { routine }
    }

    /// Records why a measure is undefined and returns `None` for chaining.
    pub fn undefined<T>(&self, reason: &str) -> Option<T> {
        debug!("{} undefined: {}", self.routine, reason);
        None
    }

    pub fn rejected(&self, message: &str) {
        warn!("{} rejected arguments: {}", self.routine, message);
    }
}
