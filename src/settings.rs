use std::time::Duration;

/// Per-question time limit used when none is given.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(15);

/// Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub time_limit: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}
