use std::path::PathBuf;
use std::time::Duration;

/// Default upper bound for a single page navigation.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings shared by every audit, built from the global CLI flags.
pub struct Config {
    /// Upper bound for a single page navigation.
    pub timeout: Duration,
    /// Directory screenshots are written to. Created on demand, never
    /// cleaned up.
    pub artifacts_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            artifacts_dir: PathBuf::from("artifacts"),
        }
    }
}
