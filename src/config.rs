use std::env;
use std::path::PathBuf;

/// Settings for the interactive calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Most fractional digits written per result, `None` for no limit
    pub max_dp: Option<usize>,
    /// Mark repeating blocks instead of writing digits until `max_dp`
    pub recursion: bool,
    /// Maximum number of history entries to retain
    pub history_size: usize,
    /// Where history is loaded from and saved to
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            max_dp: None,
            recursion: true,
            history_size: 1000,
            history_file: None,
        }
    }
}

impl ReplConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Applies `VINCULUM_*` overrides found through `lookup`. Values that don't parse are ignored.
    pub fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(val) = lookup("VINCULUM_MAX_DP") {
            match val.as_str() {
                "none" => self.max_dp = None,
                val => {
                    if let Ok(max_dp) = val.parse::<usize>() {
                        self.max_dp = Some(max_dp);
                    }
                }
            }
        }

        if let Some(val) = lookup("VINCULUM_RECURSION") {
            if let Ok(recursion) = val.parse::<bool>() {
                self.recursion = recursion;
            }
        }

        if let Some(val) = lookup("VINCULUM_HISTORY_SIZE") {
            if let Ok(size) = val.parse::<usize>() {
                self.history_size = size;
            }
        }

        if let Some(val) = lookup("VINCULUM_HISTORY_FILE") {
            if !val.is_empty() {
                self.history_file = Some(PathBuf::from(val));
            }
        }
    }
}
