//! CLI-specific configuration.
use std::env;
use std::path::PathBuf;

/// CLI configuration, read from the process environment.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// RON roster to play instead of the built-in one.
    pub roster_path: Option<PathBuf>,
    /// TOML file with `GameConfig` overrides.
    pub game_config_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_ROSTER` - Path to a RON roster file (default: built-in roster)
    /// - `ARENA_CONFIG` - Path to a TOML game config file (default: built-in rules)
    /// - `ARENA_LOG_DIR` - Directory for `robot-arena.log` (default: no file log)
    pub fn from_env() -> Self {
        Self {
            roster_path: read_env_path("ARENA_ROSTER"),
            game_config_path: read_env_path("ARENA_CONFIG"),
            logging: LoggingConfig {
                log_dir: read_env_path("ARENA_LOG_DIR"),
            },
        }
    }
}

/// Where diagnostics go. Game text always goes to stdout.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub log_dir: Option<PathBuf>,
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    let value = env::var_os(key)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
