use crate::domain::Category;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Terminal columns below which only one pane is shown at a time.
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 100;
pub const DEFAULT_LOG_FILE: &str = "surf_gems.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` uses the spots bundled with the binary.
    pub spots_file: Option<PathBuf>,
    pub narrow_breakpoint: u16,
    pub log_file: PathBuf,
    pub debug: bool,
    pub initial_category: Option<Category>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spots_file: None,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
            initial_category: None,
        }
    }
}

impl AppConfig {
    /// Builds the config from a key lookup, so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let spots_file = lookup("SPOTS_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let narrow_breakpoint = lookup("NARROW_BREAKPOINT").map_or(
            defaults.narrow_breakpoint,
            |value| match value.trim().parse::<u16>() {
                Ok(columns) if columns > 0 => columns,
                _ => {
                    warn!(%value, "ignoring invalid NARROW_BREAKPOINT");
                    defaults.narrow_breakpoint
                }
            },
        );

        let log_file = lookup("LOG_FILE")
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.log_file, PathBuf::from);

        let debug = lookup("DEBUG").is_some_and(|value| {
            matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
        });

        let initial_category = lookup("SPOT_CATEGORY").and_then(|value| {
            let category = Category::parse(&value);
            if category.is_none() {
                warn!(%value, "ignoring unknown SPOT_CATEGORY");
            }
            category
        });

        Self {
            spots_file,
            narrow_breakpoint,
            log_file,
            debug,
            initial_category,
        }
    }
}

/// Initializes the application configuration from `.env` and the environment.
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig::from_lookup(|key| env::var(key).ok())
}
