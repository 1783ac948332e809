// Configuration for surf_gems
// Reads .env and environment variables, after CLI overrides were applied

mod settings;

pub use settings::{init_app_config, AppConfig, DEFAULT_LOG_FILE, DEFAULT_NARROW_BREAKPOINT};
