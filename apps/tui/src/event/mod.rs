mod loop_handler;

pub use loop_handler::{build_headless_stats, run, run_headless, HeadlessStats};
