// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod list;
pub mod logging;
pub mod map;
pub mod spots;
pub mod terminal;
pub mod timer;
pub mod ui;

pub use domain::{Category, GeoPoint, Spot, SpotId};
