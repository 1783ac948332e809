// UI module for surf_gems
// Handles all UI rendering functions

pub mod layout;
pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::directory::render_directory(app, f);

    if app.show_help {
        let area = f.area();
        screens::help::render_help_popup(f, area);
    }
}
