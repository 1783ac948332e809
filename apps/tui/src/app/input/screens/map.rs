use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::selection::SelectionIntent;
use crate::app::state::App;
use crate::map::MapSurface;
use crossterm::event::KeyCode;
use std::time::Instant;

pub fn handle_map_input(app: &mut App, key: KeyCode, now: Instant) {
    let markers = app.marker_ids().len();

    match key {
        KeyCode::Left => app.marker_focus = wrap_decrement(app.marker_focus, markers),
        KeyCode::Right => app.marker_focus = wrap_increment(app.marker_focus, markers),
        KeyCode::Enter => {
            if let Some(id) = app.focused_marker().cloned() {
                app.dispatch(SelectionIntent::MarkerClicked(id), now);
            }
        }
        KeyCode::Char('l') => {
            if let Some(popup) = app.map.popup() {
                let id = popup.spot_id.clone();
                app.dispatch(SelectionIntent::GoToList(id), now);
            }
        }
        KeyCode::Char('+' | '=') => app.zoom_map(1.0, now),
        KeyCode::Char('-') => app.zoom_map(-1.0, now),
        _ => {}
    }
}
