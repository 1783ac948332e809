use crate::app::input::helpers::clamped_offset;
use crate::app::selection::SelectionIntent;
use crate::app::state::App;
use crossterm::event::KeyCode;
use std::time::Instant;

const PAGE: isize = 5;

pub fn handle_list_input(app: &mut App, key: KeyCode, now: Instant) {
    let total = app.visible.len();

    match key {
        KeyCode::Up => move_cursor(app, -1, total),
        KeyCode::Down => move_cursor(app, 1, total),
        KeyCode::PageUp => move_cursor(app, -PAGE, total),
        KeyCode::PageDown => move_cursor(app, PAGE, total),
        KeyCode::Home => app.set_list_cursor(0),
        KeyCode::End => app.set_list_cursor(total.saturating_sub(1)),
        KeyCode::Enter => {
            if let Some(spot) = app.cursor_spot() {
                let id = spot.id.clone();
                app.dispatch(SelectionIntent::CardClicked(id), now);
            }
        }
        KeyCode::Char('e') => {
            if let Some(spot) = app.cursor_spot() {
                let id = spot.id.clone();
                app.toggle_expanded(&id);
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize, total: usize) {
    let index = clamped_offset(app.list_cursor, delta, total);
    app.set_list_cursor(index);
}
