use crate::app::selection::{SelectionIntent, ViewPane};
use crate::app::state::App;
use crate::domain::Category;
use crossterm::event::KeyCode;
use std::time::Instant;

mod help;
mod list;
mod map;

pub fn dispatch_input(app: &mut App, key: KeyCode, now: Instant) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if handle_global_input(app, key, now) {
        return;
    }

    match app.focused_pane() {
        ViewPane::List => list::handle_list_input(app, key, now),
        ViewPane::Map => map::handle_map_input(app, key, now),
    }
}

fn handle_global_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            app.clear_selection(now);
        }
        KeyCode::Char('m') => {
            app.dispatch(SelectionIntent::ToggleView, now);
        }
        KeyCode::Tab => {
            app.focus = app.focus.toggled();
        }
        KeyCode::Char(c @ '0'..='3') => {
            let category = c
                .to_digit(10)
                .and_then(|digit| digit.checked_sub(1))
                .and_then(|index| usize::try_from(index).ok())
                .and_then(Category::from_index);
            if app.set_category(category) {
                app.status_message = format!(
                    "Showing {}",
                    category.map_or("all spots", Category::label)
                );
            }
        }
        _ => return false,
    }
    true
}
