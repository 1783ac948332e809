//! Screen geometry shared by rendering and the list's scroll math.

use crate::app::selection::{LayoutMode, ViewPane};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

const LIST_PERCENT: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub header: Rect,
    pub filter_bar: Rect,
    pub list: Option<Rect>,
    pub map: Option<Rect>,
    pub footer: Rect,
}

fn split_rows(area: Rect) -> [Rect; 4] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Filter bar
            Constraint::Min(3),    // Panes
            Constraint::Length(1), // Footer
        ])
        .split(area);
    [rows[0], rows[1], rows[2], rows[3]]
}

fn split_panes(content: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_PERCENT),
            Constraint::Percentage(100 - LIST_PERCENT),
        ])
        .split(content);
    (columns[0], columns[1])
}

pub fn directory_layout(area: Rect, mode: LayoutMode, view: ViewPane) -> PaneLayout {
    let [header, filter_bar, content, footer] = split_rows(area);

    let (list, map) = match mode {
        LayoutMode::Wide => {
            let (list, map) = split_panes(content);
            (Some(list), Some(map))
        }
        LayoutMode::Narrow => match view {
            ViewPane::List => (Some(content), None),
            ViewPane::Map => (None, Some(content)),
        },
    };

    PaneLayout {
        header,
        filter_bar,
        list,
        map,
        footer,
    }
}

/// Inner area of the list pane, also when the narrow layout is showing the map.
pub fn list_viewport(area: Rect, mode: LayoutMode) -> Rect {
    let layout = directory_layout(area, mode, ViewPane::List);
    layout
        .list
        .map_or(Rect::default(), |list| list.inner(Margin::new(1, 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_shows_both_panes() {
        let layout = directory_layout(Rect::new(0, 0, 120, 40), LayoutMode::Wide, ViewPane::Map);
        let list = layout.list.unwrap();
        let map = layout.map.unwrap();
        assert_eq!(list.width, 48);
        assert_eq!(map.width, 72);
        assert_eq!(list.height, 37);
    }

    #[test]
    fn narrow_layout_shows_only_the_current_view() {
        let area = Rect::new(0, 0, 60, 30);
        let on_map = directory_layout(area, LayoutMode::Narrow, ViewPane::Map);
        assert!(on_map.list.is_none());
        assert_eq!(on_map.map.unwrap().width, 60);

        let on_list = directory_layout(area, LayoutMode::Narrow, ViewPane::List);
        assert!(on_list.map.is_none());
    }

    #[test]
    fn list_viewport_excludes_borders() {
        let viewport = list_viewport(Rect::new(0, 0, 60, 30), LayoutMode::Narrow);
        assert_eq!(viewport.width, 58);
        assert_eq!(viewport.height, 25);
    }
}
