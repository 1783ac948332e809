use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::widgets::Widget;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

/// A `width` x `height` box sitting above the cell at `(x, y)`, kept inside `bounds`.
///
/// Falls below the anchor when there is no room above it.
pub fn anchored_rect(x: u16, y: u16, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let left = x
        .saturating_sub(width / 2)
        .clamp(bounds.x, bounds.right().saturating_sub(width));
    let top = if y.saturating_sub(bounds.y) >= height {
        y - height
    } else {
        (y + 1).min(bounds.bottom().saturating_sub(height))
    };

    Rect::new(left, top, width, height)
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn anchored_rect_prefers_the_space_above() {
        let bounds = Rect::new(10, 5, 40, 20);
        let rect = anchored_rect(30, 15, 10, 4, bounds);
        assert_eq!(rect, Rect::new(25, 11, 10, 4));
    }

    #[test]
    fn anchored_rect_stays_inside_bounds() {
        let bounds = Rect::new(10, 5, 40, 20);
        let rect = anchored_rect(11, 6, 10, 4, bounds);
        assert_eq!(rect, Rect::new(10, 7, 10, 4));

        let rect = anchored_rect(49, 24, 10, 4, bounds);
        assert_eq!(rect, Rect::new(40, 20, 10, 4));
    }
}
