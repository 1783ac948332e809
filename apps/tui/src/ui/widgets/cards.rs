use crate::app::selection::ViewPane;
use crate::app::App;
use crate::domain::Spot;
use crate::list::CardLayout;
use crate::map::icon::category_color;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMarks {
    pub active: bool,
    pub cursor: bool,
}

/// Lines for one card. The count always equals `layout.height()`.
pub fn card_lines(spot: &Spot, layout: &CardLayout, marks: CardMarks) -> Vec<Line<'static>> {
    let bar_color = if marks.active {
        Color::Yellow
    } else if marks.cursor {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let bar = || Span::styled("▌ ", Style::default().fg(bar_color));

    let mut name_style = Style::default().add_modifier(Modifier::BOLD);
    if marks.active {
        name_style = name_style.fg(Color::Yellow);
    }

    let mut lines = Vec::with_capacity(usize::from(layout.height()));
    lines.push(Line::from(vec![
        bar(),
        Span::styled(spot.name.clone(), name_style),
        Span::raw("  "),
        Span::styled(
            spot.category.label(),
            Style::default().fg(category_color(spot.category)),
        ),
    ]));

    let mut location = vec![
        bar(),
        Span::styled(spot.location.clone(), Style::default().fg(Color::Gray)),
    ];
    if layout.truncated {
        location.push(Span::styled(
            "  (e: more)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(location));

    for text in &layout.description {
        lines.push(Line::from(vec![bar(), Span::raw(text.clone())]));
    }
    for text in &layout.notes {
        lines.push(Line::from(vec![
            bar(),
            Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    for text in &layout.details {
        lines.push(Line::from(vec![
            bar(),
            Span::styled(text.clone(), Style::default().fg(Color::LightBlue)),
        ]));
    }

    lines.push(Line::from(""));
    lines
}

pub fn render_cards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focused_pane() == ViewPane::List;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Spots ")
        .title_style(Style::default().fg(border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.visible.is_empty() {
        let empty = Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No spots match your filter",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                "Press 0 to show all spots",
                Style::default().fg(Color::Gray),
            )),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let active = app.active_spot_id();
    let mut lines = Vec::new();
    for (index, spot) in app.visible.spots().iter().enumerate() {
        let layout = CardLayout::new(spot, app.expanded.contains(&spot.id), app.card_width);
        let marks = CardMarks {
            active: active == Some(&spot.id),
            cursor: focused && index == app.list_cursor,
        };
        lines.extend(card_lines(spot, &layout, marks));
    }

    let offset = app.list.offset();
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((offset, 0));
    f.render_widget(paragraph, area);

    let viewport = area.inner(Margin::new(1, 1));
    let Some(index) = active.and_then(|id| app.visible.position(id)) else {
        return;
    };
    let Some(card_area) = visible_card_area(app, index, viewport) else {
        return;
    };
    if let Ok(mut effect) = app.highlight_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            let buffer = f.buffer_mut();
            buffer.render_effect(effect, card_area, app.last_tick);
        }
    }
}

/// Part of the card at `index` that is inside the viewport right now.
fn visible_card_area(app: &App, index: usize, viewport: Rect) -> Option<Rect> {
    let (top, height) = app.list.card_span(index)?;
    let offset = u32::from(app.list.offset());
    let start = top.max(offset);
    let end = (top + u32::from(height)).min(offset + u32::from(viewport.height));
    if start >= end {
        return None;
    }

    let y = viewport.y + u16::try_from(start - offset).ok()?;
    let rows = u16::try_from(end - start).ok()?;
    Some(Rect::new(viewport.x, y, viewport.width, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, GeoPoint};

    fn spot() -> Spot {
        let mut spot = Spot::new(
            "eisbach",
            "Eisbach",
            Some(GeoPoint::new(48.14, 11.59)),
            Category::Rapid,
        );
        spot.location = "Munich, Germany".to_string();
        spot.description = "A standing wave in the English Garden. ".repeat(6);
        spot.notes = Some("Experts only.".to_string());
        spot.best_season = Some("All year".to_string());
        spot
    }

    #[test]
    fn line_count_matches_layout_height() {
        let spot = spot();
        for expanded in [false, true] {
            let layout = CardLayout::new(&spot, expanded, 30);
            let lines = card_lines(&spot, &layout, CardMarks { active: false, cursor: false });
            assert_eq!(lines.len(), usize::from(layout.height()));
        }
    }

    #[test]
    fn collapsed_card_offers_to_expand() {
        let spot = spot();
        let layout = CardLayout::new(&spot, false, 30);
        let lines = card_lines(&spot, &layout, CardMarks { active: true, cursor: false });
        let location: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(location.ends_with("(e: more)"));
        assert_eq!(lines[0].spans[1].style.fg, Some(Color::Yellow));
    }
}
