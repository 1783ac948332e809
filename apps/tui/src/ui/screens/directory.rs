use crate::app::selection::{LayoutMode, ViewPane};
use crate::app::App;
use crate::ui::layout::directory_layout;
use crate::ui::widgets::cards::render_cards;
use crate::ui::widgets::filter_bar::filter_line;
use crate::ui::widgets::map::render_map;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_directory(app: &App, f: &mut Frame<'_>) {
    let mode = app.layout_mode();
    let layout = directory_layout(f.area(), mode, app.current_view());

    render_header(app, f, layout.header);
    f.render_widget(Paragraph::new(filter_line(app.active_category())), layout.filter_bar);

    if let Some(area) = layout.list {
        render_cards(app, f, area);
    }
    if let Some(area) = layout.map {
        render_map(app, f, area);
    }

    render_footer(app, f, layout.footer, mode);
}

/// "N spots", with the unfiltered total while a filter is active.
pub fn count_label(visible: usize, total: usize, filtered: bool) -> String {
    let noun = if visible == 1 { "spot" } else { "spots" };
    if filtered {
        format!("{visible} {noun} (filtered from {total})")
    } else {
        format!("{visible} {noun}")
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let count = count_label(
        app.visible.len(),
        app.repository.len(),
        app.active_category().is_some(),
    );
    let line = Line::from(vec![
        Span::styled(
            " Surf Gems ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {count}"), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect, mode: LayoutMode) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.status_message),
        Style::default().fg(Color::Yellow),
    )];

    let toggle = match (mode, app.current_view()) {
        (LayoutMode::Narrow, ViewPane::List) => "m: Show Map · ",
        (LayoutMode::Narrow, ViewPane::Map) => "m: Show List · ",
        (LayoutMode::Wide, _) => "Tab: switch pane · ",
    };
    spans.push(Span::styled(
        format!("{toggle}Enter: select · Esc: clear · F1: help · q: quit"),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
