use crate::cli::CliArgs;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: &[(&str, &str)] = &[
    ("Tab", "Switch between list and map"),
    ("m", "Show map / show list (narrow terminals)"),
    ("Up/Down, PgUp/PgDn", "Move through the list"),
    ("Home/End", "First / last spot"),
    ("Enter (list)", "Select spot and fly the map to it"),
    ("e", "Expand or collapse the card description"),
    ("Left/Right", "Cycle map markers"),
    ("Enter (map)", "Select the focused marker"),
    ("l", "Jump from the map popup to the list"),
    ("+ / -", "Zoom the map"),
    ("0-3", "All / Ocean / River Rapid / Wakesurf"),
    ("Esc", "Clear the selection"),
    ("q", "Quit"),
];

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = SHORTCUTS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:>20}  "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "CLI Options:",
        Style::default().add_modifier(Modifier::BOLD),
    )]));

    let help_text = CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(Line::from(line.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "Press F1 or Esc to close",
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn help_lists_keys_and_cli_options() {
        let text = plain(&help_lines());
        assert!(text.contains("Select spot and fly the map to it"));
        assert!(text.contains("CLI Options:"));
        assert!(text.contains("--narrow-breakpoint"));
        assert!(!text.contains("Usage:"));
    }
}
