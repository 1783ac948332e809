use crate::domain::Category;
use crate::map::icon::category_color;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// One tab per key: `0` for everything, then a digit per category.
pub fn filter_line(active: Option<Category>) -> Line<'static> {
    let mut spans = vec![Span::styled(" Filter: ", Style::default().fg(Color::Gray))];

    spans.push(tab("0", "All", active.is_none(), Color::White));
    for (index, category) in Category::ALL.iter().enumerate() {
        spans.push(Span::raw(" "));
        spans.push(tab(
            &(index + 1).to_string(),
            category.label(),
            active == Some(*category),
            category_color(*category),
        ));
    }

    Line::from(spans)
}

fn tab(key: &str, label: &str, selected: bool, color: Color) -> Span<'static> {
    let text = format!("[{key}] {label}");
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn lists_every_category_in_key_order() {
        let text = plain(&filter_line(None));
        assert_eq!(
            text,
            " Filter: [0] All [1] Ocean [2] River Rapid [3] Wakesurf"
        );
    }

    #[test]
    fn highlights_only_the_active_tab() {
        let line = filter_line(Some(Category::Rapid));
        let bold: Vec<_> = line
            .spans
            .iter()
            .filter(|span| span.style.add_modifier.contains(Modifier::BOLD))
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(bold, vec!["[2] River Rapid".to_string()]);
    }
}
