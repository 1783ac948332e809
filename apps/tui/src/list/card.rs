//! Text layout of a spot card. Heights come from here so scrolling and
//! rendering always agree on where each card sits.

use crate::domain::Spot;

const COLLAPSED_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub description: Vec<String>,
    pub notes: Vec<String>,
    pub details: Vec<String>,
    /// Whether collapsing hid any text.
    pub truncated: bool,
}

impl CardLayout {
    pub fn new(spot: &Spot, expanded: bool, width: u16) -> Self {
        let width = usize::from(width.max(8));
        let mut truncated = false;

        let mut description = wrap_text(&spot.description, width);
        let mut notes = spot
            .notes
            .as_deref()
            .map(|notes| wrap_text(notes, width))
            .unwrap_or_default();

        if !expanded {
            truncated |= clamp_lines(&mut description, COLLAPSED_LINES);
            truncated |= clamp_lines(&mut notes, COLLAPSED_LINES);
        }

        let mut details = Vec::new();
        if let Some(address) = &spot.address {
            details.push(format!("⌂ {address}"));
        }
        if let Some(season) = &spot.best_season {
            details.push(format!("☼ {season}"));
        }
        if let Some(instructor) = &spot.instructor {
            details.push(format!("☺ {instructor}"));
        }
        if let Some(contact) = spot.contact_label() {
            details.push(format!("☎ {contact}"));
        }
        if spot.map_link.is_some() {
            details.push("↗ Open in maps".to_string());
        }

        Self {
            description,
            notes,
            details,
            truncated,
        }
    }

    /// Title, location, body, and one blank separator line.
    pub fn height(&self) -> u16 {
        let lines = 2 + self.description.len() + self.notes.len() + self.details.len() + 1;
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}

fn clamp_lines(lines: &mut Vec<String>, max: usize) -> bool {
    if lines.len() <= max {
        return false;
    }
    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        last.push('…');
    }
    true
}

/// Greedy word wrap on character counts.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
