//! Marker icon factory. Every render asks for its own icon; nothing is shared.

use crate::domain::Category;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub glyph: &'static str,
    pub style: Style,
    /// Halo radius in terminal cells, drawn around the glyph.
    pub halo_cells: f64,
    pub show_label: bool,
}

pub const fn category_color(category: Category) -> Color {
    match category {
        Category::Ocean => Color::Rgb(37, 99, 235),
        Category::Rapid => Color::Rgb(5, 150, 105),
        Category::Wake => Color::Rgb(124, 58, 237),
    }
}

pub fn marker_icon(category: Category, active: bool, focused: bool) -> MarkerIcon {
    if active {
        return MarkerIcon {
            glyph: "◆",
            style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            halo_cells: 1.2,
            show_label: true,
        };
    }

    let mut style = Style::default().fg(category_color(category));
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    MarkerIcon {
        glyph: "●",
        style,
        halo_cells: 0.0,
        show_label: focused,
    }
}
