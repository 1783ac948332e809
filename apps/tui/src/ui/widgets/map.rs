use crate::app::selection::ViewPane;
use crate::app::App;
use crate::domain::GeoPoint;
use crate::map::icon::marker_icon;
use crate::map::{Camera, MapSurface, MarkerHandle};
use crate::ui::widgets::popup::{anchored_rect, ClearWidget};
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Projection of the camera onto a block of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    area: Rect,
}

impl Projection {
    pub fn new(camera: Camera, area: Rect) -> Self {
        let width = f64::from(area.width.max(1));
        let height = f64::from(area.height.max(1));
        // Cells are about twice as tall as they are wide.
        let (x_bounds, y_bounds) = camera.bounds(height * 2.0 / width);
        Self {
            x_bounds,
            y_bounds,
            area,
        }
    }

    /// Degrees of longitude covered by one terminal column.
    pub fn degrees_per_cell(&self) -> f64 {
        (self.x_bounds[1] - self.x_bounds[0]) / f64::from(self.area.width.max(1))
    }

    /// Terminal cell showing `point`, if it is on screen.
    pub fn cell(&self, point: GeoPoint) -> Option<(u16, u16)> {
        let [west, east] = self.x_bounds;
        let [south, north] = self.y_bounds;
        if !(west..=east).contains(&point.lng) || !(south..=north).contains(&point.lat) {
            return None;
        }

        let fx = (point.lng - west) / (east - west);
        let fy = (north - point.lat) / (north - south);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let column = (fx * f64::from(self.area.width.saturating_sub(1))).round() as u16;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = (fy * f64::from(self.area.height.saturating_sub(1))).round() as u16;
        Some((self.area.x + column, self.area.y + row))
    }
}

/// Zoom level, plus a marker while a flight is under way at the current frame.
pub fn map_title(app: &App) -> String {
    let flying = app.map.is_flying(app.last_frame);
    format!(
        " Map · zoom {:.1}{} ",
        app.map.camera().zoom,
        if flying { " · flying" } else { "" }
    )
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focused_pane() == ViewPane::Map;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let camera = app.map.camera();

    let block = Block::default()
        .title(map_title(app))
        .title_style(Style::default().fg(border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = area.inner(Margin::new(1, 1));
    let projection = Projection::new(camera, inner);
    let cell = projection.degrees_per_cell();
    let active = app.active_spot_id();
    let focused_marker = if focused { app.focused_marker() } else { None };

    let canvas = Canvas::default()
        .block(block)
        .x_bounds(projection.x_bounds)
        .y_bounds(projection.y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.layer();

            for spot in app.visible.spots() {
                let Some(marker) = app.markers.lookup(&spot.id) else {
                    continue;
                };
                let icon = marker_icon(
                    spot.category,
                    active == Some(&spot.id),
                    focused_marker == Some(&spot.id),
                );
                let point = marker.position;

                if icon.halo_cells > 0.0 {
                    ctx.draw(&Circle {
                        x: point.lng,
                        y: point.lat,
                        radius: icon.halo_cells * cell,
                        color: Color::Yellow,
                    });
                }
                ctx.print(point.lng, point.lat, Span::styled(icon.glyph, icon.style));
                if icon.show_label {
                    ctx.print(
                        point.lng + cell * 2.0,
                        point.lat,
                        Span::styled(spot.name.clone(), icon.style),
                    );
                }
            }
        });
    f.render_widget(canvas, area);

    if let Some(popup) = app.map.popup() {
        render_marker_popup(app, f, &projection, popup, inner);
    }
}

fn render_marker_popup(
    app: &App,
    f: &mut Frame<'_>,
    projection: &Projection,
    popup: &MarkerHandle,
    bounds: Rect,
) {
    let Some((x, y)) = projection.cell(popup.position) else {
        return;
    };
    let Some(spot) = app.repository.get(&popup.spot_id) else {
        return;
    };

    let hint = "l: go to list";
    let content_width = [spot.name.chars().count(), spot.location.chars().count(), hint.len()]
        .into_iter()
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width + 2).unwrap_or(u16::MAX);
    let area = anchored_rect(x, y, width, 5, bounds);

    let text = Text::from(vec![
        Line::from(Span::styled(
            spot.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            spot.location.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Color::Cyan))),
    ]);

    f.render_widget(ClearWidget, area);
    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::camera::WORLD_ZOOM;

    #[test]
    fn center_of_camera_lands_mid_area() {
        let camera = Camera::new(GeoPoint::new(10.0, 20.0), WORLD_ZOOM);
        let projection = Projection::new(camera, Rect::new(0, 0, 81, 21));
        assert_eq!(projection.cell(GeoPoint::new(10.0, 20.0)), Some((40, 10)));
    }

    #[test]
    fn title_shows_a_flight_until_it_lands() {
        use crate::config::AppConfig;
        use crate::domain::{Category, Spot, SpotId};
        use crate::map::FLY_DURATION;
        use crate::spots::SpotRepository;
        use std::time::Instant;

        let start = Instant::now();
        let repository = SpotRepository::new(vec![Spot::new(
            "sea",
            "Sea",
            Some(GeoPoint::new(38.9, -9.4)),
            Category::Ocean,
        )])
        .unwrap();
        let mut app = App::new(repository, AppConfig::default(), start);
        assert_eq!(map_title(&app), " Map · zoom 2.0 ");

        app.select_spot(SpotId::from("sea"), start);
        assert!(map_title(&app).ends_with("· flying "));

        app.update(start + FLY_DURATION);
        assert_eq!(map_title(&app), " Map · zoom 10.0 ");
    }

    #[test]
    fn off_screen_points_have_no_cell() {
        let camera = Camera::new(GeoPoint::new(48.0, 11.0), 10.0);
        let projection = Projection::new(camera, Rect::new(0, 0, 80, 20));
        assert_eq!(projection.cell(GeoPoint::new(-33.9, 151.2)), None);
    }

    #[test]
    fn vertical_scale_accounts_for_cell_shape() {
        let camera = Camera::new(GeoPoint::new(0.0, 0.0), WORLD_ZOOM);
        let projection = Projection::new(camera, Rect::new(0, 0, 100, 25));
        let lng_span = projection.x_bounds[1] - projection.x_bounds[0];
        let lat_span = projection.y_bounds[1] - projection.y_bounds[0];
        assert!((lat_span - lng_span * 0.5).abs() < 1e-9);
    }
}
