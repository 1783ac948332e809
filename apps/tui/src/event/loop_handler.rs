use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::domain::Category;
use crate::ui;

/// Print directory stats without starting the UI
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let stats = build_headless_stats(app);
    info!(total = stats.total, visible = stats.visible, "headless run");

    if json {
        let json = serde_json::to_string_pretty(&stats)?;
        println!("{json}");
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nSurf Spot Directory");
    println!("===================");
    println!("Total spots: {}", stats.total);
    println!("Visible spots: {}", stats.visible);
    println!("Filter: {}", stats.filter);

    println!("\nSpots by Category:");
    for (category, count) in &stats.by_category {
        println!("- {category}: {count}");
    }

    println!("\nVisible Spots:");
    for spot in &stats.spots {
        let coordinates = spot
            .coordinates
            .map_or_else(|| "(no coordinates)".to_string(), |[lat, lng]| {
                format!("{lat:.4}, {lng:.4}")
            });
        println!(
            "- {} | {} | {} | {}",
            spot.name, spot.category, spot.location, coordinates
        );
    }
}

pub fn build_headless_stats(app: &App) -> HeadlessStats {
    let by_category = Category::ALL
        .iter()
        .map(|category| {
            let count = app
                .repository
                .all()
                .iter()
                .filter(|spot| spot.category == *category)
                .count();
            (category.as_str().to_string(), count)
        })
        .collect();

    let spots = app
        .visible
        .spots()
        .iter()
        .map(|spot| HeadlessSpot {
            id: spot.id.to_string(),
            name: spot.name.clone(),
            category: spot.category.as_str().to_string(),
            location: spot.location.clone(),
            coordinates: spot.valid_coordinates().map(|point| [point.lat, point.lng]),
        })
        .collect();

    HeadlessStats {
        total: app.repository.len(),
        visible: app.visible.len(),
        filter: app
            .active_category()
            .map_or_else(|| "all".to_string(), |category| category.as_str().to_string()),
        by_category,
        spots,
    }
}

#[derive(Debug, Serialize)]
pub struct HeadlessStats {
    pub total: usize,
    pub visible: usize,
    pub filter: String,
    pub by_category: Vec<(String, usize)>,
    pub spots: Vec<HeadlessSpot>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessSpot {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub coordinates: Option<[f64; 2]>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Event poll timeout doubles as the frame interval (ms)
    const EVENT_POLL_TIMEOUT: u64 = 33;

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        // Fire due timers and advance tweens
        app.update(Instant::now());

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code, Instant::now());
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(width, height)) => {
                    debug!(width, height, "terminal resized");
                    app.resize(width, height);
                }
                Ok(_) | Err(_) => {
                    // Mouse, focus and paste events are ignored
                }
            }
        }

        tokio::task::yield_now().await;
    }

    info!("event loop finished");
    Ok(())
}
