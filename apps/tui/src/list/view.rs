//! Scrollable column of mounted spot cards.

use crate::domain::SpotId;
use crate::map::camera::ease_in_out_cubic;
use std::time::{Duration, Instant};

pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(250);

/// Card lookup and scrolling on the list primitive.
pub trait ListSurface {
    fn card_index(&self, id: &SpotId) -> Option<usize>;
    /// Smoothly brings the card at `index` to the vertical center of the viewport.
    fn scroll_to_center(&mut self, index: usize, now: Instant);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollTween {
    from: f64,
    to: f64,
    started: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MountedCard {
    id: SpotId,
    top: u32,
    height: u16,
}

#[derive(Debug, Default)]
pub struct SpotListView {
    cards: Vec<MountedCard>,
    viewport_rows: u16,
    offset: f64,
    tween: Option<ScrollTween>,
}

impl SpotListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the mounted cards; `cards` holds id and row height in display order.
    pub fn mount<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = (SpotId, u16)>,
    {
        let mut top = 0_u32;
        self.cards = cards
            .into_iter()
            .map(|(id, height)| {
                let card = MountedCard { id, top, height };
                top += u32::from(height);
                card
            })
            .collect();
        self.clamp_to_content();
    }

    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.clamp_to_content();
    }

    /// Keeps the offset and any running scroll inside the current content.
    fn clamp_to_content(&mut self) {
        let max = self.max_offset();
        self.offset = self.offset.clamp(0.0, max);
        if let Some(tween) = self.tween.as_mut() {
            tween.from = tween.from.clamp(0.0, max);
            tween.to = tween.to.clamp(0.0, max);
        }
    }

    pub const fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_id(&self, index: usize) -> Option<&SpotId> {
        self.cards.get(index).map(|card| &card.id)
    }

    /// Row span of a card as `(top, height)`.
    pub fn card_span(&self, index: usize) -> Option<(u32, u16)> {
        self.cards.get(index).map(|card| (card.top, card.height))
    }

    pub fn content_rows(&self) -> u32 {
        self.cards
            .last()
            .map_or(0, |card| card.top + u32::from(card.height))
    }

    pub fn max_offset(&self) -> f64 {
        f64::from(
            self.content_rows()
                .saturating_sub(u32::from(self.viewport_rows)),
        )
    }

    /// First visible row, rounded for rendering.
    pub fn offset(&self) -> u16 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rows = self.offset.round().max(0.0) as u32;
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    pub const fn is_scrolling(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(tween) = self.tween else {
            return;
        };
        let elapsed = now.saturating_duration_since(tween.started);
        let progress =
            (elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64()).min(1.0);
        self.offset = (tween.to - tween.from)
            .mul_add(ease_in_out_cubic(progress), tween.from)
            .clamp(0.0, self.max_offset());
        if progress >= 1.0 {
            self.tween = None;
        }
    }

    /// Jumps just far enough for the card to be fully visible, used for cursor moves.
    pub fn ensure_visible(&mut self, index: usize) {
        let Some((top, height)) = self.card_span(index) else {
            return;
        };
        self.tween = None;
        let top = f64::from(top);
        let bottom = top + f64::from(height);
        let rows = f64::from(self.viewport_rows);

        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset + rows {
            self.offset = (bottom - rows).min(top);
        }
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    fn centered_offset(&self, index: usize) -> Option<f64> {
        let (top, height) = self.card_span(index)?;
        let center = f64::from(top) + f64::from(height) / 2.0;
        let target = center - f64::from(self.viewport_rows) / 2.0;
        Some(target.floor().clamp(0.0, self.max_offset()))
    }
}

impl ListSurface for SpotListView {
    fn card_index(&self, id: &SpotId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    fn scroll_to_center(&mut self, index: usize, now: Instant) {
        let Some(target) = self.centered_offset(index) else {
            return;
        };
        self.tick(now);
        self.tween = Some(ScrollTween {
            from: self.offset,
            to: target,
            started: now,
        });
    }
}
