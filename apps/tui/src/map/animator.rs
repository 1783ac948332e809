//! Keeps the map camera aligned with the selection.
//!
//! The animator reacts to selection changes only. It remembers the last id it
//! actually flew to, separately from the last id it was told about, so a
//! repeated notification for the same spot never restarts an in-flight move.

use super::camera::Camera;
use super::registry::MarkerRegistry;
use super::surface::MapSurface;
use crate::app::filter::VisibleSet;
use crate::domain::SpotId;
use crate::timer::{TimerHandle, TimerSlot};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const CLOSE_UP_ZOOM: f64 = 10.0;
pub const FLY_DURATION: Duration = Duration::from_millis(1000);
pub const POPUP_DELAY: Duration = Duration::from_millis(300);

/// What a selection notification did to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationOutcome {
    /// First observed value; never animates.
    Mounted,
    Unchanged,
    Cleared,
    AlreadyAnimated,
    /// Filtered out or unknown id.
    Unresolved,
    InvalidCoordinates,
    Started(Camera),
}

#[derive(Debug, Default)]
pub struct MapAnimator {
    mounted: bool,
    last_seen: Option<SpotId>,
    last_animated: Option<SpotId>,
    popup_timer: TimerSlot<SpotId>,
    popup_handle: Option<TimerHandle>,
}

impl MapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn last_animated(&self) -> Option<&SpotId> {
        self.last_animated.as_ref()
    }

    pub fn pending_popup(&self) -> Option<&SpotId> {
        self.popup_timer.pending_payload()
    }

    pub fn observe<S: MapSurface>(
        &mut self,
        active: Option<&SpotId>,
        visible: &VisibleSet,
        surface: &mut S,
        now: Instant,
    ) -> AnimationOutcome {
        if !self.mounted {
            self.mounted = true;
            self.last_seen = active.cloned();
            return AnimationOutcome::Mounted;
        }

        if active == self.last_seen.as_ref() {
            return AnimationOutcome::Unchanged;
        }
        self.last_seen = active.cloned();

        // Any popup still waiting belongs to a superseded selection.
        self.cancel_popup();

        let Some(id) = active else {
            self.last_animated = None;
            return AnimationOutcome::Cleared;
        };

        // Camera is already there; only the popup closed by the detour comes back.
        if self.last_animated.as_ref() == Some(id) {
            self.popup_handle = Some(self.popup_timer.schedule(now, POPUP_DELAY, id.clone()));
            return AnimationOutcome::AlreadyAnimated;
        }

        let Some(spot) = visible.get(id) else {
            debug!(spot = %id, "active spot not in visible set, camera stays");
            return AnimationOutcome::Unresolved;
        };

        let Some(point) = spot.valid_coordinates() else {
            debug!(spot = %id, coordinates = ?spot.coordinates, "skipping flight to invalid coordinates");
            return AnimationOutcome::InvalidCoordinates;
        };

        let target = Camera::new(point, CLOSE_UP_ZOOM);
        surface.stop(now);
        surface.fly_to(target, FLY_DURATION, now);
        self.last_animated = Some(id.clone());
        self.popup_handle = Some(self.popup_timer.schedule(now, POPUP_DELAY, id.clone()));

        info!(spot = %id, lat = point.lat, lng = point.lng, "flying to spot");
        AnimationOutcome::Started(target)
    }

    /// Opens the delayed popup once due. A marker that was unmounted meanwhile is skipped.
    pub fn poll<S: MapSurface>(
        &mut self,
        registry: &MarkerRegistry,
        surface: &mut S,
        now: Instant,
    ) -> Option<SpotId> {
        let id = self.popup_timer.poll(now)?;
        self.popup_handle = None;

        if let Some(marker) = registry.lookup(&id) {
            surface.open_popup(marker);
            Some(id)
        } else {
            debug!(spot = %id, "marker gone before popup opened");
            None
        }
    }

    fn cancel_popup(&mut self) {
        if let Some(handle) = self.popup_handle.take() {
            self.popup_timer.cancel(handle);
        }
    }
}
