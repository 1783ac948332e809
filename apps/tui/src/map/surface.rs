//! The map surface the animation controller drives.

use super::camera::{Camera, Flight};
use super::registry::MarkerHandle;
use std::time::{Duration, Instant};

/// Camera and popup operations of a map primitive.
pub trait MapSurface {
    fn camera(&self) -> Camera;
    fn is_flying(&self, now: Instant) -> bool;
    /// Freezes any in-flight motion where it currently is.
    fn stop(&mut self, now: Instant);
    fn fly_to(&mut self, target: Camera, duration: Duration, now: Instant);
    fn open_popup(&mut self, marker: &MarkerHandle);
    fn close_popup(&mut self);
    fn popup(&self) -> Option<&MarkerHandle>;
}

/// Camera state for the terminal map pane.
#[derive(Debug, Clone)]
pub struct MapViewport {
    camera: Camera,
    flight: Option<Flight>,
    popup: Option<MarkerHandle>,
}

impl MapViewport {
    pub const fn new(camera: Camera) -> Self {
        Self {
            camera,
            flight: None,
            popup: None,
        }
    }

    /// Advances the camera along the current flight; drops the flight once it lands.
    pub fn tick(&mut self, now: Instant) {
        if let Some(flight) = self.flight {
            self.camera = flight.sample(now);
            if flight.is_finished(now) {
                self.flight = None;
            }
        }
    }

    pub const fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }

    /// Manual zoom from the keyboard; takes over from any flight.
    pub fn zoom_by(&mut self, delta: f64, now: Instant) {
        self.stop(now);
        self.camera = self.camera.with_zoom(self.camera.zoom + delta);
    }
}

impl MapSurface for MapViewport {
    fn camera(&self) -> Camera {
        self.camera
    }

    fn is_flying(&self, now: Instant) -> bool {
        self.flight.is_some_and(|flight| !flight.is_finished(now))
    }

    fn stop(&mut self, now: Instant) {
        if let Some(flight) = self.flight.take() {
            self.camera = flight.sample(now);
        }
    }

    fn fly_to(&mut self, target: Camera, duration: Duration, now: Instant) {
        self.stop(now);
        self.flight = Some(Flight::new(self.camera, target, now, duration));
    }

    fn open_popup(&mut self, marker: &MarkerHandle) {
        self.popup = Some(marker.clone());
    }

    fn close_popup(&mut self) {
        self.popup = None;
    }

    fn popup(&self) -> Option<&MarkerHandle> {
        self.popup.as_ref()
    }
}
