//! Camera state and eased camera flights.

use crate::domain::GeoPoint;
use std::time::{Duration, Instant};

pub const WORLD_ZOOM: f64 = 2.0;
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 14.0;

/// Center used when there is nothing to average.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(20.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Camera {
    pub const fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// World view centered on the centroid of `points`, skipping invalid coordinates.
    pub fn overview<I>(points: I) -> Self
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let (count, lat, lng) = points
            .into_iter()
            .filter(|point| point.is_valid())
            .fold((0_u32, 0.0, 0.0), |(count, lat, lng), point| {
                (count + 1, lat + point.lat, lng + point.lng)
            });

        if count == 0 {
            return Self::new(DEFAULT_CENTER, WORLD_ZOOM);
        }

        let count = f64::from(count);
        Self::new(GeoPoint::new(lat / count, lng / count), WORLD_ZOOM)
    }

    pub fn with_zoom(self, zoom: f64) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            ..self
        }
    }

    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            center: GeoPoint::new(
                (target.center.lat - self.center.lat).mul_add(t, self.center.lat),
                (target.center.lng - self.center.lng).mul_add(t, self.center.lng),
            ),
            zoom: (target.zoom - self.zoom).mul_add(t, self.zoom),
        }
    }

    /// Longitude span visible across the viewport at this zoom.
    pub fn longitude_span(self) -> f64 {
        360.0 / 2_f64.powf(self.zoom - 1.0)
    }

    /// Canvas bounds as `([west, east], [south, north])`.
    ///
    /// `aspect` is viewport height over width in square units, so terminal cells
    /// (roughly twice as tall as wide) count double vertically.
    pub fn bounds(self, aspect: f64) -> ([f64; 2], [f64; 2]) {
        let half_lng = self.longitude_span() / 2.0;
        let half_lat = half_lng * aspect;
        (
            [self.center.lng - half_lng, self.center.lng + half_lng],
            [self.center.lat - half_lat, self.center.lat + half_lat],
        )
    }

    pub fn contains(self, point: GeoPoint, aspect: f64) -> bool {
        let ([west, east], [south, north]) = self.bounds(aspect);
        (west..=east).contains(&point.lng) && (south..=north).contains(&point.lat)
    }

    /// Structural equality with a tolerance, for comparing sampled cameras.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.center.lat - other.center.lat).abs() < epsilon
            && (self.center.lng - other.center.lng).abs() < epsilon
            && (self.zoom - other.zoom).abs() < epsilon
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0_f64).mul_add(t, 2.0).powi(3) / 2.0
    }
}

/// A time-based camera transition, sampled from the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    from: Camera,
    to: Camera,
    started: Instant,
    duration: Duration,
}

impl Flight {
    pub const fn new(from: Camera, to: Camera, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub const fn target(&self) -> Camera {
        self.to
    }

    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn sample(&self, now: Instant) -> Camera {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_in_out_cubic(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_close(ease_in_out_cubic(0.0), 0.0);
        assert_close(ease_in_out_cubic(0.5), 0.5);
        assert_close(ease_in_out_cubic(1.0), 1.0);
        assert_close(ease_in_out_cubic(3.0), 1.0);
    }

    #[test]
    fn flight_samples_start_middle_and_end() {
        let start = Instant::now();
        let from = Camera::new(GeoPoint::new(0.0, 0.0), 2.0);
        let to = Camera::new(GeoPoint::new(20.0, 40.0), 10.0);
        let flight = Flight::new(from, to, start, Duration::from_secs(1));

        assert_eq!(flight.sample(start), from);
        let middle = flight.sample(start + Duration::from_millis(500));
        assert_close(middle.center.lat, 10.0);
        assert_close(middle.center.lng, 20.0);
        assert_close(middle.zoom, 6.0);
        assert_eq!(flight.sample(start + Duration::from_secs(2)), to);
        assert!(flight.is_finished(start + Duration::from_secs(1)));
    }

    #[test]
    fn zero_duration_flight_lands_immediately() {
        let start = Instant::now();
        let to = Camera::new(GeoPoint::new(5.0, 5.0), 8.0);
        let flight = Flight::new(Camera::overview([]), to, start, Duration::ZERO);
        assert_eq!(flight.sample(start), to);
    }

    #[test]
    fn overview_averages_valid_points_only() {
        let camera = Camera::overview([
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(20.0, 30.0),
            GeoPoint::new(f64::NAN, 0.0),
        ]);
        assert_close(camera.center.lat, 15.0);
        assert_close(camera.center.lng, 20.0);
        assert_close(camera.zoom, WORLD_ZOOM);
        assert_eq!(Camera::overview([]).center, DEFAULT_CENTER);
    }

    #[test]
    fn bounds_shrink_with_zoom() {
        let camera = Camera::new(GeoPoint::new(0.0, 0.0), 2.0);
        let ([west, east], [south, north]) = camera.bounds(0.5);
        assert_close(east - west, 180.0);
        assert_close(north - south, 90.0);

        let close = camera.with_zoom(10.0);
        assert!(close.longitude_span() < 1.0);
        assert!(close.contains(GeoPoint::new(0.1, 0.1), 0.5));
        assert!(!close.contains(GeoPoint::new(5.0, 5.0), 0.5));
    }

    #[test]
    fn zoom_is_clamped() {
        let camera = Camera::overview([]);
        assert_close(camera.with_zoom(40.0).zoom, MAX_ZOOM);
        assert_close(camera.with_zoom(-1.0).zoom, MIN_ZOOM);
    }
}
