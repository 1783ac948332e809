use super::view::ListSurface;
use crate::domain::SpotId;
use crate::timer::{TimerHandle, TimerSlot};
use std::time::{Duration, Instant};
use tracing::debug;

/// Gives a freshly re-rendered list time to mount the card before looking it up.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Scrolls the active spot's card into view after each selection change.
#[derive(Debug, Default)]
pub struct ListScroller {
    last_seen: Option<SpotId>,
    lookup_timer: TimerSlot<SpotId>,
    lookup_handle: Option<TimerHandle>,
}

impl ListScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_lookup(&self) -> Option<&SpotId> {
        self.lookup_timer.pending_payload()
    }

    /// Returns whether a lookup was scheduled.
    pub fn observe(&mut self, active: Option<&SpotId>, now: Instant) -> bool {
        if active == self.last_seen.as_ref() {
            return false;
        }
        self.last_seen = active.cloned();

        if let Some(handle) = self.lookup_handle.take() {
            self.lookup_timer.cancel(handle);
        }

        let Some(id) = active else {
            return false;
        };
        self.lookup_handle = Some(self.lookup_timer.schedule(now, SCROLL_DELAY, id.clone()));
        true
    }

    /// Runs the due lookup once. A card that is not mounted is not retried.
    pub fn poll<S: ListSurface>(&mut self, surface: &mut S, now: Instant) -> Option<usize> {
        let id = self.lookup_timer.poll(now)?;
        self.lookup_handle = None;

        let Some(index) = surface.card_index(&id) else {
            debug!(spot = %id, "card not mounted, skipping scroll");
            return None;
        };
        surface.scroll_to_center(index, now);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::view::{SpotListView, SMOOTH_SCROLL_DURATION};

    fn list(ids: &[&str]) -> SpotListView {
        let mut view = SpotListView::new();
        view.set_viewport_rows(10);
        view.mount(ids.iter().map(|id| (SpotId::from(*id), 8)));
        view
    }

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn lookup_waits_for_delay() {
        let start = Instant::now();
        let mut view = list(&["a", "b", "c", "d"]);
        let mut scroller = ListScroller::new();

        assert!(scroller.observe(Some(&SpotId::from("c")), start));
        assert_eq!(scroller.poll(&mut view, at(start, 99)), None);
        assert_eq!(scroller.poll(&mut view, at(start, 100)), Some(2));

        view.tick(at(start, 100) + SMOOTH_SCROLL_DURATION);
        // Card 2 spans rows 16..24, centered in 10 rows.
        assert_eq!(view.offset(), 15);
    }

    #[test]
    fn rapid_selections_only_scroll_to_the_latest() {
        let start = Instant::now();
        let mut view = list(&["a", "b", "c", "d"]);
        let mut scroller = ListScroller::new();

        scroller.observe(Some(&SpotId::from("d")), start);
        scroller.observe(Some(&SpotId::from("b")), at(start, 60));

        assert_eq!(scroller.poll(&mut view, at(start, 100)), None);
        assert_eq!(scroller.poll(&mut view, at(start, 160)), Some(1));
        assert_eq!(scroller.poll(&mut view, at(start, 500)), None);
    }

    #[test]
    fn missing_card_is_not_retried() {
        let start = Instant::now();
        let mut view = list(&["a"]);
        let mut scroller = ListScroller::new();

        scroller.observe(Some(&SpotId::from("hidden")), start);
        assert_eq!(scroller.poll(&mut view, at(start, 100)), None);
        assert!(scroller.pending_lookup().is_none());
        assert!(!view.is_scrolling());
    }

    #[test]
    fn clearing_cancels_pending_lookup() {
        let start = Instant::now();
        let mut view = list(&["a", "b"]);
        let mut scroller = ListScroller::new();

        scroller.observe(Some(&SpotId::from("b")), start);
        assert!(!scroller.observe(None, at(start, 10)));
        assert_eq!(scroller.poll(&mut view, at(start, 200)), None);
    }

    #[test]
    fn same_id_does_not_reschedule() {
        let start = Instant::now();
        let mut scroller = ListScroller::new();
        let a = SpotId::from("a");
        assert!(scroller.observe(Some(&a), start));
        assert!(!scroller.observe(Some(&a), at(start, 50)));
        assert_eq!(scroller.pending_lookup(), Some(&a));
    }
}
