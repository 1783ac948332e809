//! Live mapping from spot id to the marker currently mounted for it.
//!
//! Entries exist only while the marker is mounted. Lookups for an id that was
//! unregistered miss; they never hand back a handle from an earlier mount.

use crate::domain::{GeoPoint, SpotId};
use std::collections::HashMap;

/// Distinguishes two mounts of the same spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerKey(u64);

impl MarkerKey {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerHandle {
    pub key: MarkerKey,
    pub spot_id: SpotId,
    pub position: GeoPoint,
}

#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: HashMap<SpotId, MarkerHandle>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle this one replaced, if any.
    pub fn register(&mut self, id: SpotId, handle: MarkerHandle) -> Option<MarkerHandle> {
        self.markers.insert(id, handle)
    }

    pub fn unregister(&mut self, id: &SpotId) -> Option<MarkerHandle> {
        self.markers.remove(id)
    }

    pub fn lookup(&self, id: &SpotId) -> Option<&MarkerHandle> {
        self.markers.get(id)
    }

    pub fn contains(&self, id: &SpotId) -> bool {
        self.markers.contains_key(id)
    }

    /// Registered ids, sorted so callers get a stable order.
    pub fn ids(&self) -> Vec<&SpotId> {
        let mut ids: Vec<&SpotId> = self.markers.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(key: u64, id: &str) -> MarkerHandle {
        MarkerHandle {
            key: MarkerKey::new(key),
            spot_id: SpotId::from(id),
            position: GeoPoint::new(1.0, 2.0),
        }
    }

    #[test]
    fn lookup_after_unregister_misses() {
        let mut registry = MarkerRegistry::new();
        let id = SpotId::from("a");
        registry.register(id.clone(), handle(1, "a"));
        assert_eq!(registry.lookup(&id).map(|h| h.key), Some(MarkerKey::new(1)));

        assert!(registry.unregister(&id).is_some());
        assert!(registry.lookup(&id).is_none());
        assert!(registry.unregister(&id).is_none());
    }

    #[test]
    fn register_replaces_previous_mount() {
        let mut registry = MarkerRegistry::new();
        let id = SpotId::from("a");
        registry.register(id.clone(), handle(1, "a"));
        let replaced = registry.register(id.clone(), handle(2, "a"));

        assert_eq!(replaced.map(|h| h.key), Some(MarkerKey::new(1)));
        assert_eq!(registry.lookup(&id).map(|h| h.key), Some(MarkerKey::new(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregistering_unknown_id_is_harmless() {
        let mut registry = MarkerRegistry::new();
        assert!(registry.unregister(&SpotId::from("ghost")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_sorted() {
        let mut registry = MarkerRegistry::new();
        registry.register(SpotId::from("c"), handle(1, "c"));
        registry.register(SpotId::from("a"), handle(2, "a"));
        let ids: Vec<&str> = registry.ids().into_iter().map(SpotId::as_str).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
