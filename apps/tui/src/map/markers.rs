//! Mounts one marker per visible spot and keeps the registry in step.

use super::registry::{MarkerHandle, MarkerKey, MarkerRegistry};
use crate::app::filter::VisibleSet;
use crate::domain::SpotId;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MountDiff {
    pub mounted: Vec<SpotId>,
    pub unmounted: Vec<SpotId>,
}

#[derive(Debug, Default)]
pub struct MarkerLayer {
    next_key: u64,
}

impl MarkerLayer {
    pub const fn new() -> Self {
        Self { next_key: 0 }
    }

    /// Unmounts markers whose spot left `visible` and mounts the new ones.
    ///
    /// Spots without a usable coordinate get no marker. Markers that stay
    /// visible keep their handle.
    pub fn sync(&mut self, visible: &VisibleSet, registry: &mut MarkerRegistry) -> MountDiff {
        let wanted: HashSet<&SpotId> = visible
            .spots()
            .iter()
            .filter(|spot| spot.valid_coordinates().is_some())
            .map(|spot| &spot.id)
            .collect();

        let mut diff = MountDiff::default();

        let stale: Vec<SpotId> = registry
            .ids()
            .into_iter()
            .filter(|id| !wanted.contains(id))
            .cloned()
            .collect();
        for id in stale {
            registry.unregister(&id);
            diff.unmounted.push(id);
        }

        for spot in visible.spots() {
            if registry.contains(&spot.id) {
                continue;
            }
            let Some(position) = spot.valid_coordinates() else {
                debug!(spot = %spot.id, "no marker for spot without valid coordinates");
                continue;
            };
            self.next_key += 1;
            let handle = MarkerHandle {
                key: MarkerKey::new(self.next_key),
                spot_id: spot.id.clone(),
                position,
            };
            registry.register(spot.id.clone(), handle);
            diff.mounted.push(spot.id.clone());
        }

        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::FilterState;
    use crate::domain::{Category, GeoPoint, Spot};
    use crate::spots::SpotRepository;

    fn repository() -> SpotRepository {
        SpotRepository::new(vec![
            Spot::new("a", "A", Some(GeoPoint::new(10.0, 10.0)), Category::Ocean),
            Spot::new("b", "B", Some(GeoPoint::new(20.0, 20.0)), Category::Rapid),
            Spot::new("broken", "Broken", Some(GeoPoint::new(f64::NAN, 0.0)), Category::Ocean),
        ])
        .unwrap_or_default()
    }

    #[test]
    fn mounts_only_spots_with_valid_coordinates() {
        let mut layer = MarkerLayer::new();
        let mut registry = MarkerRegistry::new();
        let visible = FilterState::default().visible_set(&repository());

        let diff = layer.sync(&visible, &mut registry);

        assert_eq!(diff.mounted, vec![SpotId::from("a"), SpotId::from("b")]);
        assert!(registry.lookup(&SpotId::from("broken")).is_none());
    }

    #[test]
    fn filter_round_trip_restores_population_without_duplicates() {
        let repository = repository();
        let mut layer = MarkerLayer::new();
        let mut registry = MarkerRegistry::new();
        let mut filter = FilterState::default();

        layer.sync(&filter.visible_set(&repository), &mut registry);
        let before: Vec<SpotId> = registry.ids().into_iter().cloned().collect();

        filter.set_category(Some(Category::Rapid));
        let diff = layer.sync(&filter.visible_set(&repository), &mut registry);
        assert_eq!(diff.unmounted, vec![SpotId::from("a")]);
        assert!(diff.mounted.is_empty());

        filter.set_category(None);
        let diff = layer.sync(&filter.visible_set(&repository), &mut registry);
        assert_eq!(diff.mounted, vec![SpotId::from("a")]);

        let restored: Vec<SpotId> = registry.ids().into_iter().cloned().collect();
        assert_eq!(restored, before);
        assert_eq!(registry.len(), before.len());
    }

    #[test]
    fn remount_issues_a_fresh_key() {
        let repository = repository();
        let mut layer = MarkerLayer::new();
        let mut registry = MarkerRegistry::new();
        let mut filter = FilterState::default();
        let a = SpotId::from("a");

        layer.sync(&filter.visible_set(&repository), &mut registry);
        let first = registry.lookup(&a).map(|h| h.key);

        filter.set_category(Some(Category::Rapid));
        layer.sync(&filter.visible_set(&repository), &mut registry);
        filter.set_category(None);
        layer.sync(&filter.visible_set(&repository), &mut registry);

        assert!(registry.lookup(&a).is_some());
        assert_ne!(registry.lookup(&a).map(|h| h.key), first);
    }
}
