//! Category filter and the visible set it produces.

use crate::domain::{Category, Spot, SpotId};
use crate::spots::SpotRepository;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    active_category: Option<Category>,
}

impl FilterState {
    pub const fn new(active_category: Option<Category>) -> Self {
        Self { active_category }
    }

    pub const fn active_category(&self) -> Option<Category> {
        self.active_category
    }

    /// Returns `false` when the category was already active.
    pub fn set_category(&mut self, category: Option<Category>) -> bool {
        if self.active_category == category {
            return false;
        }
        self.active_category = category;
        true
    }

    pub fn matches(&self, spot: &Spot) -> bool {
        self.active_category
            .is_none_or(|category| spot.category == category)
    }

    pub fn visible_set(&self, repository: &SpotRepository) -> VisibleSet {
        VisibleSet {
            spots: repository
                .all()
                .iter()
                .filter(|spot| self.matches(spot))
                .cloned()
                .collect(),
        }
    }
}

/// Spots passing the current filter, in repository order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleSet {
    spots: Vec<Spot>,
}

impl VisibleSet {
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn get(&self, id: &SpotId) -> Option<&Spot> {
        self.spots.iter().find(|spot| &spot.id == id)
    }

    pub fn position(&self, id: &SpotId) -> Option<usize> {
        self.spots.iter().position(|spot| &spot.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &SpotId> {
        self.spots.iter().map(|spot| &spot.id)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;

    fn repository() -> SpotRepository {
        SpotRepository::new(vec![
            Spot::new("a", "A", Some(GeoPoint::new(10.0, 10.0)), Category::Ocean),
            Spot::new("b", "B", Some(GeoPoint::new(20.0, 20.0)), Category::Rapid),
            Spot::new("c", "C", Some(GeoPoint::new(30.0, 30.0)), Category::Ocean),
        ])
        .unwrap_or_default()
    }

    #[test]
    fn no_category_shows_everything_in_order() {
        let visible = FilterState::default().visible_set(&repository());
        let ids: Vec<&str> = visible.ids().map(SpotId::as_str).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn category_narrows_visible_set() {
        let visible = FilterState::new(Some(Category::Ocean)).visible_set(&repository());
        let ids: Vec<&str> = visible.ids().map(SpotId::as_str).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(visible.position(&SpotId::from("c")), Some(1));
        assert!(visible.get(&SpotId::from("b")).is_none());
    }

    #[test]
    fn setting_same_category_reports_no_change() {
        let mut filter = FilterState::default();
        assert!(filter.set_category(Some(Category::Wake)));
        assert!(!filter.set_category(Some(Category::Wake)));
        assert!(filter.set_category(None));
        assert_eq!(filter.active_category(), None);
    }

    #[test]
    fn clearing_the_filter_restores_the_full_set() {
        let repository = repository();
        let mut filter = FilterState::default();
        let unfiltered = filter.visible_set(&repository);

        filter.set_category(Some(Category::Rapid));
        assert_eq!(filter.visible_set(&repository).len(), 1);

        filter.set_category(None);
        assert_eq!(filter.visible_set(&repository), unfiltered);
    }
}
