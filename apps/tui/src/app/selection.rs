//! Single source of truth for the active spot and the narrow-layout view flag.

use crate::domain::SpotId;

/// Pane shown when the terminal is too narrow for the split layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPane {
    #[default]
    List,
    Map,
}

impl ViewPane {
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Map,
            Self::Map => Self::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    pub const fn for_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// User interactions that may change the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIntent {
    CardClicked(SpotId),
    MarkerClicked(SpotId),
    /// "Go to list" inside a marker popup.
    GoToList(SpotId),
    Clear,
    ToggleView,
}

/// Both fields are always read and written together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    pub active_spot_id: Option<SpotId>,
    pub current_view: ViewPane,
    pub revision: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionChange {
    pub active_changed: bool,
    pub view_changed: bool,
}

impl SelectionChange {
    pub const fn is_empty(self) -> bool {
        !self.active_changed && !self.view_changed
    }
}

#[derive(Debug, Default)]
pub struct SelectionState {
    snapshot: SelectionSnapshot,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(view: ViewPane) -> Self {
        Self {
            snapshot: SelectionSnapshot {
                current_view: view,
                ..SelectionSnapshot::default()
            },
        }
    }

    pub const fn snapshot(&self) -> &SelectionSnapshot {
        &self.snapshot
    }

    pub const fn active_spot_id(&self) -> Option<&SpotId> {
        self.snapshot.active_spot_id.as_ref()
    }

    pub const fn current_view(&self) -> ViewPane {
        self.snapshot.current_view
    }

    pub fn select_spot(&mut self, id: SpotId) -> SelectionChange {
        self.commit(Some(id), self.snapshot.current_view)
    }

    pub fn clear_selection(&mut self) -> SelectionChange {
        self.commit(None, self.snapshot.current_view)
    }

    pub fn toggle_view(&mut self) -> SelectionChange {
        self.commit(
            self.snapshot.active_spot_id.clone(),
            self.snapshot.current_view.toggled(),
        )
    }

    /// Applies an interaction as one transition: selection and view change together.
    pub fn apply(&mut self, intent: SelectionIntent, layout: LayoutMode) -> SelectionChange {
        let view = self.snapshot.current_view;
        let narrow = layout == LayoutMode::Narrow;

        match intent {
            SelectionIntent::CardClicked(id) => {
                let next_view = if narrow { ViewPane::Map } else { view };
                self.commit(Some(id), next_view)
            }
            SelectionIntent::MarkerClicked(id) => self.commit(Some(id), view),
            SelectionIntent::GoToList(id) => {
                let next_view = if narrow { ViewPane::List } else { view };
                self.commit(Some(id), next_view)
            }
            SelectionIntent::Clear => self.clear_selection(),
            SelectionIntent::ToggleView => self.toggle_view(),
        }
    }

    fn commit(&mut self, active_spot_id: Option<SpotId>, current_view: ViewPane) -> SelectionChange {
        let change = SelectionChange {
            active_changed: active_spot_id != self.snapshot.active_spot_id,
            view_changed: current_view != self.snapshot.current_view,
        };

        if !change.is_empty() {
            self.snapshot = SelectionSnapshot {
                active_spot_id,
                current_view,
                revision: self.snapshot.revision + 1,
            };
        }

        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> SpotId {
        SpotId::from(value)
    }

    #[test]
    fn selecting_the_active_spot_again_is_a_no_op() {
        let mut state = SelectionState::new();
        assert!(state.select_spot(id("a")).active_changed);
        let revision = state.snapshot().revision;

        let change = state.select_spot(id("a"));
        assert!(change.is_empty());
        assert_eq!(state.snapshot().revision, revision);
    }

    #[test]
    fn card_click_on_narrow_layout_selects_and_shows_map_in_one_step() {
        let mut state = SelectionState::new();
        let before = state.snapshot().revision;

        let change = state.apply(SelectionIntent::CardClicked(id("a")), LayoutMode::Narrow);

        assert!(change.active_changed && change.view_changed);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.active_spot_id, Some(id("a")));
        assert_eq!(snapshot.current_view, ViewPane::Map);
        assert_eq!(snapshot.revision, before + 1);
    }

    #[test]
    fn card_click_on_wide_layout_keeps_view() {
        let mut state = SelectionState::new();
        let change = state.apply(SelectionIntent::CardClicked(id("a")), LayoutMode::Wide);
        assert!(change.active_changed);
        assert!(!change.view_changed);
        assert_eq!(state.current_view(), ViewPane::List);
    }

    #[test]
    fn go_to_list_switches_back_on_narrow_layout() {
        let mut state = SelectionState::with_view(ViewPane::Map);
        state.apply(SelectionIntent::MarkerClicked(id("b")), LayoutMode::Narrow);
        assert_eq!(state.current_view(), ViewPane::Map);

        let change = state.apply(SelectionIntent::GoToList(id("b")), LayoutMode::Narrow);
        assert!(!change.active_changed);
        assert!(change.view_changed);
        assert_eq!(state.current_view(), ViewPane::List);
    }

    #[test]
    fn selection_accepts_unknown_ids_and_clears() {
        let mut state = SelectionState::new();
        state.select_spot(id("not-in-repository"));
        assert_eq!(state.active_spot_id(), Some(&id("not-in-repository")));

        assert!(state.apply(SelectionIntent::Clear, LayoutMode::Wide).active_changed);
        assert_eq!(state.active_spot_id(), None);
        assert!(state.clear_selection().is_empty());
    }

    #[test]
    fn layout_mode_uses_breakpoint() {
        assert_eq!(LayoutMode::for_width(99, 100), LayoutMode::Narrow);
        assert_eq!(LayoutMode::for_width(100, 100), LayoutMode::Wide);
    }
}
