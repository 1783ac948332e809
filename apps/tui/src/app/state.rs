use crate::app::filter::{FilterState, VisibleSet};
use crate::app::selection::{
    LayoutMode, SelectionChange, SelectionIntent, SelectionState, ViewPane,
};
use crate::config::AppConfig;
use crate::domain::{Category, Spot, SpotId};
use crate::list::{CardLayout, ListScroller, SpotListView};
use crate::map::{
    AnimationOutcome, Camera, MapAnimator, MapSurface, MapViewport, MarkerLayer, MarkerRegistry,
};
use crate::spots::SpotRepository;
use crate::ui::layout::list_viewport;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use tracing::{debug, info};

/// Size assumed until the terminal reports its real one.
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (120, 40);

const HIGHLIGHT_MS: u32 = 600;
const MANUAL_ZOOM_STEP: f64 = 1.0;

pub struct App {
    pub running: bool,
    pub config: AppConfig,
    pub repository: SpotRepository,
    pub filter: FilterState,
    pub visible: VisibleSet,
    pub selection: SelectionState,
    pub markers: MarkerRegistry,
    marker_layer: MarkerLayer,
    pub map: MapViewport,
    pub map_animator: MapAnimator,
    pub list: SpotListView,
    pub list_scroller: ListScroller,
    /// Pane receiving keys on the wide layout.
    pub focus: ViewPane,
    pub list_cursor: usize,
    pub marker_focus: usize,
    pub expanded: HashSet<SpotId>,
    pub card_width: u16,
    pub show_help: bool,
    pub status_message: String,
    pub terminal_area: Rect,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub highlight_fx: Mutex<Option<Effect>>,
}

impl App {
    pub fn new(repository: SpotRepository, config: AppConfig, now: Instant) -> Self {
        let filter = FilterState::new(config.initial_category);
        let visible = filter.visible_set(&repository);
        let mut markers = MarkerRegistry::new();
        let mut marker_layer = MarkerLayer::new();
        marker_layer.sync(&visible, &mut markers);
        let camera = Camera::overview(visible.spots().iter().filter_map(|spot| spot.coordinates));

        let mut app = Self {
            running: true,
            config,
            repository,
            filter,
            visible,
            selection: SelectionState::new(),
            markers,
            marker_layer,
            map: MapViewport::new(camera),
            map_animator: MapAnimator::new(),
            list: SpotListView::new(),
            list_scroller: ListScroller::new(),
            focus: ViewPane::List,
            list_cursor: 0,
            marker_focus: 0,
            expanded: HashSet::new(),
            card_width: 0,
            show_help: false,
            status_message: String::new(),
            terminal_area: Rect::new(0, 0, DEFAULT_TERMINAL_SIZE.0, DEFAULT_TERMINAL_SIZE.1),
            last_frame: now,
            last_tick: Duration::ZERO,
            highlight_fx: Mutex::new(None),
        };

        app.resize(DEFAULT_TERMINAL_SIZE.0, DEFAULT_TERMINAL_SIZE.1);

        // Both controllers see the initial selection as their mount value.
        let active = app.selection.active_spot_id().cloned();
        app.map_animator
            .observe(active.as_ref(), &app.visible, &mut app.map, now);
        app.list_scroller.observe(active.as_ref(), now);

        app
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_width(self.terminal_area.width, self.config.narrow_breakpoint)
    }

    pub fn active_spot_id(&self) -> Option<&SpotId> {
        self.selection.active_spot_id()
    }

    pub fn active_spot(&self) -> Option<&Spot> {
        self.active_spot_id().and_then(|id| self.repository.get(id))
    }

    pub const fn active_category(&self) -> Option<Category> {
        self.filter.active_category()
    }

    pub const fn current_view(&self) -> ViewPane {
        self.selection.current_view()
    }

    /// Pane that receives navigation keys right now.
    pub fn focused_pane(&self) -> ViewPane {
        match self.layout_mode() {
            LayoutMode::Narrow => self.current_view(),
            LayoutMode::Wide => self.focus,
        }
    }

    pub fn select_spot(&mut self, id: SpotId, now: Instant) -> SelectionChange {
        self.dispatch(SelectionIntent::MarkerClicked(id), now)
    }

    pub fn clear_selection(&mut self, now: Instant) -> SelectionChange {
        self.dispatch(SelectionIntent::Clear, now)
    }

    pub fn toggle_view(&mut self, now: Instant) -> SelectionChange {
        self.dispatch(SelectionIntent::ToggleView, now)
    }

    /// Entry point for every user interaction touching the selection.
    pub fn dispatch(&mut self, intent: SelectionIntent, now: Instant) -> SelectionChange {
        let layout = self.layout_mode();
        let wants_list = matches!(intent, SelectionIntent::GoToList(_));
        let change = self.selection.apply(intent, layout);

        if layout == LayoutMode::Narrow {
            self.focus = self.current_view();
        } else if wants_list {
            self.focus = ViewPane::List;
        }

        if change.active_changed {
            self.on_selection_changed(now);
        }
        change
    }

    fn on_selection_changed(&mut self, now: Instant) {
        let active = self.selection.active_spot_id().cloned();
        self.map.close_popup();

        let outcome = self
            .map_animator
            .observe(active.as_ref(), &self.visible, &mut self.map, now);
        self.list_scroller.observe(active.as_ref(), now);

        let Some(id) = active else {
            self.status_message = "Selection cleared".to_string();
            info!("selection cleared");
            return;
        };

        if let Some(position) = self.visible.position(&id) {
            self.list_cursor = position;
        }
        let marker_position = self.marker_ids().iter().position(|marker| **marker == id);
        if let Some(position) = marker_position {
            self.marker_focus = position;
        }
        self.start_highlight();

        let name = self
            .repository
            .get(&id)
            .map_or_else(|| id.to_string(), |spot| spot.name.clone());
        self.status_message = match outcome {
            AnimationOutcome::InvalidCoordinates => {
                format!("{name} has no usable coordinates")
            }
            AnimationOutcome::Unresolved => format!("{name} is hidden by the current filter"),
            _ => format!("Selected {name}"),
        };
        info!(spot = %id, ?outcome, "spot selected");
    }

    /// Narrows both views; the selection is left untouched.
    pub fn set_category(&mut self, category: Option<Category>) -> bool {
        if !self.filter.set_category(category) {
            return false;
        }
        self.refresh_visible();
        info!(
            category = category.map_or("all", Category::as_str),
            visible = self.visible.len(),
            "filter changed"
        );
        true
    }

    fn refresh_visible(&mut self) {
        self.visible = self.filter.visible_set(&self.repository);
        let diff = self.marker_layer.sync(&self.visible, &mut self.markers);

        let popup_unmounted = self.map.popup().is_some_and(|popup| {
            self.markers
                .lookup(&popup.spot_id)
                .is_none_or(|marker| marker.key != popup.key)
        });
        if popup_unmounted {
            self.map.close_popup();
        }

        self.remount_cards();
        self.list_cursor = self.list_cursor.min(self.visible.len().saturating_sub(1));
        self.marker_focus = self.marker_focus.min(self.markers.len().saturating_sub(1));
        debug!(
            mounted = diff.mounted.len(),
            unmounted = diff.unmounted.len(),
            "markers synced"
        );
    }

    /// Mounted markers in visible-set order.
    pub fn marker_ids(&self) -> Vec<&SpotId> {
        self.visible
            .ids()
            .filter(|id| self.markers.contains(id))
            .collect()
    }

    pub fn focused_marker(&self) -> Option<&SpotId> {
        self.marker_ids().get(self.marker_focus).copied()
    }

    pub fn cursor_spot(&self) -> Option<&Spot> {
        self.visible.spots().get(self.list_cursor)
    }

    pub fn set_list_cursor(&mut self, index: usize) {
        if self.visible.is_empty() {
            self.list_cursor = 0;
            return;
        }
        self.list_cursor = index.min(self.visible.len() - 1);
        self.list.ensure_visible(self.list_cursor);
    }

    pub fn toggle_expanded(&mut self, id: &SpotId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
        self.remount_cards();
    }

    pub fn zoom_map(&mut self, steps: f64, now: Instant) {
        self.map.zoom_by(steps * MANUAL_ZOOM_STEP, now);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_area = Rect::new(0, 0, width, height);
        let viewport = list_viewport(self.terminal_area, self.layout_mode());
        self.list.set_viewport_rows(viewport.height);
        self.card_width = viewport.width.saturating_sub(2);
        self.remount_cards();
        if self.layout_mode() == LayoutMode::Narrow {
            self.focus = self.current_view();
        }
    }

    fn remount_cards(&mut self) {
        let width = self.card_width;
        let expanded = &self.expanded;
        self.list.mount(self.visible.spots().iter().map(|spot| {
            let layout = CardLayout::new(spot, expanded.contains(&spot.id), width);
            (spot.id.clone(), layout.height())
        }));
    }

    /// Per-frame work: due timers first, then the tweens.
    pub fn update(&mut self, now: Instant) {
        self.last_tick = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        self.map_animator.poll(&self.markers, &mut self.map, now);
        self.list_scroller.poll(&mut self.list, now);
        self.map.tick(now);
        self.list.tick(now);
    }

    fn start_highlight(&self) {
        if let Ok(mut effect) = self.highlight_fx.lock() {
            *effect = Some(fx::fade_from_fg(
                Color::Yellow,
                (HIGHLIGHT_MS, Interpolation::QuadOut),
            ));
        }
    }
}
