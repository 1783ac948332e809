// Map pane: camera, markers and the controller that keeps them on the selection.

pub mod animator;
pub mod camera;
pub mod icon;
pub mod markers;
pub mod registry;
pub mod surface;

pub use animator::{AnimationOutcome, MapAnimator, CLOSE_UP_ZOOM, FLY_DURATION, POPUP_DELAY};
pub use camera::Camera;
pub use markers::{MarkerLayer, MountDiff};
pub use registry::{MarkerHandle, MarkerKey, MarkerRegistry};
pub use surface::{MapSurface, MapViewport};
