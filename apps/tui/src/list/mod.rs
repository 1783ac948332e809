pub mod card;
pub mod scroller;
pub mod view;

pub use card::CardLayout;
pub use scroller::{ListScroller, SCROLL_DELAY};
pub use view::{ListSurface, SpotListView};
