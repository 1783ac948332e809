pub mod cards;
pub mod filter_bar;
pub mod map;
pub mod popup;
