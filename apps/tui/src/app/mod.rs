// App module for surf_gems
// Holds selection and filter state and wires them to the list and map controllers

pub mod filter;
pub mod input;
pub mod selection;
pub mod state;

pub use input::handle_input;
pub use state::App;
