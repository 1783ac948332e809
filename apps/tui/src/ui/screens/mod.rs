pub mod directory;
pub mod help;
