pub mod atmosphere;
pub mod config;
pub mod falling_object;
