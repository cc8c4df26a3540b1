pub mod app_state;
pub mod config;
pub mod content;
pub mod errors;
