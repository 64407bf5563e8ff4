pub mod config;
pub mod logging;

pub mod catalog;
pub mod orchestrator;
pub mod render;
pub mod sanitize;
