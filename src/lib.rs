pub mod config;
pub mod logging;
pub mod service;
pub mod shutdown;
pub mod switch;
pub mod ui;
