pub mod config;
pub mod logging;
pub mod script;
pub mod shutdown;
pub mod ui;
