pub mod commands;
pub mod config;
pub mod csv_loader;
pub mod forms;
pub mod logging;
pub mod report;
pub mod utils;
