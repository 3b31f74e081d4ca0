pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod ui;
pub mod view;
