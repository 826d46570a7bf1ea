pub mod config;
pub mod export;
pub mod model;
pub mod service;
pub mod ui;
