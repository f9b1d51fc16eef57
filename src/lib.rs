pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gui;
pub mod logging;
pub mod settings;
pub mod terminal;
