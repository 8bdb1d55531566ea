//! EventDesk frontend library: config, store glue, theme, widgets, screens.

pub mod app;
pub mod config;
pub mod event_store;
pub mod theme;
pub mod widgets;
pub mod screens;
