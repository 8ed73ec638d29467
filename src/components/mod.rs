pub mod app;
pub mod event_display;
pub mod game_panel;
pub mod game_selector;
pub mod timeline;
