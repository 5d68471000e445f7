pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod flags;
pub mod input;
pub mod logging;
pub mod navigation;
pub mod page;
pub mod topbar;
