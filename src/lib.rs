pub mod activate;
pub mod channel;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod raise;
pub mod tabs;
pub mod tui;

mod tui_shell;
