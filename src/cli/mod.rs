//! CLI module - argument parsing, logging and the interactive console

pub mod args;
pub mod console;
pub mod helpers;
pub mod logger;
pub mod menu;
pub mod table;

pub use args::{Cli, GlobalOpts};
pub use self::console::Console;
pub use menu::MenuResponse;
pub use table::Styler;
