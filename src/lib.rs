pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "tui")]
pub mod ui;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::PokebuildClient;
pub use config::ViewerConfig;
pub use core::{Dispatcher, Effect, Outcome, ViewerState};
pub use utils::error::{PokedexError, Result};
