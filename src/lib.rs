#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod games;
pub mod llm;
pub mod persona;
pub mod session;
pub mod ui;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{ChatError, ConfigError, GameError, QuackError};
pub use session::Session;
