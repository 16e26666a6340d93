//! Interactive terminal screens. Each screen drives one state machine in the
//! [`Session`](crate::session::Session) and returns to the menu when the user
//! backs out.

pub mod chat;
pub mod dispatch;
pub mod guess;
pub mod quiz;
pub mod settings;

pub use dispatch::dispatch;
