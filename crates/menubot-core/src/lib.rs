//! Core domain + dispatch logic for the menu bot.
//!
//! This crate is framework-agnostic. Telegram lives behind the messaging port
//! implemented in the adapter crate.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod menu;
pub mod messaging;

pub use errors::{Error, Result};
