//! Transport-neutral messaging model (Telegram today, via the adapter crate).

pub mod port;
pub mod types;
