//! Error types for the monitor

pub mod bot_error;

pub use bot_error::*;
