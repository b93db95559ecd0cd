//! PALA spread monitor - read-only price and spread monitoring for Klaytn
//!
//! Reads PalaDEX and Klayswap pools plus the PalaViewer contract through a
//! JSON-RPC gateway, normalizes the raw fixed-point integers and prints
//! the PALA price in both PALA pools, the cheaper of the two, a spread
//! scan and a cross-DEX reserve comparison.

pub mod config;
pub mod types;
pub mod errors;
pub mod contracts;
pub mod network;
pub mod pools;
pub mod arbitrage;
pub mod monitor;
pub mod utils;

// Re-export commonly used items
pub use config::{AddressBook, Config, CONFIG};
pub use errors::{BotError, BotResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
