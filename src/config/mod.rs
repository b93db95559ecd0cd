//! Configuration management for the monitor

pub mod settings;
pub mod address_book;

pub use settings::*;
pub use address_book::*;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::load();
}
