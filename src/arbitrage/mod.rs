//! Spread analysis between the PALA pools and across DEXes

pub mod calculator;
pub mod ratio;
pub mod spread;

pub use calculator::*;
pub use ratio::*;
pub use spread::*;
