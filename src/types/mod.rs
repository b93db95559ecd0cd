//! Core data types and structures

pub mod addresses;
pub mod pools;
pub mod price;
pub mod spread;

pub use addresses::*;
pub use pools::*;
pub use price::*;
pub use spread::*;
