//! Contract accessors: one read-only call each, raw results out

pub mod reserves;
pub mod token;
pub mod viewer;

pub use reserves::*;
pub use token::*;
pub use viewer::*;
