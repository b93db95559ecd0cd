//! One monitoring pass: fetch, normalize, report

pub mod pipeline;

pub use pipeline::*;
