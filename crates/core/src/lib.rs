#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod model;

pub use dataset::{Dataset, FlagUrlResolver};
pub use error::Error;
