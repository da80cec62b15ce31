pub mod error;
pub mod export;
pub mod figure;
pub mod math;
pub mod parser;

pub use error::{Result, StructuralError};
