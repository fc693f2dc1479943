//! Core definitions (error type, result alias and argument checks), relied upon
//! by all annotext-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
