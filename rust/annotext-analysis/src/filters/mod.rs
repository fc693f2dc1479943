//! Token filters that remove tokens while preserving absolute positions.

pub mod filtering;
pub mod stop;

pub use filtering::{FilteringTokenFilter, TokenPredicate};
pub use stop::{StopFilter, StopWords};
