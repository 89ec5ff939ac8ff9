//! Utility functions for rule implementations.

pub mod allowance;
pub mod traverse;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use allowance::check_allow_with_reason;
#[doc(inline)]
pub use traverse::{walk, Walk};
