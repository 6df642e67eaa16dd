//! ovum core: errors, tolerances, and the traits shared across crates.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{OvumError, Result};
pub use tolerance::Tolerance;
