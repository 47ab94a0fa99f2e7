//! Shared engine utilities

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{FieldError, SubmitError, ValidationReport};
