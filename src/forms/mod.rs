//! Submit forms validated before any request is dispatched.
//!
//! A failed validation blocks the submit locally: the controller returns
//! the error inline and nothing reaches the network.

pub mod client;
pub mod product;
pub mod sale;
pub mod user;

use thiserror::Error;

/// Client-side precondition failure.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FormError(pub String);

impl From<validator::ValidationErrors> for FormError {
    fn from(errors: validator::ValidationErrors) -> Self {
        FormError(errors.to_string())
    }
}
