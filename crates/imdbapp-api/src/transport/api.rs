//! `RequestExecutor` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

/// Request execution trait.
///
/// Abstracts the single outbound HTTP call for mock substitution in
/// tests. Uses `trait_variant::make` to generate a `Send`-bound async
/// trait.
#[trait_variant::make(RequestExecutor: Send)]
pub trait LocalRequestExecutor {
    /// Performs a GET request for the given path and query arguments
    /// against the configured endpoint and returns the raw response
    /// body.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the server answers
    /// with a non-success status.
    async fn execute(&self, path: &str, args: &[(&str, String)]) -> Result<String>;
}
