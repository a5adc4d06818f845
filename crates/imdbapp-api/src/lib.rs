//! API client library for imdbapp.
//!
//! Provides the feature catalog client for the IMDb iPhone API and the
//! HTTP transport it dispatches to.

/// IMDb iPhone API feature catalog.
pub mod features;

/// Request execution layer.
pub mod transport;
