//! IMDb iPhone API transport module.
//!
//! Performs GET requests against the `app.imdb.com` endpoint and hands
//! raw JSON response bodies back to the feature layer unparsed.

mod api;
mod http;

pub use api::{LocalRequestExecutor, RequestExecutor};
pub use http::{HttpExecutor, HttpExecutorBuilder};
