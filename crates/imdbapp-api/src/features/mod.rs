//! IMDb iPhone API feature catalog module.
//!
//! Validates feature arguments, applies the documented defaults, and
//! dispatches one request per feature through the request executor.

mod api;
mod client;
mod clock;
mod error;
mod params;

#[allow(clippy::module_name_repetitions)]
pub use api::{FeatureApi, LocalFeatureApi};
#[allow(clippy::module_name_repetitions)]
pub use client::FeatureClient;
pub use clock::{Clock, FixedClock, SystemClock};
#[allow(clippy::module_name_repetitions)]
pub use error::FeatureError;
pub use params::{ArgCheck, check_date, check_location, check_region};
