//! `FeatureClient` - IMDb iPhone API feature dispatcher implementation.
#![allow(clippy::future_not_send)]

use anyhow::Result;
use tracing::instrument;

use super::api::LocalFeatureApi;
use super::clock::{Clock, SystemClock};
use super::error::FeatureError;
use super::params::{ArgCheck, check_date, check_location, check_region};
use crate::transport::LocalRequestExecutor;

/// Format of the `date` request argument.
const SQL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Box office region applied when none is usable.
const DEFAULT_REGION: &str = "US";

/// IMDb iPhone API feature client.
///
/// Validates arguments, fills in the documented defaults, and forwards
/// one `(path, args)` pair per call to the injected request executor,
/// returning its raw response unmodified. Holds no state between calls;
/// safe for concurrent use whenever the injected executor is.
#[derive(Debug)]
pub struct FeatureClient<E> {
    /// Request executor performing the outbound call.
    executor: E,
    /// Date source for absent date arguments.
    clock: Box<dyn Clock>,
}

impl<E> FeatureClient<E> {
    /// Creates a client over the given executor, reading dates from the
    /// system clock.
    #[must_use]
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the date source (for deterministic tests).
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Today's date formatted as a SQL date string.
    fn today(&self) -> String {
        self.clock.today().format(SQL_DATE_FORMAT).to_string()
    }

    /// Resolves an optional date argument.
    ///
    /// A malformed date is reported at WARN level and replaced with
    /// today's date; the request still goes out.
    fn resolve_date(&self, date: Option<&str>) -> String {
        match check_date(date) {
            Ok(ArgCheck::Valid(date)) => date,
            Ok(ArgCheck::NotProvided) => self.today(),
            Err(err) => {
                tracing::warn!(error = %err, "Falling back to today's date");
                self.today()
            }
        }
    }

    /// Resolves an optional box office region argument.
    ///
    /// A malformed region is reported at WARN level and replaced with
    /// the default region; the request still goes out.
    fn resolve_region(region: Option<&str>) -> String {
        match check_region(region) {
            Ok(ArgCheck::Valid(region)) => region,
            Ok(ArgCheck::NotProvided) => String::from(DEFAULT_REGION),
            Err(err) => {
                tracing::warn!(error = %err, "Falling back to the default box office region");
                String::from(DEFAULT_REGION)
            }
        }
    }
}

impl<E: LocalRequestExecutor> LocalFeatureApi for FeatureClient<E> {
    #[instrument(skip_all)]
    async fn hello(&self) -> Result<String> {
        self.executor.execute("/hello", &[]).await
    }

    #[instrument(skip_all)]
    async fn showtimes(&self, location: Option<&str>, date: Option<&str>) -> Result<String> {
        let date = self.resolve_date(date);

        let location = match check_location(location)? {
            ArgCheck::Valid(location) => location,
            ArgCheck::NotProvided => return Err(FeatureError::MissingLocation.into()),
        };

        let args = [("date", date), ("location", location)];
        self.executor.execute("/showtimes/location", &args).await
    }

    #[instrument(skip_all)]
    async fn coming_soon(&self) -> Result<String> {
        self.executor.execute("/feature/comingsoon", &[]).await
    }

    #[instrument(skip_all)]
    async fn box_office_results(&self, region: Option<&str>) -> Result<String> {
        let region = Self::resolve_region(region);

        let args = [("boxoffice_region", region)];
        self.executor.execute("/boxoffice", &args).await
    }

    #[instrument(skip_all)]
    async fn moviemeter(&self) -> Result<String> {
        self.executor.execute("/chart/moviemeter", &[]).await
    }

    #[instrument(skip_all)]
    async fn top250_movies(&self) -> Result<String> {
        self.executor.execute("/chart/top", &[]).await
    }

    #[instrument(skip_all)]
    async fn us_tv_tonight(&self, date: Option<&str>) -> Result<String> {
        let args = [("date", self.resolve_date(date))];
        self.executor.execute("/tv/tonight", &args).await
    }

    #[instrument(skip_all)]
    async fn us_tv_recaps(&self, date: Option<&str>) -> Result<String> {
        let args = [("date", self.resolve_date(date))];
        self.executor.execute("/tv/recap", &args).await
    }

    #[instrument(skip_all)]
    async fn starmeter(&self) -> Result<String> {
        self.executor.execute("/chart/starmeter", &[]).await
    }

    #[instrument(skip_all)]
    async fn born_today(&self, date: Option<&str>) -> Result<String> {
        let args = [("date", self.resolve_date(date))];
        self.executor.execute("/feature/borntoday", &args).await
    }

    #[instrument(skip_all)]
    async fn news(&self) -> Result<String> {
        self.executor.execute("/news", &[]).await
    }
}
