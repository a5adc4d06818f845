//! `FeatureApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

/// IMDb iPhone API feature catalog.
///
/// One method per supported remote feature; every method returns the
/// raw JSON response text unmodified. Abstracts the catalog for mock
/// substitution in tests. Uses `trait_variant::make` to generate a
/// `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(FeatureApi: Send)]
pub trait LocalFeatureApi {
    /// Fetches a hello message from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn hello(&self) -> Result<String>;

    /// Fetches showtimes for the given location, optionally on a given
    /// date (defaults to today).
    ///
    /// # Errors
    ///
    /// Returns an error if no usable location was supplied, if a
    /// non-empty location is malformed, or if the HTTP request fails.
    async fn showtimes(&self, location: Option<&str>, date: Option<&str>) -> Result<String>;

    /// Fetches the list of movies coming soon.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn coming_soon(&self) -> Result<String>;

    /// Fetches current box office results for a region (defaults to
    /// `US`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn box_office_results(&self, region: Option<&str>) -> Result<String>;

    /// Fetches the MOVIEmeter chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn moviemeter(&self) -> Result<String>;

    /// Fetches the top 250 movies chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn top250_movies(&self) -> Result<String>;

    /// Fetches the US TV program for a given night (defaults to
    /// tonight).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn us_tv_tonight(&self, date: Option<&str>) -> Result<String>;

    /// Fetches US TV recaps for a given night (defaults to tonight).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn us_tv_recaps(&self, date: Option<&str>) -> Result<String>;

    /// Fetches the STARmeter chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn starmeter(&self) -> Result<String>;

    /// Fetches the people born on the given date (defaults to today).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn born_today(&self, date: Option<&str>) -> Result<String>;

    /// Fetches the latest news.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn news(&self) -> Result<String>;
}
