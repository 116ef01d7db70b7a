//! Geocoding client
//!
//! Validates query parameters, builds request URLs, and fetches suggestion
//! candidates from the MapTiler geocoding API.

pub mod response;
mod url;

use crate::constants::api::GEOCODING_URL;
use crate::error::{Error, Result};
use crate::params::{Bounds, LanguageList, Proximity};
use response::FeatureCollection;
use tracing::debug;

/// Construction options for [`Geocoder`]
///
/// `key` is required; everything else is optional. Invalid language, bounds,
/// or proximity values fail construction.
#[derive(Debug, Clone, Default)]
pub struct GeocoderOptions {
    /// Access key from https://cloud.maptiler.com/
    pub key: String,

    /// API base URL override, mainly for tests
    pub api_url: Option<String>,

    /// Preferred response languages (ISO 639-1 codes)
    pub language: Option<Vec<String>>,

    /// Restrict results to a bounding box: `[minLng, minLat, maxLng, maxLat]`
    pub bounds: Option<Vec<f64>>,

    /// Bias ranking towards a point: `[lng, lat]`
    pub proximity: Option<Vec<f64>>,
}

impl GeocoderOptions {
    /// Options with just an access key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}

/// Client for the MapTiler geocoding API
///
/// Holds validated query parameters; setters take effect on the next query.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    api_url: String,
    key: String,
    language: Option<LanguageList>,
    bounds: Option<Bounds>,
    proximity: Option<Proximity>,
}

impl Geocoder {
    /// Create a geocoder from options
    ///
    /// Fails synchronously with [`Error::Config`] when no key is provided,
    /// before any network activity.
    pub fn new(options: GeocoderOptions) -> Result<Self> {
        if options.key.is_empty() {
            return Err(Error::Config("No key provided.".to_string()));
        }

        let mut geocoder = Self {
            client: reqwest::Client::new(),
            api_url: options
                .api_url
                .unwrap_or_else(|| GEOCODING_URL.to_string()),
            key: options.key,
            language: None,
            bounds: None,
            proximity: None,
        };

        geocoder.set_language(options.language.as_deref())?;
        geocoder.set_bounds(options.bounds.as_deref())?;
        geocoder.set_proximity(options.proximity.as_deref())?;

        Ok(geocoder)
    }

    /// Create a geocoder with just an access key
    pub fn with_key(key: impl Into<String>) -> Result<Self> {
        Self::new(GeocoderOptions::with_key(key))
    }

    /// Set or clear the preferred response languages
    ///
    /// A failed call leaves the previous value in effect.
    pub fn set_language<S: AsRef<str>>(&mut self, codes: Option<&[S]>) -> Result<()> {
        self.language = match codes {
            Some(codes) => Some(LanguageList::new(codes)?),
            None => None,
        };
        Ok(())
    }

    /// Set a single preferred language, wrapped into a one-element list
    ///
    /// A failed call leaves the previous value in effect.
    pub fn set_language_single(&mut self, code: &str) -> Result<()> {
        self.language = Some(LanguageList::single(code)?);
        Ok(())
    }

    /// Set or clear the bounding-box filter
    ///
    /// A failed call leaves the previous value in effect.
    pub fn set_bounds(&mut self, bbox: Option<&[f64]>) -> Result<()> {
        self.bounds = match bbox {
            Some(values) => Some(Bounds::from_slice(values)?),
            None => None,
        };
        Ok(())
    }

    /// Set or clear the proximity bias point
    ///
    /// A failed call leaves the previous value in effect.
    pub fn set_proximity(&mut self, point: Option<&[f64]>) -> Result<()> {
        self.proximity = match point {
            Some(values) => Some(Proximity::from_slice(values)?),
            None => None,
        };
        Ok(())
    }

    pub fn language(&self) -> Option<&LanguageList> {
        self.language.as_ref()
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn proximity(&self) -> Option<&Proximity> {
        self.proximity.as_ref()
    }

    /// Build the request URL for a free-text query
    pub fn query_url(&self, query: &str) -> String {
        url::query_url(
            &self.api_url,
            &self.key,
            query,
            self.language.as_ref(),
            self.bounds.as_ref(),
            self.proximity.as_ref(),
        )
    }

    /// Fetch suggestion candidates for a free-text query
    ///
    /// One GET per call; fails on network or JSON parse errors. No retries,
    /// no caching.
    pub async fn geocode(&self, query: &str) -> Result<FeatureCollection> {
        let url = self.query_url(query);
        debug!("geocoding request: {}", url);

        let body = self.client.get(&url).send().await?.text().await?;
        let collection: FeatureCollection = serde_json::from_str(&body)?;

        Ok(collection)
    }
}
