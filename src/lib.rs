//! maptiler-geocoder: address and place autocomplete client
//!
//! A client for the MapTiler geocoding API with validated query parameters
//! and an optional, UI-toolkit-agnostic autocomplete controller.
//!
//! ## Features
//!
//! - Language, bounding-box, and proximity validation before anything hits
//!   the wire
//! - Deterministic query-URL construction
//! - Async `geocode` returning typed feature collections
//! - An autocomplete controller that drives any host suggestion widget and
//!   emits `select`/`hover` callbacks
//!
//! ## Quick Start
//!
//! ```rust
//! use maptiler_geocoder::{Geocoder, GeocoderOptions};
//!
//! let options = GeocoderOptions {
//!     language: Some(vec!["de".to_string()]),
//!     proximity: Some(vec![13.4, 52.5]),
//!     ..GeocoderOptions::with_key("abc")
//! };
//! let geocoder = Geocoder::new(options).unwrap();
//!
//! assert_eq!(
//!     geocoder.query_url("Berlin"),
//!     "https://api.maptiler.com/geocoding/Berlin.json?key=abc&language=de&proximity=13.4,52.5"
//! );
//!
//! // geocoder.geocode("Berlin").await fetches the matching features.
//! ```

pub mod autocomplete;
pub mod constants;
pub mod error;
pub mod geocoder;
pub mod params;

// Re-export commonly used types
pub use autocomplete::events::EventListeners;
pub use autocomplete::view::{InputTarget, SuggestionRow, SuggestionView};
pub use autocomplete::{Autocomplete, AutocompleteOptions};
pub use error::{Error, Result};
pub use geocoder::response::{ContextEntry, Feature, FeatureCollection};
pub use geocoder::{Geocoder, GeocoderOptions};
pub use params::{Bounds, LanguageList, Proximity};
