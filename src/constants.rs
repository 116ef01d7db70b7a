//! Centralized constants for the maptiler-geocoder crate

/// External API endpoints
pub mod api {
    /// MapTiler geocoding API base URL (key from https://cloud.maptiler.com/)
    pub const GEOCODING_URL: &str = "https://api.maptiler.com/geocoding";
}

/// Autocomplete behavior settings
pub mod autocomplete {
    /// Shortest query that triggers a suggestion fetch
    pub const MIN_QUERY_LEN: usize = 2;

    /// Hard cap applied to the bound text input
    pub const MAX_INPUT_LEN: usize = 60;

    /// Debounce interval handed to the host suggestion widget
    pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

    /// Message shown when a query produces no features
    pub const EMPTY_MESSAGE: &str = "No results";

    /// Marker class attached to the bound input
    pub const MARKER_CLASS: &str = "maptiler-geocoder";
}
