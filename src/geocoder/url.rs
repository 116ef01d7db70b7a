//! Query URL construction
//!
//! Builds the geocoding request URL from validated parameters. Parameter
//! order is fixed: key, language, bbox, proximity.

use crate::params::{Bounds, LanguageList, Proximity};

/// Build the full request URL for a free-text query
///
/// The query is percent-encoded as a single path segment; no other
/// sanitization is applied. Deterministic for identical inputs.
pub(crate) fn query_url(
    api_url: &str,
    key: &str,
    query: &str,
    language: Option<&LanguageList>,
    bounds: Option<&Bounds>,
    proximity: Option<&Proximity>,
) -> String {
    let mut url = format!(
        "{}/{}.json?key={}",
        api_url,
        urlencoding::encode(query),
        key
    );

    if let Some(language) = language {
        url.push_str(&format!("&language={}", language));
    }
    if let Some(bounds) = bounds {
        url.push_str(&format!("&bbox={}", bounds));
    }
    if let Some(proximity) = proximity {
        url.push_str(&format!("&proximity={}", proximity));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::api::GEOCODING_URL;

    #[test]
    fn test_bare_query() {
        let url = query_url(GEOCODING_URL, "abc", "Berlin", None, None, None);
        assert_eq!(url, "https://api.maptiler.com/geocoding/Berlin.json?key=abc");
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let url = query_url(GEOCODING_URL, "abc", "New York", None, None, None);
        assert_eq!(
            url,
            "https://api.maptiler.com/geocoding/New%20York.json?key=abc"
        );

        let url = query_url(GEOCODING_URL, "abc", "a/b?c&d", None, None, None);
        assert!(url.contains("a%2Fb%3Fc%26d.json"));
    }

    #[test]
    fn test_all_parameters_in_fixed_order() {
        let language = LanguageList::new(&["en", "de"]).unwrap();
        let bounds = Bounds::from_slice(&[-1.0, -1.0, 1.0, 1.0]).unwrap();
        let proximity = Proximity::from_slice(&[0.0, 0.0]).unwrap();

        let url = query_url(
            GEOCODING_URL,
            "abc",
            "Berlin",
            Some(&language),
            Some(&bounds),
            Some(&proximity),
        );
        assert_eq!(
            url,
            "https://api.maptiler.com/geocoding/Berlin.json?key=abc\
             &language=en,de&bbox=-1,-1,1,1&proximity=0,0"
        );
    }

    #[test]
    fn test_single_language() {
        let language = LanguageList::single("de").unwrap();
        let url = query_url(GEOCODING_URL, "abc", "Berlin", Some(&language), None, None);
        assert!(url.ends_with("?key=abc&language=de"));
    }

    #[test]
    fn test_deterministic() {
        let bounds = Bounds::from_slice(&[-1.0, -1.0, 1.0, 1.0]).unwrap();
        let a = query_url(GEOCODING_URL, "abc", "Berlin", None, Some(&bounds), None);
        let b = query_url(GEOCODING_URL, "abc", "Berlin", None, Some(&bounds), None);
        assert_eq!(a, b);
    }
}
