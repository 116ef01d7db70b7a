//! Typed geocoding response
//!
//! The service answers with a GeoJSON-style feature collection. Fields not
//! needed for display are kept optional so partial records still parse.

use serde::{Deserialize, Serialize};

/// A geocoding response: the ordered list of candidate features
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One geographic record in a feature collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Short display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Full display name, including containing places
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,

    /// Kind of place ("address", "city", ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub place_type: Vec<String>,

    /// Representative point as `[lng, lat]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,

    /// Containing places, most specific first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<ContextEntry>,
}

/// A containing place referenced from a feature's context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Feature {
    /// Primary display name: `text`, falling back to `place_name`
    pub fn display_name(&self) -> &str {
        self.text
            .as_deref()
            .or(self.place_name.as_deref())
            .unwrap_or("")
    }

    /// Secondary line: all context texts joined with ", "
    pub fn context_line(&self) -> String {
        self.context
            .iter()
            .filter_map(|c| c.text.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Type label: place types joined with a bare comma
    pub fn type_label(&self) -> String {
        self.place_type.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "id": "address.1",
                    "text": "Mariannenstrasse 5",
                    "place_name": "Mariannenstrasse 5, Berlin, Germany",
                    "place_type": ["address"],
                    "center": [13.42, 52.5],
                    "context": [
                        {"id": "city.2", "text": "Berlin"},
                        {"id": "country.3", "text": "Germany"}
                    ]
                },
                {
                    "place_name": "Berlin, Germany",
                    "place_type": ["city"]
                }
            ]
        }"#
    }

    #[test]
    fn test_parse_collection() {
        let collection: FeatureCollection = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(collection.features.len(), 2);

        let first = &collection.features[0];
        assert_eq!(first.display_name(), "Mariannenstrasse 5");
        assert_eq!(first.center, Some([13.42, 52.5]));
        assert_eq!(first.context.len(), 2);
    }

    #[test]
    fn test_display_name_falls_back_to_place_name() {
        let collection: FeatureCollection = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(collection.features[1].display_name(), "Berlin, Germany");
    }

    #[test]
    fn test_display_name_empty_when_unnamed() {
        let feature = Feature::default();
        assert_eq!(feature.display_name(), "");
    }

    #[test]
    fn test_context_line_joins_texts() {
        let collection: FeatureCollection = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(collection.features[0].context_line(), "Berlin, Germany");
        assert_eq!(collection.features[1].context_line(), "");
    }

    #[test]
    fn test_type_label() {
        let collection: FeatureCollection = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(collection.features[0].type_label(), "address");
    }

    #[test]
    fn test_type_label_joins_with_bare_comma() {
        let feature = Feature {
            place_type: vec!["place".to_string(), "city".to_string()],
            ..Feature::default()
        };
        assert_eq!(feature.type_label(), "place,city");
    }

    #[test]
    fn test_empty_body_parses() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.features.is_empty());
    }
}
