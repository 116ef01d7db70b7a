//! Suggestion view abstraction
//!
//! The dropdown itself (focus handling, keyboard navigation, positioning,
//! debouncing) belongs to a host UI toolkit. This module defines the narrow
//! surface the controller drives, plus the display rows it hands over.

use crate::geocoder::response::Feature;
use tracing::debug;

/// What the controller needs from a host suggestion widget
///
/// Implementations forward these calls to whatever toolkit renders the
/// dropdown; tests use a recording stub.
pub trait SuggestionView: Send {
    /// One-time input setup: marker class and maximum input length
    fn configure_input(&mut self, marker_class: &str, max_len: usize);

    /// Toggle the "working" visual state while a fetch is in flight
    fn set_busy(&mut self, busy: bool);

    /// Display the candidate rows, in order
    fn show(&mut self, rows: &[SuggestionRow]);

    /// Display the no-results message
    fn show_empty(&mut self, message: &str);

    /// Clear the input's text
    fn clear_input(&mut self);
}

/// One rendered suggestion: primary name, context line, type label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    pub name: String,
    pub context: String,
    pub kind: String,
}

impl SuggestionRow {
    /// Build a row from a feature, with the display fallbacks:
    /// `text` falling back to `place_name`, context texts joined with ", "
    pub fn from_feature(feature: &Feature) -> Self {
        Self {
            name: feature.display_name().to_string(),
            context: feature.context_line(),
            kind: feature.type_label(),
        }
    }
}

/// Where to find the input to bind: a resolved handle or a key to look up
///
/// Lookup happens once at bind time; a key that resolves to nothing means
/// no binding is established.
#[derive(Debug)]
pub enum InputTarget<V> {
    Handle(V),
    LookupKey(String),
}

impl<V> InputTarget<V> {
    /// Resolve to a concrete handle, consulting `lookup` for keys
    pub fn resolve<F: FnOnce(&str) -> Option<V>>(self, lookup: F) -> Option<V> {
        match self {
            Self::Handle(view) => Some(view),
            Self::LookupKey(key) => {
                let resolved = lookup(&key);
                if resolved.is_none() {
                    debug!("input '{}' not found, skipping binding", key);
                }
                resolved
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoder::response::ContextEntry;

    #[test]
    fn test_row_from_full_feature() {
        let feature = Feature {
            text: Some("Mariannenstrasse 5".to_string()),
            place_name: Some("Mariannenstrasse 5, Berlin".to_string()),
            place_type: vec!["address".to_string()],
            context: vec![
                ContextEntry {
                    id: None,
                    text: Some("Berlin".to_string()),
                },
                ContextEntry {
                    id: None,
                    text: Some("Germany".to_string()),
                },
            ],
            ..Feature::default()
        };

        let row = SuggestionRow::from_feature(&feature);
        assert_eq!(row.name, "Mariannenstrasse 5");
        assert_eq!(row.context, "Berlin, Germany");
        assert_eq!(row.kind, "address");
    }

    #[test]
    fn test_row_name_falls_back_to_place_name() {
        let feature = Feature {
            place_name: Some("Berlin, Germany".to_string()),
            ..Feature::default()
        };

        let row = SuggestionRow::from_feature(&feature);
        assert_eq!(row.name, "Berlin, Germany");
        assert_eq!(row.context, "");
    }

    #[test]
    fn test_resolve_handle() {
        let target = InputTarget::Handle(42);
        assert_eq!(target.resolve(|_| None), Some(42));
    }

    #[test]
    fn test_resolve_lookup_key() {
        let target: InputTarget<i32> = InputTarget::LookupKey("search-box".to_string());
        assert_eq!(
            target.resolve(|key| if key == "search-box" { Some(7) } else { None }),
            Some(7)
        );
    }

    #[test]
    fn test_unresolved_key_is_none() {
        let target: InputTarget<i32> = InputTarget::LookupKey("missing".to_string());
        assert_eq!(target.resolve(|_| None), None);
    }
}
