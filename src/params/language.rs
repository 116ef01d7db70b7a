//! Language codes accepted by the geocoding API
//!
//! The API takes ISO 639-1 two-letter codes, minus a few reserved and
//! deprecated entries. Anything outside this table is rejected before it can
//! reach the wire.

use crate::error::{Error, Result};
use std::fmt;

/// Two-letter codes the geocoding API understands
pub const VALID_LANGUAGES: [&str; 184] = [
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce",
    "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de", "dv", "dz", "ee",
    "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is",
    "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn",
    "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms",
    "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu",
    "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta",
    "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw",
    "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Check whether a single code is in the allow-list
pub fn is_valid_code(code: &str) -> bool {
    VALID_LANGUAGES.contains(&code)
}

/// A validated, ordered list of language codes
///
/// Construction fails if any code is outside the allow-list; the error
/// message names every invalid code in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageList(Vec<String>);

impl LanguageList {
    /// Validate and store a list of codes
    pub fn new<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        let invalid: Vec<&str> = codes
            .iter()
            .map(|c| c.as_ref())
            .filter(|c| !is_valid_code(c))
            .collect();

        if !invalid.is_empty() {
            return Err(Error::Validation(format!(
                "Invalid language codes: {}",
                invalid.join(", ")
            )));
        }

        Ok(Self(codes.iter().map(|c| c.as_ref().to_string()).collect()))
    }

    /// Wrap a single code into a one-element list
    pub fn single(code: &str) -> Result<Self> {
        Self::new(&[code])
    }

    /// The normalized codes, in input order
    pub fn codes(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for LanguageList {
    /// The wire form: codes comma-joined into one `language=` value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}
