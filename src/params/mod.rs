//! Query parameter validation
//!
//! This module handles:
//! - The ISO 639-1 language allow-list and normalized language lists
//! - Bounding-box validation
//! - Proximity-point validation
//!
//! Each type validates on construction, so a stored value is always valid.

pub mod bounds;
pub mod language;
pub mod proximity;

pub use bounds::Bounds;
pub use language::LanguageList;
pub use proximity::Proximity;
