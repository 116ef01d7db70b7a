//! Selection and hover event callbacks
//!
//! Explicit observer registration for the two events the widget emits. Every
//! callback receives the full feature item.

use crate::geocoder::response::Feature;
use std::sync::RwLock;

type Callback = Box<dyn Fn(&Feature) + Send + Sync>;

/// Registered `select` and `hover` observers
#[derive(Default)]
pub struct EventListeners {
    select: RwLock<Vec<Callback>>,
    hover: RwLock<Vec<Callback>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for suggestion selection
    pub fn on_select<F: Fn(&Feature) + Send + Sync + 'static>(&self, callback: F) {
        self.select.write().unwrap().push(Box::new(callback));
    }

    /// Register a callback for suggestion hover
    pub fn on_hover<F: Fn(&Feature) + Send + Sync + 'static>(&self, callback: F) {
        self.hover.write().unwrap().push(Box::new(callback));
    }

    pub fn emit_select(&self, feature: &Feature) {
        for callback in self.select.read().unwrap().iter() {
            callback(feature);
        }
    }

    pub fn emit_hover(&self, feature: &Feature) {
        for callback in self.hover.read().unwrap().iter() {
            callback(feature);
        }
    }
}

impl std::fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListeners")
            .field("select", &self.select.read().unwrap().len())
            .field("hover", &self.hover.read().unwrap().len())
            .finish()
    }
}
