//! Autocomplete controller
//!
//! Wires a [`Geocoder`](crate::geocoder::Geocoder) to a host suggestion
//! widget through the [`SuggestionView`] trait. The host widget owns
//! debouncing and keyboard handling; this controller owns the fetch cycle,
//! the busy state, stale-response dropping, and `select`/`hover` emission.

pub mod events;
pub mod view;

use crate::constants::autocomplete::{
    DEFAULT_DEBOUNCE_MS, EMPTY_MESSAGE, MARKER_CLASS, MAX_INPUT_LEN, MIN_QUERY_LEN,
};
use crate::geocoder::response::Feature;
use crate::geocoder::Geocoder;
use events::EventListeners;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, error};
use view::{InputTarget, SuggestionRow, SuggestionView};

/// Behavior settings for the autocomplete controller
#[derive(Debug, Clone)]
pub struct AutocompleteOptions {
    /// Shortest query that triggers a fetch
    pub min_query_len: usize,

    /// Debounce interval for the host widget to apply between keystrokes
    pub debounce_wait: Duration,

    /// Message shown when a query produces no candidates
    pub empty_message: String,

    /// Length cap applied to the bound input
    pub max_input_len: usize,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            debounce_wait: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            empty_message: EMPTY_MESSAGE.to_string(),
            max_input_len: MAX_INPUT_LEN,
        }
    }
}

/// Drives a suggestion view from geocoding results
///
/// Per keystroke cycle: idle, then fetching with the busy visual on, then
/// either the candidate list (or empty message) rendered, or the failure
/// logged and swallowed. The busy visual is cleared on every current-cycle
/// path; a response that is no longer the newest is dropped unseen.
pub struct Autocomplete<V: SuggestionView> {
    geocoder: Geocoder,
    view: Mutex<V>,
    options: AutocompleteOptions,
    listeners: EventListeners,
    seq: AtomicU64,
    current: Mutex<Vec<Feature>>,
}

impl<V: SuggestionView> Autocomplete<V> {
    /// Bind to an input target, resolving lookup keys through `lookup`
    ///
    /// Returns `None` when a lookup key resolves to nothing; that is a
    /// configuration no-op, not an error.
    pub fn bind<F>(
        geocoder: Geocoder,
        target: InputTarget<V>,
        lookup: F,
        options: AutocompleteOptions,
    ) -> Option<Self>
    where
        F: FnOnce(&str) -> Option<V>,
    {
        target
            .resolve(lookup)
            .map(|view| Self::attach(geocoder, view, options))
    }

    /// Bind to an already-resolved view
    pub fn attach(geocoder: Geocoder, mut view: V, options: AutocompleteOptions) -> Self {
        view.configure_input(MARKER_CLASS, options.max_input_len);

        Self {
            geocoder,
            view: Mutex::new(view),
            options,
            listeners: EventListeners::new(),
            seq: AtomicU64::new(0),
            current: Mutex::new(Vec::new()),
        }
    }

    /// Handle one (already debounced) query from the host widget
    ///
    /// Never returns an error: a failed fetch is logged and the controller
    /// goes back to idle.
    pub async fn handle_input(&self, text: &str) {
        if text.chars().count() < self.options.min_query_len {
            // Anything still in flight is stale once the query drops below
            // the minimum length, so this branch owns the busy visual now.
            self.seq.fetch_add(1, Ordering::SeqCst);
            self.current.lock().unwrap().clear();
            let mut view = self.view.lock().unwrap();
            view.show(&[]);
            view.set_busy(false);
            return;
        }

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.lock().unwrap().set_busy(true);

        match self.geocoder.geocode(text).await {
            Ok(collection) => self.apply(seq, collection.features),
            Err(e) => {
                error!("Geocoding error: {}", e);
                // A newer cycle owns the busy visual once this one is stale.
                if self.is_current(seq) {
                    self.view.lock().unwrap().set_busy(false);
                }
            }
        }
    }

    /// Show a completed fetch, unless a newer one has started since
    fn apply(&self, seq: u64, features: Vec<Feature>) {
        if !self.is_current(seq) {
            debug!("dropping stale geocoding response");
            return;
        }

        let rows: Vec<SuggestionRow> = features.iter().map(SuggestionRow::from_feature).collect();
        *self.current.lock().unwrap() = features;

        let mut view = self.view.lock().unwrap();
        if rows.is_empty() {
            view.show_empty(&self.options.empty_message);
        } else {
            view.show(&rows);
        }
        view.set_busy(false);
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.seq.load(Ordering::SeqCst)
    }

    /// The user picked the candidate at `index`: clear the input and emit
    /// `select` with the full feature
    pub fn select(&self, index: usize) {
        let feature = self.current.lock().unwrap().get(index).cloned();
        match feature {
            Some(feature) => {
                self.view.lock().unwrap().clear_input();
                self.listeners.emit_select(&feature);
            }
            None => debug!("select index {} out of range", index),
        }
    }

    /// The user hovered the candidate at `index`: emit `hover` with the
    /// full feature
    pub fn hover(&self, index: usize) {
        let feature = self.current.lock().unwrap().get(index).cloned();
        match feature {
            Some(feature) => self.listeners.emit_hover(&feature),
            None => debug!("hover index {} out of range", index),
        }
    }

    /// Register a `select` observer
    pub fn on_select<F: Fn(&Feature) + Send + Sync + 'static>(&self, callback: F) {
        self.listeners.on_select(callback);
    }

    /// Register a `hover` observer
    pub fn on_hover<F: Fn(&Feature) + Send + Sync + 'static>(&self, callback: F) {
        self.listeners.on_hover(callback);
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    /// Mutable access for the parameter setters; changes take effect on the
    /// next query
    pub fn geocoder_mut(&mut self) -> &mut Geocoder {
        &mut self.geocoder
    }

    /// Debounce interval the host widget should apply
    pub fn debounce_wait(&self) -> Duration {
        self.options.debounce_wait
    }

    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }
}
