//! Client-side bridge to the persistence gateway: debounced content saves,
//! fire-and-forget structural saves, and the sidebar layout preference.

use std::cell::RefCell;
use std::rc::Rc;

use common::Forest;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};

/// Content edits within this window collapse into a single save.
pub const DEBOUNCE_MS: u32 = 800;

const LAYOUT_KEY: &str = "editorLayout";

/// Collapses rapid forest snapshots into one deferred sink call.
///
/// Every `push` cancels the pending timer and schedules a new one carrying
/// the latest snapshot, so a burst of edits results in exactly one save with
/// the final state.
pub struct Debouncer {
    delay_ms: u32,
    sink: Rc<dyn Fn(Forest)>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32, sink: Rc<dyn Fn(Forest)>) -> Self {
        Self {
            delay_ms,
            sink,
            pending: Rc::default(),
        }
    }

    pub fn push(&self, forest: Forest) {
        let sink = self.sink.clone();
        let timeout = Timeout::new(self.delay_ms, move || sink(forest));
        // Dropping the previous Timeout clears it, resetting the window.
        *self.pending.borrow_mut() = Some(timeout);
    }
}

/// Saves the forest without waiting on the result. Gateway failures are
/// logged to the console; the caller keeps its in-memory forest.
pub fn save_in_background(forest: Forest) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = crate::api::save_snippets(&forest).await {
            web_sys::console::error_1(&format!("failed to save snippets: {err}").into());
        }
    });
}

/// Deletion goes through the gateway's overwrite path with the post-delete
/// forest computed client-side.
pub fn delete_in_background(id: String, forest: Forest) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = crate::api::delete_snippets(&id, &forest).await {
            web_sys::console::error_1(&format!("failed to delete snippet: {err}").into());
        }
    });
}

/// Sidebar width and open state, persisted immediately on every change under
/// its own storage key. Not debounced and independent of the snippet forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPrefs {
    pub width: u32,
    pub open: bool,
}

impl Default for LayoutPrefs {
    fn default() -> Self {
        Self {
            width: 300,
            open: true,
        }
    }
}

impl LayoutPrefs {
    pub fn load() -> Self {
        LocalStorage::get(LAYOUT_KEY).unwrap_or_default()
    }

    pub fn store(&self) {
        let _ = LocalStorage::set(LAYOUT_KEY, self);
    }
}
