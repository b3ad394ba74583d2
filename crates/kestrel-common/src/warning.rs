//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication so a file with the same malformed selector on many
//! lines only reports it once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning and report whether it is new.
///
/// Returns `true` the first time a given `(component, message)` pair is seen.
#[must_use]
pub fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about skipped input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("rank", "skipping 'a)': unexpected ')' at byte 1");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[Kestrel {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before processing a new input file)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
