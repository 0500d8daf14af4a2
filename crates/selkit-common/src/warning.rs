//! Selector warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used when a selector is accepted as-is even though it does not look like
//! valid CSS (for example an unknown combinator token).

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set, recovering it if a previous holder panicked.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Record `message` for `component`. Returns `true` the first time a
/// given pair is seen.
fn record(component: &str, message: &str) -> bool {
    warned()
        .get_or_insert_with(HashSet::new)
        .insert(format!("[{component}] {message}"))
}

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "unknown combinator token '||'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        let line = format!("[selkit {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Number of distinct warnings emitted since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Clear all recorded warnings so they can be reported again.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
