//! Search-input debouncing.
//!
//! Re-filtering on every keystroke rescans the whole collection; the
//! debouncer holds the query until input has been quiet for a full
//! window, then releases it exactly once. The final keystroke always
//! wins — an earlier query that never settled is simply overwritten.
//!
//! # Time Model
//! Timestamps are milliseconds relative to an epoch the caller defines;
//! the debouncer keeps no clock of its own. Interactive front ends feed
//! it wall-clock ticks, tests feed it literals, and non-interactive
//! embeddings skip it entirely and call
//! [`SessionFilter::apply`](super::SessionFilter::apply) directly.

/// Default quiescence window (ms).
pub const DEFAULT_DEBOUNCE_MS: i64 = 300;

/// Quiescence-window debouncer for free-text queries.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: i64,
    pending: Option<(String, i64)>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiescence window.
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    /// Records a keystroke: the new query replaces any pending one and
    /// restarts the window.
    pub fn input(&mut self, text: impl Into<String>, now_ms: i64) {
        self.pending = Some((text.into(), now_ms));
    }

    /// Releases the pending query if input has been quiet for a full
    /// window. Each settled query is returned exactly once.
    pub fn poll(&mut self, now_ms: i64) -> Option<String> {
        let settled = matches!(&self.pending, Some((_, at)) if now_ms - at >= self.window_ms);
        if settled {
            self.pending.take().map(|(text, _)| text)
        } else {
            None
        }
    }

    /// Whether no query is waiting to settle.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
