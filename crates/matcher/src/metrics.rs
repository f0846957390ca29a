//! Search instrumentation hook.
//!
//! A single process-wide [`SearchMetrics`] recorder, unset by default.
//! [`Screener::search`](crate::Screener::search) reports to it after every
//! ranking pass.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for screening searches.
pub trait SearchMetrics: Send + Sync {
    /// Record the outcome of one search.
    ///
    /// `scanned` is the number of candidates handed to the engine, `hits` the
    /// number of results returned after threshold filtering and truncation.
    fn record_search(&self, scanned: usize, hits: usize, latency: Duration);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install (`Some`) or remove (`None`) the recorder shared by all screeners.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
