//! Advisory diagnostics and process-wide pass counters.
//!
//! Nothing here alters control flow: a pass that shrinks or clips still
//! succeeds. Hosts may surface diagnostics to developers but must not treat
//! them as failures.

use std::sync::atomic::{AtomicU64, Ordering};

use fit_geom::Axis;
use once_cell::sync::Lazy;

/// Advisory condition observed while resolving an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// The target had to shrink below its natural size to fit.
    DegradedFit {
        /// Axis that was shrunk.
        axis: Axis,
        /// Natural size along that axis.
        natural: f64,
        /// Size actually applied.
        size: f64,
    },
    /// Even the roomier side cannot hold the configured minimum size; the
    /// minimum is applied anyway and the result clips.
    BelowMinimum {
        /// Axis that was resolved.
        axis: Axis,
        /// Configured minimum size.
        min: f64,
        /// Available space on the chosen side.
        available: f64,
    },
}

/// Aggregate counters for placement passes.
#[derive(Default)]
pub(crate) struct PassCounters {
    passes: AtomicU64,
    skipped: AtomicU64,
    shrunk: AtomicU64,
    below_minimum: AtomicU64,
}

impl PassCounters {
    pub(crate) fn record_pass(&self) {
        self.passes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_diagnostic(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::DegradedFit { .. } => self.shrunk.fetch_add(1, Ordering::Relaxed),
            Diagnostic::BelowMinimum { .. } => self.below_minimum.fetch_add(1, Ordering::Relaxed),
        };
    }

    fn snapshot(&self) -> PassCountersSnapshot {
        PassCountersSnapshot {
            passes: self.passes.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            shrunk: self.shrunk.load(Ordering::Relaxed),
            below_minimum: self.below_minimum.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of pass statistics for inspection in tests or diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassCountersSnapshot {
    /// Passes that measured and wrote.
    pub passes: u64,
    /// Notifications skipped by the size memoization guard.
    pub skipped: u64,
    /// Axis resolutions that shrank the target.
    pub shrunk: u64,
    /// Axis resolutions forced below the available space by a minimum size.
    pub below_minimum: u64,
}

pub(crate) static PASS_COUNTERS: Lazy<PassCounters> = Lazy::new(PassCounters::default);

/// Current values of the process-wide pass counters.
pub fn counters_snapshot() -> PassCountersSnapshot {
    PASS_COUNTERS.snapshot()
}
