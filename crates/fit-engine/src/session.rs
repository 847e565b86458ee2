//! Long-lived wrapper around the engine: size memoization and the external
//! mutation-signal pump.

use crossbeam_channel::Receiver;
use fit_geom::Size;
use tracing::debug;

use crate::{
    adapter::LayoutAdapter,
    config::FitOptions,
    diagnostics::PASS_COUNTERS,
    engine::{PassOutcome, PlacementEngine},
    error::Result,
};

/// Result of a guarded pass.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Natural size unchanged since the last pass; nothing was measured or
    /// written.
    Unchanged,
    /// A real pass ran.
    Ran(PassOutcome),
}

/// Owns an adapter plus options and runs guarded placement passes.
///
/// Applying a placement mutates the target, which feeds the host's mutation
/// subscription straight back into [`notify`](FitSession::notify). The
/// natural-size memoization makes that loop terminate: a pass only measures
/// and writes when the target's content size actually changed, so repeated
/// notifications are idempotent and the loop reaches a fixed point after at
/// most one real pass per genuine size change.
pub struct FitSession<A: LayoutAdapter> {
    adapter: A,
    options: FitOptions,
    last_size: Option<Size>,
    signals: Option<Receiver<()>>,
}

impl<A: LayoutAdapter> FitSession<A> {
    /// Session over `adapter` with `options`.
    pub fn new(adapter: A, options: FitOptions) -> Self {
        FitSession {
            adapter,
            options,
            last_size: None,
            signals: None,
        }
    }

    /// Attach a mutation-signal channel for [`pump`](FitSession::pump).
    ///
    /// The sending half belongs to the host's change-notification glue; the
    /// only delivery guarantee the session relies on is at-least-once after
    /// a relevant mutation.
    pub fn with_signals(mut self, signals: Receiver<()>) -> Self {
        self.signals = Some(signals);
        self
    }

    /// The wrapped adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the wrapped adapter.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Options the session was built with.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// At-least-once notification entry point: compare the target's natural
    /// size against the last pass and run a full pass only on change.
    pub fn notify(&mut self) -> Result<SessionOutcome> {
        let natural = self.adapter.natural_size()?;
        if self.last_size == Some(natural) {
            debug!(
                "natural size unchanged ({:.1}x{:.1}); pass skipped",
                natural.w, natural.h
            );
            PASS_COUNTERS.record_skip();
            return Ok(SessionOutcome::Unchanged);
        }
        self.last_size = Some(natural);

        let outcome = PlacementEngine::new(&mut self.adapter, &self.options).execute()?;
        PASS_COUNTERS.record_pass();
        Ok(SessionOutcome::Ran(outcome))
    }

    /// Drain pending mutation signals, running one guarded pass per signal.
    /// Returns the number of passes that actually measured and wrote.
    pub fn pump(&mut self) -> Result<u32> {
        let Some(signals) = self.signals.clone() else {
            return Ok(0);
        };
        let mut ran = 0u32;
        while signals.try_recv().is_ok() {
            if matches!(self.notify()?, SessionOutcome::Ran(_)) {
                ran += 1;
            }
        }
        Ok(ran)
    }
}
