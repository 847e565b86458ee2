//! Collision-avoiding placement core for anchored overlays.
//!
//! Positions a floating target next to an anchor so it stays visible
//! against both the nearest scroll boundary and the document viewport:
//! measure how the anchor's box overflows each boundary, decide which end
//! of the main axis (and, orthogonally, the secondary axis) the target is
//! anchored to, and shrink it toward the roomier side when neither end
//! fits. The resolver always terminates with a placement; imperfect fits
//! surface as [`Diagnostic`]s, never as errors.
//!
//! All presentation-layer work — geometry reads, offset formatting, style
//! writes, subscription lifetime — goes through an injected
//! [`LayoutAdapter`]. [`PlacementEngine`] runs one unconditional pass;
//! [`FitSession`] adds the natural-size memoization that keeps the
//! mutate-notify-refit feedback loop finite.

mod adapter;
mod align;
mod config;
mod diagnostics;
mod engine;
mod error;
mod session;
mod shrink;


pub use adapter::{AnchorBox, AxisRole, FakeLayoutAdapter, FakeOp, LayoutAdapter};
pub use config::{FitOptions, MinSizeLookup, ScrollbarPolicy};
pub use diagnostics::{Diagnostic, PassCountersSnapshot, counters_snapshot};
pub use engine::{PassOutcome, Placement, PlacementEngine};
pub use error::{Error, Result};
pub use session::{FitSession, SessionOutcome};
pub use shrink::AxisPlacement;
