use thiserror::Error;

/// Errors surfaced by presentation-layer collaborators.
///
/// The placement decision itself always converges on some result; every
/// variant here originates in a [`LayoutAdapter`](crate::LayoutAdapter)
/// talking to its backend.
#[derive(Error, Debug)]
pub enum Error {
    /// The floating target disappeared mid-pass.
    #[error("target element detached")]
    TargetDetached,

    /// A geometry read failed in the presentation backend.
    #[error("geometry read failed: {0}")]
    Measure(String),

    /// A style write was rejected by the presentation backend.
    #[error("style write failed: {0}")]
    StyleWrite(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
