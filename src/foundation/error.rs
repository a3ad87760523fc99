/// Convenience result type used across the crate.
pub type SplitResult<T> = Result<T, SplitError>;

/// Top-level error taxonomy used by the display APIs.
///
/// Every failure is either fatal to `open` ([`SplitError::Construction`])
/// or skips exactly one unit of work (one render cycle for
/// [`SplitError::Filter`], one event for [`SplitError::Remap`]). There are
/// no retries anywhere.
#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    /// Failure while opening the display: engine not found, surface or
    /// renderer creation failed. Always triggers rollback of the
    /// already-constructed regions.
    #[error("construction error: {0}")]
    Construction(String),

    /// The splitting engine declined to produce outputs for one frame.
    /// The cycle is skipped for all regions; the next frame proceeds
    /// normally.
    #[error("filter error: {0}")]
    Filter(String),

    /// A pointer event could not be mapped into composite space (it fell
    /// outside every output). The event is dropped.
    #[error("remap error: {0}")]
    Remap(String),

    /// Unsupported control query or display configuration.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Wrapped lower-level error from a collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SplitError {
    /// Build a [`SplitError::Construction`] value.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Build a [`SplitError::Filter`] value.
    pub fn filter(msg: impl Into<String>) -> Self {
        Self::Filter(msg.into())
    }

    /// Build a [`SplitError::Remap`] value.
    pub fn remap(msg: impl Into<String>) -> Self {
        Self::Remap(msg.into())
    }

    /// Build a [`SplitError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
