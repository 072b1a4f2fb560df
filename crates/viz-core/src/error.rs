use thiserror::Error;

/// Failures the visualizations can run into. None of them are fatal to the
/// page: callers log and carry on with whatever is still drawable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VizError {
    #[error("rendering surface #{0} not found")]
    MissingSurface(String),
    #[error("2d context unavailable for #{0}")]
    ContextUnavailable(String),
    #[error("unknown dataset profile {0:?}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, VizError>;
