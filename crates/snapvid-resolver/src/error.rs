//! Resolver error types.

use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Failures from the resolution call.
///
/// Every variant is rendered verbatim to the user at the page boundary, so
/// the display strings are the user-facing messages.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Network failure or an API-level error. Carries the upstream message
    /// when one was available.
    #[error("{0}")]
    ResolutionFailed(String),

    /// The API returned a 2xx body that was not a JSON object.
    #[error("Invalid response format from API")]
    InvalidResponseShape,
}
