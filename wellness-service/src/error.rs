use thiserror::Error;

use crate::services::providers::ProviderError;
use crate::services::shaper::ParseError;

/// Failures of a single companion request.
///
/// `EmptyInput` is reported to the caller as-is; the other two are turned
/// into fallback responses by the handlers.
#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("{0}")]
    EmptyInput(&'static str),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
