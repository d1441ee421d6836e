//! Error types for project transforms.

use thiserror::Error;

/// Failure of a single transform.
///
/// A failed transform leaves the project partially mutated; callers must
/// discard the model rather than resume.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// A `ProjectTypeGuids` token is not a well-formed GUID.
    #[error("invalid project type GUID '{token}': {source}")]
    InvalidProjectTypeGuid {
        /// The offending token, trimmed.
        token: String,
        #[source]
        source: uuid::Error,
    },
}

/// Failure of a pipeline run, tagged with the transform that stopped it.
#[derive(Debug, Error)]
#[error("transform '{transform}' failed: {source}")]
pub struct PipelineError {
    /// Name of the failing transform.
    pub transform: &'static str,
    #[source]
    pub source: TransformError,
}

pub type Result<T> = std::result::Result<T, TransformError>;
