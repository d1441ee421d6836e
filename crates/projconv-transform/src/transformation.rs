//! The transform contract.

use projconv_model::Project;

use crate::error::Result;

/// One normalization step over a [`Project`].
///
/// Implementations mutate the project in place and must be idempotent when
/// re-applied to their own output. They keep no state between calls.
pub trait Transformation {
    /// Stable name used in logs and pipeline errors.
    fn name(&self) -> &'static str;

    /// Apply the normalization.
    fn transform(&self, project: &mut Project) -> Result<()>;
}
