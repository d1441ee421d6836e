//! Ordered application of transforms to one project.
//!
//! # Example
//!
//! ```ignore
//! use projconv_transform::TransformationSet;
//!
//! let pipeline = TransformationSet::default_set();
//! pipeline.apply(&mut project)?;
//! ```

use std::fmt;

use tracing::{debug, debug_span};

use projconv_model::Project;

use crate::error::PipelineError;
use crate::property_simplification::PropertySimplification;
use crate::transformation::Transformation;

/// An ordered list of transforms, built once and applied to many projects.
#[derive(Default)]
pub struct TransformationSet {
    transforms: Vec<Box<dyn Transformation + Send + Sync>>,
}

impl TransformationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The transforms applied by a normal conversion, in order.
    pub fn default_set() -> Self {
        Self::new().with(PropertySimplification::new())
    }

    /// Append a transform, builder style.
    #[must_use]
    pub fn with<T>(mut self, transform: T) -> Self
    where
        T: Transformation + Send + Sync + 'static,
    {
        self.push(transform);
        self
    }

    /// Append a transform.
    pub fn push<T>(&mut self, transform: T)
    where
        T: Transformation + Send + Sync + 'static,
    {
        self.transforms.push(Box::new(transform));
    }

    /// Transform names in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Apply every transform in order, stopping at the first failure.
    ///
    /// On error the project is left partially transformed and must not be
    /// serialized.
    pub fn apply(&self, project: &mut Project) -> Result<(), PipelineError> {
        for transform in &self.transforms {
            let name = transform.name();
            let span = debug_span!("transform", transform = name);
            let _guard = span.enter();
            transform
                .transform(project)
                .map_err(|source| PipelineError {
                    transform: name,
                    source,
                })?;
            debug!("transform applied");
        }
        Ok(())
    }
}

impl fmt::Debug for TransformationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
