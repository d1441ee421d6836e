//! Project descriptor transforms.
//!
//! This crate provides the normalization core of the converter:
//!
//! - **transformation**: the one-method [`Transformation`] contract
//! - **overrides**: global-override resolution over unconditional property groups
//! - **property_simplification**: project-name resolution, WPF detection and
//!   property stripping
//! - **pipeline**: ordered, fail-fast application of a [`TransformationSet`]

pub mod error;
pub mod overrides;
pub mod pipeline;
pub mod property_simplification;
pub mod transformation;

pub use error::{PipelineError, Result, TransformError};
pub use overrides::{GlobalOverrides, has_empty_condition, resolve_global_overrides};
pub use pipeline::TransformationSet;
pub use property_simplification::{
    PropertySimplification, WPF_PROJECT_TYPE_GUID, fallback_project_name,
    parse_project_type_guids,
};
pub use transformation::Transformation;
