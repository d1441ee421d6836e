//! Property simplification.
//!
//! Resolves the canonical project name, detects WPF projects from their
//! project-type GUIDs, and strips every property except the legacy
//! source-control bindings from all property groups.

use std::path::Path;

use tracing::{debug, trace};
use uuid::{Uuid, uuid};

use projconv_model::well_known::{
    ASSEMBLY_NAME, PROJECT_NAME, PROJECT_TYPE_GUIDS, is_source_control_property,
};
use projconv_model::{Project, PropertyGroup};

use crate::error::{Result, TransformError};
use crate::overrides::resolve_global_overrides;
use crate::transformation::Transformation;

/// Project-type GUID marking a WPF application or library.
pub const WPF_PROJECT_TYPE_GUID: Uuid = uuid!("60DC8134-EBA5-43B8-BCC9-BB4BC16C2548");

/// Name resolution and property stripping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertySimplification;

impl PropertySimplification {
    pub fn new() -> Self {
        Self
    }
}

impl Transformation for PropertySimplification {
    fn name(&self) -> &'static str {
        "property-simplification"
    }

    fn transform(&self, project: &mut Project) -> Result<()> {
        let fallback_name = fallback_project_name(project);
        let overrides = resolve_global_overrides(project.unconditional_groups());

        if project.project_name.is_empty() {
            let (name, source) = if let Some(name) = overrides.get(PROJECT_NAME) {
                (name.clone(), PROJECT_NAME)
            } else if let Some(name) = overrides.get(ASSEMBLY_NAME) {
                (name.clone(), ASSEMBLY_NAME)
            } else {
                (fallback_name, "file name")
            };
            debug!(project_name = %name, source, "resolved project name");
            project.project_name = name;
        }

        for (index, group) in project.property_groups.iter_mut().enumerate() {
            let removed = simplify_group(group, &mut project.is_wpf)?;
            debug!(
                group = index,
                removed,
                retained = group.len(),
                "simplified property group"
            );
        }

        Ok(())
    }
}

/// File name of the descriptor without its extension, or the current
/// project name when the path is absent or yields an empty name.
///
/// This is not the full MSBuild name inference; it trades fidelity for
/// predictable behavior on the rare files that have no usable name.
pub fn fallback_project_name(project: &Project) -> String {
    let from_path = project
        .file_path
        .as_deref()
        .and_then(Path::file_name)
        .map(|name| file_name_without_extension(&name.to_string_lossy()).to_string())
        .filter(|name| !name.is_empty());

    from_path.unwrap_or_else(|| project.project_name.clone())
}

/// Strip everything after the last `.`; a leading-dot name such as
/// `.csproj` yields the empty string.
fn file_name_without_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) => &file_name[..index],
        None => file_name,
    }
}

/// Parse a `;`-separated list of project-type GUIDs.
///
/// Tokens are trimmed and empty tokens skipped. The first malformed token
/// fails the whole list.
pub fn parse_project_type_guids(value: &str) -> Result<Vec<Uuid>> {
    value
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Uuid::parse_str(token).map_err(|source| TransformError::InvalidProjectTypeGuid {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Classify every property in `group`, then keep only the source-control
/// bindings. Returns the number of removed properties.
///
/// Classification finishes before anything is removed, so a malformed GUID
/// list leaves the group untouched.
fn simplify_group(group: &mut PropertyGroup, is_wpf: &mut bool) -> Result<usize> {
    for property in &group.properties {
        if property.name == PROJECT_TYPE_GUIDS
            && parse_project_type_guids(&property.value)?.contains(&WPF_PROJECT_TYPE_GUID)
        {
            *is_wpf = true;
        }
    }

    let before = group.len();
    group.properties.retain(|property| {
        let keep = is_source_control_property(&property.name);
        if !keep {
            trace!(property = %property.name, "removing property");
        }
        keep
    });
    Ok(before - group.len())
}
