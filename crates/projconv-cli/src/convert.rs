//! Project conversion: load, transform, write.
//!
//! Each project is converted independently. A failure is recorded on that
//! project's outcome and the batch moves on; a failed project is never
//! written.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use projconv_model::{ConversionOptions, Project, WriteMode};
use projconv_transform::TransformationSet;
use projconv_xml::{load_project, save_project};

use crate::types::{BatchResult, ProjectOutcome, ProjectStatus};

/// Load `path` and run it through `pipeline`.
pub fn transform_project(path: &Path, pipeline: &TransformationSet) -> Result<Project> {
    let mut project =
        load_project(path).with_context(|| format!("load {}", path.display()))?;
    pipeline
        .apply(&mut project)
        .with_context(|| format!("transform {}", path.display()))?;
    Ok(project)
}

/// Convert one project according to `options`.
pub fn convert_project(
    path: &Path,
    pipeline: &TransformationSet,
    options: &ConversionOptions,
) -> Result<ProjectOutcome> {
    let project = transform_project(path, pipeline)?;

    let (output, status) = match &options.write_mode {
        WriteMode::DryRun => (None, ProjectStatus::DryRun),
        WriteMode::InPlace => {
            if options.backup {
                let backup = backup_path(path);
                fs::copy(path, &backup)
                    .with_context(|| format!("back up {} to {}", path.display(), backup.display()))?;
            }
            save_project(&project, path)?;
            (Some(path.to_path_buf()), ProjectStatus::Converted)
        }
        WriteMode::OutputDir(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("{} has no file name", path.display()))?;
            let target = dir.join(file_name);
            save_project(&project, &target)?;
            (Some(target), ProjectStatus::Converted)
        }
    };

    Ok(ProjectOutcome {
        path: path.to_path_buf(),
        project_name: project.project_name.clone(),
        is_wpf: project.is_wpf,
        retained_properties: project.property_count(),
        output,
        status,
    })
}

/// Convert every project in `paths`, isolating failures per project.
pub fn convert_all(
    paths: &[PathBuf],
    pipeline: &TransformationSet,
    options: &ConversionOptions,
) -> BatchResult {
    let mut result = BatchResult::default();
    for path in paths {
        let span = info_span!("project", path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();
        let outcome = match convert_project(path, pipeline, options) {
            Ok(outcome) => {
                info!(
                    project_name = %outcome.project_name,
                    is_wpf = outcome.is_wpf,
                    retained = outcome.retained_properties,
                    duration_ms = start.elapsed().as_millis(),
                    "project converted"
                );
                outcome
            }
            Err(error) => {
                warn!(error = %format!("{error:#}"), "project conversion failed");
                ProjectOutcome::failed(path.clone(), format!("{error:#}"))
            }
        };
        result.outcomes.push(outcome);
    }
    info!(
        total = result.outcomes.len(),
        failed = result.failed_count(),
        "batch complete"
    );
    result
}

/// `App.csproj` becomes `App.csproj.old`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".old");
    PathBuf::from(name)
}
