//! Project file discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use projconv_model::well_known::PROJECT_FILE_EXTENSIONS;

/// Build output and tooling folders never hold source descriptors.
const SKIPPED_DIRECTORIES: [&str; 4] = ["bin", "obj", "node_modules", "packages"];

/// Expand `inputs` into project descriptor paths.
///
/// Files are taken as given. Directories are searched recursively for
/// descriptors; hidden and build-output folders are skipped. Results keep
/// input order, each directory's matches sorted, duplicates dropped.
pub fn discover_projects(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut projects = Vec::new();
    for input in inputs {
        if input.is_file() {
            projects.push(input.clone());
        } else if input.is_dir() {
            let mut found = Vec::new();
            collect_projects(input, &mut found)?;
            found.sort();
            debug!(dir = %input.display(), count = found.len(), "discovered projects");
            projects.extend(found);
        } else {
            bail!("path not found: {}", input.display());
        }
    }
    let mut seen = BTreeSet::new();
    projects.retain(|path| seen.insert(path.clone()));
    Ok(projects)
}

fn collect_projects(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read directory {}", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            if !is_skipped_directory(&path) {
                collect_projects(&path, found)?;
            }
        } else if is_project_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_skipped_directory(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| {
            name.starts_with('.')
                || SKIPPED_DIRECTORIES
                    .iter()
                    .any(|skipped| name.eq_ignore_ascii_case(skipped))
        })
        .unwrap_or(false)
}

/// True for `.csproj`, `.vbproj` and `.fsproj` files (case-insensitive).
pub fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PROJECT_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_project_extensions() {
        assert!(is_project_file(Path::new("a/App.csproj")));
        assert!(is_project_file(Path::new("a/App.VBPROJ")));
        assert!(is_project_file(Path::new("App.fsproj")));
        assert!(!is_project_file(Path::new("App.sln")));
        assert!(!is_project_file(Path::new("csproj")));
    }

    #[test]
    fn skips_hidden_and_build_directories() {
        assert!(is_skipped_directory(Path::new("repo/.git")));
        assert!(is_skipped_directory(Path::new("repo/Obj")));
        assert!(!is_skipped_directory(Path::new("repo/src")));
    }
}
