use std::path::PathBuf;

/// How one project fared in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatus {
    /// Transformed and written.
    Converted,
    /// Transformed only.
    DryRun,
    /// Loading, transforming or writing failed; nothing was written.
    Failed(String),
}

impl ProjectStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct ProjectOutcome {
    pub path: PathBuf,
    pub project_name: String,
    pub is_wpf: bool,
    pub retained_properties: usize,
    pub output: Option<PathBuf>,
    pub status: ProjectStatus,
}

impl ProjectOutcome {
    pub fn failed(path: PathBuf, message: String) -> Self {
        Self {
            path,
            project_name: String::new(),
            is_wpf: false,
            retained_properties: 0,
            output: None,
            status: ProjectStatus::Failed(message),
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchResult {
    pub outcomes: Vec<ProjectOutcome>,
}

impl BatchResult {
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_failed()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}
