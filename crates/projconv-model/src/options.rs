//! Configuration options for project conversion.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where converted descriptors are written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WriteMode {
    /// Overwrite the source descriptor.
    #[default]
    InPlace,
    /// Write to the given directory, keeping the source file name.
    OutputDir(PathBuf),
    /// Transform and report only; nothing is written.
    DryRun,
}

/// Options controlling a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Destination of converted descriptors.
    pub write_mode: WriteMode,

    /// Keep a `.old` copy of the source when overwriting in place.
    pub backup: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            write_mode: WriteMode::InPlace,
            backup: true,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_backup(mut self, enable: bool) -> Self {
        self.backup = enable;
        self
    }

    /// True when the run must not touch the file system.
    pub fn is_dry_run(&self) -> bool {
        matches!(self.write_mode, WriteMode::DryRun)
    }
}
