//! # Project Scaffolding
//!
//! Writes and patches the consumer project's configuration files.
//!
//! | Step | Files |
//! |------|-------|
//! | NativeWind setup | `tailwind.config.js`, `global.css`, `metro.config.js`, `babel.config.js`, `app.json` |
//! | Initial files | `lib/utils.ts`, `lib/ThemeContext.tsx`, global stylesheet import in the entry point |
//! | Preset | `nativecn-preset.js`, `tailwind.config.js` presets |
//! | Dependencies | package manager invocation |
//!
//! Every step reports a [`FileChange`] per file so the CLI can print what
//! happened. Existing user files are patched or skipped, never clobbered
//! unless the file lacks the NativeWind wiring entirely (`babel.config.js`).

mod contents;
mod initial;
mod nativewind;
mod packages;
mod preset;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub use initial::{create_initial_files, css_import_path};
pub use nativewind::{ensure_metro_bundler, patch_metro_config, setup_nativewind};
pub use packages::{install, plan_install, InstallPlan};
pub use preset::{generate_preset, patch_presets, PresetReport, PRESET_FILE};

/// What happened to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Created,
    Updated,
    Skipped,
}

/// A file touched (or deliberately left alone) by a scaffolding step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// Path relative to the project root
    pub path: String,
    pub action: Action,
    /// Why the file was skipped, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FileChange {
    pub fn created(path: &str) -> Self {
        Self {
            path: path.to_string(),
            action: Action::Created,
            reason: None,
        }
    }

    pub fn updated(path: &str) -> Self {
        Self {
            path: path.to_string(),
            action: Action::Updated,
            reason: None,
        }
    }

    pub fn skipped(path: &str, reason: &str) -> Self {
        Self {
            path: path.to_string(),
            action: Action::Skipped,
            reason: Some(reason.to_string()),
        }
    }

    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        match self.action {
            Action::Created => format!("Created {}", self.path),
            Action::Updated => format!("Updated {}", self.path),
            Action::Skipped => match &self.reason {
                Some(reason) => format!("{} {}, skipping", self.path, reason),
                None => format!("{} skipped", self.path),
            },
        }
    }
}

/// Writes `content` to `root/rel`, creating parent directories
fn write_file(root: &Path, rel: &str, content: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Creates `root/rel` unless it already exists
fn write_new(root: &Path, rel: &str, content: &str) -> Result<FileChange> {
    if root.join(rel).exists() {
        return Ok(FileChange::skipped(rel, "already exists"));
    }
    write_file(root, rel, content)?;
    Ok(FileChange::created(rel))
}

fn read_file(root: &Path, rel: &str) -> Result<String> {
    let path = root.join(rel);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}
