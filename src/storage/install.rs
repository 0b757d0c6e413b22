//! Copying component templates into a project

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::catalog::{Template, TemplateFile};
use super::transform::{self, TemplateContext};

/// Result of copying a single template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Files were written (paths relative to the project root)
    Copied(Vec<PathBuf>),
    /// The destination exists and overwriting was not requested
    AlreadyExists,
}

/// Install state of a component in a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallState {
    NotInstalled,
    /// Every template file is present and unchanged
    Installed,
    /// Installed, but files differ from what the template would produce
    Modified,
}

impl InstallState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallState::NotInstalled => "",
            InstallState::Installed => "installed",
            InstallState::Modified => "modified",
        }
    }
}

/// Copies templates into `<root>/<out_dir>/<component>/`
pub struct Installer {
    root: PathBuf,
    out_dir: PathBuf,
    context: TemplateContext,
}

impl Installer {
    pub fn new(root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, context: TemplateContext) -> Self {
        let root = root.into();
        let out_dir = out_dir.into();

        // Keep out_dir relative to the root where possible so imports can be rewritten
        let out_dir = if out_dir.is_absolute() {
            out_dir
                .strip_prefix(&root)
                .map(Path::to_path_buf)
                .unwrap_or(out_dir)
        } else {
            out_dir
        };

        Self {
            root,
            out_dir,
            context,
        }
    }

    /// Absolute path of the output directory
    pub fn out_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }

    /// Output directory as configured, relative to the project root when possible
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Absolute destination directory of a component
    pub fn destination(&self, template: &Template) -> PathBuf {
        self.out_path().join(template.name.as_str())
    }

    /// Returns true if the component directory already exists
    pub fn exists(&self, template: &Template) -> bool {
        self.destination(template).exists()
    }

    /// Renders a template file as it would be written
    fn render(&self, template: &Template, file: &TemplateFile) -> String {
        let mut file_dir = self.out_dir.join(template.name.as_str());
        if let Some(parent) = file.path.parent() {
            file_dir.push(parent);
        }
        transform::process(&file.contents, &self.context, &file_dir)
    }

    /// Copies a template, processing every file on the way
    pub fn copy(&self, template: &Template, overwrite: bool) -> Result<CopyOutcome> {
        let destination = self.destination(template);

        if destination.exists() && !overwrite {
            return Ok(CopyOutcome::AlreadyExists);
        }

        fs::create_dir_all(&destination).with_context(|| {
            format!("Failed to create component directory: {}", destination.display())
        })?;

        let mut written = vec![];
        for file in &template.files {
            let dest_path = destination.join(&file.path);
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            let content = self.render(template, file);
            fs::write(&dest_path, content)
                .with_context(|| format!("Failed to write {}", dest_path.display()))?;

            written.push(
                dest_path
                    .strip_prefix(&self.root)
                    .map(Path::to_path_buf)
                    .unwrap_or(dest_path),
            );
        }

        Ok(CopyOutcome::Copied(written))
    }

    /// Compares an installed component against the template
    pub fn state(&self, template: &Template) -> Result<InstallState> {
        let destination = self.destination(template);
        if !destination.is_dir() {
            return Ok(InstallState::NotInstalled);
        }

        for file in &template.files {
            let path = destination.join(&file.path);
            if !path.is_file() {
                return Ok(InstallState::Modified);
            }

            let on_disk = fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let expected = self.render(template, file);

            if blake3::hash(&on_disk) != blake3::hash(expected.as_bytes()) {
                return Ok(InstallState::Modified);
            }
        }

        Ok(InstallState::Installed)
    }
}
