//! Component template catalog
//!
//! A catalog is a directory with one subdirectory per component template
//! and an optional `registry.toml` describing them:
//!
//! ```toml
//! [[component]]
//! name = "alert-dialog"
//! description = "Modal confirmation dialog"
//! dependencies = ["button"]
//! packages = ["clsx"]
//! ```
//!
//! The built-in catalog is compiled into the binary (see [`super::builtin`]).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;

use super::builtin;
use crate::domain::{ComponentName, DependencyGraph};

/// Registry file name inside a catalog directory
pub const REGISTRY_FILE: &str = "registry.toml";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Template directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    #[error("Component template '{0}' not found")]
    UnknownTemplate(String),
}

#[derive(Debug, Default, Deserialize)]
struct Registry {
    #[serde(default)]
    component: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    name: ComponentName,
    #[serde(default)]
    description: String,
    #[serde(default)]
    dependencies: Vec<ComponentName>,
    #[serde(default)]
    packages: Vec<String>,
}

impl Registry {
    fn parse(content: &str) -> Result<Self, CatalogError> {
        toml::from_str(content).map_err(|e| CatalogError::InvalidRegistry(e.to_string()))
    }

    fn take(&mut self, name: &ComponentName) -> Option<RegistryEntry> {
        let idx = self.component.iter().position(|e| &e.name == name)?;
        Some(self.component.remove(idx))
    }
}

/// A single file of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template directory
    pub path: PathBuf,
    pub contents: String,
}

/// A component template
#[derive(Debug, Clone)]
pub struct Template {
    pub name: ComponentName,
    pub description: String,
    /// Other components copied along with this one
    pub dependencies: Vec<ComponentName>,
    /// npm packages the component imports
    pub packages: Vec<String>,
    pub files: Vec<TemplateFile>,
}

impl Template {
    fn from_entry(name: ComponentName, entry: Option<RegistryEntry>, files: Vec<TemplateFile>) -> Self {
        let (description, dependencies, packages) = match entry {
            Some(e) => (e.description, e.dependencies, e.packages),
            None => (String::new(), vec![], vec![]),
        };

        Self {
            name,
            description,
            dependencies,
            packages,
            files,
        }
    }
}

/// Where a catalog was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    Directory(PathBuf),
}

/// A loaded set of templates
#[derive(Debug)]
pub struct Catalog {
    source: CatalogSource,
    templates: BTreeMap<ComponentName, Template>,
    /// Registry entries or directories that were ignored while loading
    notes: Vec<String>,
}

impl Catalog {
    /// Loads the catalog from `dir`, or the built-in catalog when `None`
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }

    /// Loads the catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        let mut registry = Registry::parse(builtin::REGISTRY)?;
        let mut grouped: BTreeMap<ComponentName, Vec<TemplateFile>> = BTreeMap::new();

        for &(component, path, contents) in builtin::FILES {
            let name: ComponentName = component
                .parse()
                .with_context(|| format!("Invalid built-in template name: {}", component))?;
            grouped.entry(name).or_default().push(TemplateFile {
                path: PathBuf::from(path),
                contents: contents.to_string(),
            });
        }

        let templates = grouped
            .into_iter()
            .map(|(name, files)| {
                let entry = registry.take(&name);
                (name.clone(), Template::from_entry(name, entry, files))
            })
            .collect();

        let notes = unmatched_notes(registry);

        Ok(Self {
            source: CatalogSource::Builtin,
            templates,
            notes,
        })
    }

    /// Loads a catalog from a directory on disk
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::NotFound(dir.to_path_buf()).into());
        }

        let registry_path = dir.join(REGISTRY_FILE);
        let mut registry = if registry_path.is_file() {
            let content = fs::read_to_string(&registry_path)
                .with_context(|| format!("Failed to read registry: {}", registry_path.display()))?;
            Registry::parse(&content)?
        } else {
            Registry::default()
        };

        let mut entries: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("Failed to read template directory: {}", dir.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        let mut templates = BTreeMap::new();
        let mut notes = vec![];

        for entry in entries {
            let dir_name = entry.file_name().to_string_lossy().to_string();
            let name: ComponentName = match dir_name.parse() {
                Ok(name) => name,
                Err(_) => {
                    notes.push(format!("Ignoring directory '{}': not a valid component name", dir_name));
                    continue;
                }
            };

            let files = read_template_files(&entry.path())?;
            let registry_entry = registry.take(&name);
            templates.insert(name.clone(), Template::from_entry(name, registry_entry, files));
        }

        notes.extend(unmatched_notes(registry));

        Ok(Self {
            source: CatalogSource::Directory(dir.to_path_buf()),
            templates,
            notes,
        })
    }

    /// Returns where this catalog came from
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Returns a template by name
    pub fn get(&self, name: &ComponentName) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Returns a template by name, or an error naming the missing template
    pub fn require(&self, name: &ComponentName) -> Result<&Template, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownTemplate(name.to_string()))
    }

    /// Iterates templates in name order
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// Returns the number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog has no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Notes about ignored registry entries and directories
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Builds the dependency graph of this catalog
    pub fn graph(&self) -> DependencyGraph {
        DependencyGraph::from_entries(
            self.templates
                .values()
                .map(|t| (&t.name, t.dependencies.as_slice())),
        )
    }
}

fn unmatched_notes(registry: Registry) -> Vec<String> {
    registry
        .component
        .into_iter()
        .map(|e| format!("Registry entry '{}' has no template directory", e.name))
        .collect()
}

/// Reads every file below a template directory, in path order
fn read_template_files(dir: &Path) -> Result<Vec<TemplateFile>> {
    let mut files = vec![];

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {}", path.display()))?;
        let relative = path.strip_prefix(dir).unwrap_or(path).to_path_buf();

        files.push(TemplateFile {
            path: relative,
            contents,
        });
    }

    Ok(files)
}
