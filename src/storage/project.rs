//! Consumer project detection
//!
//! A project is the React Native application nativecn installs into. It is
//! identified by its `package.json`; everything else (package manager,
//! Expo, existing theme provider, entry point) is detected from files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("No package.json found. Please run this command in a React Native project.")]
    MissingPackageJson,

    #[error("This does not appear to be a React Native project.")]
    NotReactNative,

    #[error("Invalid package.json: {0}")]
    InvalidPackageJson(String),
}

/// Directories searched for an existing theme provider
const THEME_DIRS: &[&str] = &[
    "src/theme",
    "app/theme",
    "lib/theme",
    "context/theme",
    "hooks/theme",
];

/// App entry points in lookup order (Expo Router layouts first)
const ENTRY_POINTS: &[&str] = &[
    "app/_layout.tsx",
    "app/_layout.jsx",
    "app/_layout.js",
    "App.tsx",
    "App.jsx",
    "App.js",
    "app/index.tsx",
    "app/index.jsx",
    "app/index.js",
    "src/App.tsx",
    "src/App.jsx",
    "src/App.js",
];

/// JavaScript package manager used by the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Subcommand that adds dependencies
    pub fn add_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => "add",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// A consumer project
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    package: Option<Value>,
}

impl Project {
    /// Opens the project at `root`, reading `package.json` if present
    pub fn at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let package_path = root.join("package.json");

        let package = if package_path.is_file() {
            let content = fs::read_to_string(&package_path).with_context(|| {
                format!("Failed to read package.json: {}", package_path.display())
            })?;
            let value: Value = serde_json::from_str(&content)
                .map_err(|e| ProjectError::InvalidPackageJson(e.to_string()))?;
            Some(value)
        } else {
            None
        };

        Ok(Self { root, package })
    }

    /// Opens the project at `root` and checks it is a React Native app
    pub fn open_react_native(root: impl Into<PathBuf>) -> Result<Self> {
        let project = Self::at(root)?;

        if project.package.is_none() {
            return Err(ProjectError::MissingPackageJson.into());
        }
        if !project.has_package("react-native") {
            return Err(ProjectError::NotReactNative.into());
        }

        Ok(project)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if a `package.json` was found
    pub fn has_package_json(&self) -> bool {
        self.package.is_some()
    }

    /// Returns true if the package is a dependency or dev dependency
    pub fn has_package(&self, name: &str) -> bool {
        let package = match &self.package {
            Some(package) => package,
            None => return false,
        };

        ["dependencies", "devDependencies"].iter().any(|section| {
            package
                .get(section)
                .and_then(|deps| deps.get(name))
                .is_some()
        })
    }

    /// Returns true for Expo-managed projects
    pub fn is_expo(&self) -> bool {
        self.has_package("expo")
    }

    /// Returns the subset of `packages` not declared in `package.json`
    ///
    /// Version suffixes (`nativewind@^4.1.0`) are ignored when checking.
    pub fn missing_packages<'a>(&self, packages: &'a [String]) -> Vec<&'a str> {
        packages
            .iter()
            .map(String::as_str)
            .filter(|spec| !self.has_package(package_name(spec)))
            .collect()
    }

    /// Detects the package manager from lock files
    pub fn package_manager(&self) -> PackageManager {
        if self.root.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else if self.root.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else if self.root.join("bun.lockb").exists() || self.root.join("bun.lock").exists() {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// Looks for an existing theme provider
    ///
    /// Returns the import path (relative to the root, without extension) of
    /// the first file in a well-known theme directory whose name mentions
    /// "theme".
    pub fn detect_theme_provider(&self) -> Result<Option<String>> {
        for dir in THEME_DIRS {
            let full_path = self.root.join(dir);
            if !full_path.is_dir() {
                continue;
            }

            let mut files: Vec<String> = fs::read_dir(&full_path)
                .with_context(|| format!("Failed to read directory: {}", full_path.display()))?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect();
            files.sort();

            if let Some(file) = files.iter().find(|f| f.to_lowercase().contains("theme")) {
                return Ok(Some(format!("{}/{}", dir, strip_script_extension(file))));
            }
        }

        Ok(None)
    }

    /// Returns the first app entry point that exists, relative to the root
    pub fn entry_point(&self) -> Option<&'static str> {
        ENTRY_POINTS
            .iter()
            .copied()
            .find(|path| self.root.join(path).is_file())
    }
}

/// Strips a version or tag from a package spec: `@scope/pkg@1.0` -> `@scope/pkg`
fn package_name(spec: &str) -> &str {
    let search_from = if spec.starts_with('@') { 1 } else { 0 };
    match spec[search_from..].find('@') {
        Some(idx) => &spec[..idx + search_from],
        None => spec,
    }
}

fn strip_script_extension(file: &str) -> &str {
    for ext in [".tsx", ".jsx", ".ts", ".js"] {
        if let Some(stem) = file.strip_suffix(ext) {
            return stem;
        }
    }
    file
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_with(package_json: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), package_json).unwrap();
        dir
    }

    #[test]
    fn open_without_package_json_fails() {
        let dir = TempDir::new().unwrap();
        let err = Project::open_react_native(dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProjectError>(),
            Some(ProjectError::MissingPackageJson)
        ));
    }

    #[test]
    fn open_non_react_native_fails() {
        let dir = project_with(r#"{ "dependencies": { "react": "18.0.0" } }"#);
        let err = Project::open_react_native(dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProjectError>(),
            Some(ProjectError::NotReactNative)
        ));
    }

    #[test]
    fn invalid_package_json_fails() {
        let dir = project_with("{ not json");
        assert!(Project::at(dir.path()).is_err());
    }

    #[test]
    fn detects_packages_in_both_sections() {
        let dir = project_with(
            r#"{ "dependencies": { "react-native": "0.76.0", "expo": "52.0.0" },
                 "devDependencies": { "nativewind": "4.1.0" } }"#,
        );
        let project = Project::open_react_native(dir.path()).unwrap();

        assert!(project.has_package("nativewind"));
        assert!(project.is_expo());
        assert!(!project.has_package("clsx"));
    }

    #[test]
    fn missing_packages_ignores_versions() {
        let dir = project_with(r#"{ "dependencies": { "react-native": "0.76.0", "clsx": "2.0.0" } }"#);
        let project = Project::at(dir.path()).unwrap();
        let wanted = vec![
            "clsx".to_string(),
            "nativewind@^4.1.0".to_string(),
            "@react-native/metro-config@0.76".to_string(),
        ];

        assert_eq!(
            project.missing_packages(&wanted),
            vec!["nativewind@^4.1.0", "@react-native/metro-config@0.76"]
        );
    }

    #[test]
    fn package_name_handles_scopes() {
        assert_eq!(package_name("clsx"), "clsx");
        assert_eq!(package_name("nativewind@^4.1.0"), "nativewind");
        assert_eq!(package_name("@scope/pkg"), "@scope/pkg");
        assert_eq!(package_name("@scope/pkg@1.2.3"), "@scope/pkg");
    }

    #[test]
    fn package_manager_detection() {
        let dir = project_with("{}");
        let project = Project::at(dir.path()).unwrap();
        assert_eq!(project.package_manager(), PackageManager::Npm);

        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(project.package_manager(), PackageManager::Pnpm);

        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(project.package_manager(), PackageManager::Yarn);
        assert_eq!(PackageManager::Yarn.add_subcommand(), "add");
        assert_eq!(PackageManager::Npm.add_subcommand(), "install");
    }

    #[test]
    fn detects_theme_provider() {
        let dir = project_with("{}");
        let theme_dir = dir.path().join("lib/theme");
        fs::create_dir_all(&theme_dir).unwrap();
        fs::write(theme_dir.join("colors.ts"), "").unwrap();
        fs::write(theme_dir.join("ThemeProvider.tsx"), "").unwrap();

        let project = Project::at(dir.path()).unwrap();
        assert_eq!(
            project.detect_theme_provider().unwrap(),
            Some("lib/theme/ThemeProvider".to_string())
        );
    }

    #[test]
    fn no_theme_provider() {
        let dir = project_with("{}");
        fs::create_dir_all(dir.path().join("src/theme")).unwrap();
        fs::write(dir.path().join("src/theme/colors.ts"), "").unwrap();

        let project = Project::at(dir.path()).unwrap();
        assert_eq!(project.detect_theme_provider().unwrap(), None);
    }

    #[test]
    fn entry_point_prefers_router_layout() {
        let dir = project_with("{}");
        fs::write(dir.path().join("App.tsx"), "").unwrap();
        let project = Project::at(dir.path()).unwrap();
        assert_eq!(project.entry_point(), Some("App.tsx"));

        fs::create_dir_all(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("app/_layout.tsx"), "").unwrap();
        assert_eq!(project.entry_point(), Some("app/_layout.tsx"));
    }
}
