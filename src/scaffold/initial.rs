//! Helper files created by `init`

use std::path::Path;

use anyhow::Result;

use super::contents;
use super::{read_file, write_file, write_new, FileChange};
use crate::domain::Styling;
use crate::storage::{root_prefix, Project};

const UTILS_FILE: &str = "lib/utils.ts";
const THEME_CONTEXT_FILE: &str = "lib/ThemeContext.tsx";

/// Creates the `cn` helper, the theme context and the stylesheet import
pub fn create_initial_files(
    project: &Project,
    styling: Styling,
    use_existing_theme: bool,
) -> Result<Vec<FileChange>> {
    let root = project.root();
    let mut changes = vec![write_new(root, UTILS_FILE, contents::UTILS)?];

    if styling == Styling::Nativewind {
        if let Some(entry) = project.entry_point() {
            changes.push(add_css_import(root, entry)?);
        }
    }

    if !use_existing_theme {
        changes.push(write_new(root, THEME_CONTEXT_FILE, contents::THEME_CONTEXT)?);
    }

    Ok(changes)
}

/// Import path of `global.css` as seen from an entry point
pub fn css_import_path(entry: &str) -> String {
    let dir = Path::new(entry).parent().unwrap_or_else(|| Path::new(""));
    let prefix = root_prefix(dir).unwrap_or_else(|| "./".to_string());
    format!("{}global.css", prefix)
}

fn add_css_import(root: &Path, entry: &str) -> Result<FileChange> {
    let import_path = css_import_path(entry);
    let content = read_file(root, entry)?;

    let already_imported = content.contains(&format!("import \"{}\"", import_path))
        || content.contains(&format!("import '{}'", import_path));
    if already_imported {
        return Ok(FileChange::skipped(entry, "already imports global.css"));
    }

    let updated = format!("import \"{}\";\n\n{}", import_path, content);
    write_file(root, entry, &updated)?;
    Ok(FileChange::updated(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::Action;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> (TempDir, Project) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "dependencies": { "react-native": "0.76.0" } }"#).unwrap();
        let project = Project::at(dir.path()).unwrap();
        (dir, project)
    }

    #[test]
    fn css_import_paths() {
        assert_eq!(css_import_path("App.tsx"), "./global.css");
        assert_eq!(css_import_path("app/_layout.tsx"), "../global.css");
        assert_eq!(css_import_path("src/App.js"), "../global.css");
    }

    #[test]
    fn creates_utils_and_theme_context() {
        let (dir, project) = project();
        let changes = create_initial_files(&project, Styling::Stylesheet, false).unwrap();

        assert_eq!(changes.len(), 2);
        assert!(dir.path().join(UTILS_FILE).is_file());
        assert!(dir.path().join(THEME_CONTEXT_FILE).is_file());
    }

    #[test]
    fn existing_theme_skips_theme_context() {
        let (dir, project) = project();
        create_initial_files(&project, Styling::Stylesheet, true).unwrap();

        assert!(!dir.path().join(THEME_CONTEXT_FILE).exists());
    }

    #[test]
    fn entry_point_gets_css_import_once() {
        let (dir, project) = project();
        fs::create_dir_all(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("app/_layout.tsx"), "export default function Layout() {}\n").unwrap();

        let changes = create_initial_files(&project, Styling::Nativewind, false).unwrap();
        let entry = changes.iter().find(|c| c.path == "app/_layout.tsx").unwrap();
        assert_eq!(entry.action, Action::Updated);

        let content = fs::read_to_string(dir.path().join("app/_layout.tsx")).unwrap();
        assert!(content.starts_with("import \"../global.css\";\n\nexport default"));

        let changes = create_initial_files(&project, Styling::Nativewind, false).unwrap();
        assert!(changes.iter().all(|c| c.action == Action::Skipped));
    }
}
