//! Barrel export file (`index.ts`) for the component directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::ComponentName;

pub const BARREL_FILE: &str = "index.ts";

const HEADER: &str = "// This file is generated by nativecn. Do not edit it by hand.\n";

const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SCRIPT_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn find_index(dir: &Path) -> Option<PathBuf> {
    SCRIPT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("index.{}", ext)))
        .find(|path| path.is_file())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    Ok(entries)
}

/// Renders the barrel for every component directory below `out_dir`
pub fn render(out_dir: &Path) -> Result<String> {
    let mut lines = vec![];

    for dir in sorted_entries(out_dir)? {
        if !dir.is_dir() {
            continue;
        }
        let dir_name = match dir.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        if let Some(index) = find_index(&dir) {
            lines.push(format!("export * from './{}';", dir_name));

            let source = fs::read_to_string(&index)
                .with_context(|| format!("Failed to read {}", index.display()))?;
            if source.contains("export default") {
                // Component directories are always valid names when created by `add`
                let alias = dir_name
                    .parse::<ComponentName>()
                    .map(|n| n.pascal_case())
                    .unwrap_or_else(|_| dir_name.replace(|c: char| !c.is_ascii_alphanumeric(), "_"));
                lines.push(format!("export {{ default as {} }} from './{}';", alias, dir_name));
            }
            continue;
        }

        for module in sorted_entries(&dir)? {
            if !module.is_file() || !is_script(&module) {
                continue;
            }
            if let Some(stem) = module.file_stem().and_then(|s| s.to_str()) {
                lines.push(format!("export * from './{}/{}';", dir_name, stem));
            }
        }
    }

    let mut content = HEADER.to_string();
    for line in lines {
        content.push_str(&line);
        content.push('\n');
    }
    Ok(content)
}

/// Regenerates `<out_dir>/index.ts`, returning its path
pub fn write(out_dir: &Path) -> Result<PathBuf> {
    let content = render(out_dir)?;
    let path = out_dir.join(BARREL_FILE);

    fs::write(&path, content)
        .with_context(|| format!("Failed to write barrel file: {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn exports_components_in_order() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "card/index.tsx", "export { Card };");
        write_file(dir.path(), "button/index.tsx", "export default Button;");
        write_file(dir.path(), "input-otp/index.tsx", "export const OTPInput = 1;\nexport default OTPInput;");

        let content = render(dir.path()).unwrap();
        assert_eq!(
            content,
            format!(
                "{}{}",
                HEADER,
                "export * from './button';\n\
                 export { default as Button } from './button';\n\
                 export * from './card';\n\
                 export * from './input-otp';\n\
                 export { default as InputOtp } from './input-otp';\n"
            )
        );
    }

    #[test]
    fn directories_without_index_export_modules() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "accordion/styles.ts", "export const a = 1;");
        write_file(dir.path(), "accordion/README.md", "docs");
        write_file(dir.path(), "empty/notes.txt", "nothing");

        let content = render(dir.path()).unwrap();
        assert!(content.contains("export * from './accordion/styles';"));
        assert!(!content.contains("README"));
        assert!(!content.contains("empty"));
    }

    #[test]
    fn write_ignores_previous_barrel() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "button/index.tsx", "export default Button;");

        let path = write(dir.path()).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        write(dir.path()).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(path, dir.path().join(BARREL_FILE));
        assert_eq!(first, second);
    }
}
