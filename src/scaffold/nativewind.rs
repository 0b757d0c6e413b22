//! NativeWind configuration files

use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::{json, Map, Value};

use super::contents;
use super::{read_file, write_file, write_new, FileChange};
use crate::storage::Project;

const TAILWIND_CONFIG: &str = "tailwind.config.js";
const GLOBAL_CSS: &str = "global.css";
const METRO_CONFIG: &str = "metro.config.js";
const BABEL_CONFIG: &str = "babel.config.js";
const APP_JSON: &str = "app.json";

fn config_binding_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:const|let|var)\s+config\b").unwrap())
}

/// Creates or patches every file NativeWind needs
pub fn setup_nativewind(project: &Project) -> Result<Vec<FileChange>> {
    let root = project.root();
    let expo = project.is_expo();

    let mut changes = vec![
        write_new(root, TAILWIND_CONFIG, contents::TAILWIND_CONFIG)?,
        write_new(root, GLOBAL_CSS, contents::GLOBAL_CSS)?,
        metro_config(project, expo)?,
        babel_config(project, expo)?,
    ];

    if expo {
        changes.push(app_json(project)?);
    }

    Ok(changes)
}

fn metro_config(project: &Project, expo: bool) -> Result<FileChange> {
    let root = project.root();

    if !root.join(METRO_CONFIG).exists() {
        let content = if expo {
            contents::METRO_CONFIG_EXPO
        } else {
            contents::METRO_CONFIG_BARE
        };
        write_file(root, METRO_CONFIG, content)?;
        return Ok(FileChange::created(METRO_CONFIG));
    }

    let existing = read_file(root, METRO_CONFIG)?;
    match patch_metro_config(&existing, expo) {
        Some(patched) => {
            write_file(root, METRO_CONFIG, &patched)?;
            Ok(FileChange::updated(METRO_CONFIG))
        }
        None => Ok(FileChange::skipped(METRO_CONFIG, "already configured")),
    }
}

/// Wraps an existing metro config with `withNativeWind`
///
/// Returns `None` when the config already uses `nativewind/metro`.
pub fn patch_metro_config(existing: &str, expo: bool) -> Option<String> {
    if existing.contains("nativewind/metro") {
        return None;
    }

    let mut header = String::from("const { withNativeWind } = require('nativewind/metro');\n");
    if !existing.contains("getDefaultConfig") {
        let source = if expo {
            "expo/metro-config"
        } else {
            "@react-native/metro-config"
        };
        header.push_str(&format!(
            "const {{ getDefaultConfig }} = require(\"{}\");\n",
            source
        ));
    }

    // The stock React Native template already declares `config`
    let binding = if config_binding_re().is_match(existing) {
        "nativecnConfig"
    } else {
        "config"
    };
    let body = existing.replacen("module.exports =", &format!("const {} =", binding), 1);

    Some(format!(
        "{}\n{}\n\nmodule.exports = withNativeWind({}, {{ input: './global.css' }});\n",
        header,
        body.trim_end(),
        binding
    ))
}

fn babel_config(project: &Project, expo: bool) -> Result<FileChange> {
    let root = project.root();
    let content = if expo {
        contents::BABEL_CONFIG_EXPO
    } else {
        contents::BABEL_CONFIG_BARE
    };

    if !root.join(BABEL_CONFIG).exists() {
        write_file(root, BABEL_CONFIG, content)?;
        return Ok(FileChange::created(BABEL_CONFIG));
    }

    let existing = read_file(root, BABEL_CONFIG)?;
    if existing.contains("nativewind") {
        return Ok(FileChange::skipped(BABEL_CONFIG, "already configured"));
    }

    write_file(root, BABEL_CONFIG, content)?;
    Ok(FileChange::updated(BABEL_CONFIG))
}

fn app_json(project: &Project) -> Result<FileChange> {
    let root = project.root();

    if !root.join(APP_JSON).exists() {
        let content = serde_json::to_string_pretty(&json!({ "expo": { "web": { "bundler": "metro" } } }))?;
        write_file(root, APP_JSON, &format!("{}\n", content))?;
        return Ok(FileChange::created(APP_JSON));
    }

    let existing = read_file(root, APP_JSON)?;
    match ensure_metro_bundler(&existing)? {
        Some(updated) => {
            write_file(root, APP_JSON, &updated)?;
            Ok(FileChange::updated(APP_JSON))
        }
        None => Ok(FileChange::skipped(APP_JSON, "already configured")),
    }
}

fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> Result<&'a mut Map<String, Value>> {
    map.entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .with_context(|| format!("app.json: \"{}\" must be an object", key))
}

/// Sets `expo.web.bundler` to `metro`, replacing any other bundler
///
/// NativeWind only works on web through Metro. Other keys are preserved in
/// their original order. Returns `None` when Metro is already configured.
pub fn ensure_metro_bundler(app_json: &str) -> Result<Option<String>> {
    let mut value: Value = serde_json::from_str(app_json).context("Failed to parse app.json")?;

    if value.pointer("/expo/web/bundler") == Some(&json!("metro")) {
        return Ok(None);
    }

    let root = value
        .as_object_mut()
        .context("app.json must contain a JSON object")?;
    let web = object_entry(object_entry(root, "expo")?, "web")?;
    web.insert("bundler".to_string(), json!("metro"));

    let content = serde_json::to_string_pretty(&value)?;
    Ok(Some(format!("{}\n", content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::Action;
    use std::fs;
    use tempfile::TempDir;

    fn project(package_json: &str) -> (TempDir, Project) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), package_json).unwrap();
        let project = Project::at(dir.path()).unwrap();
        (dir, project)
    }

    const BARE: &str = r#"{ "dependencies": { "react-native": "0.76.0" } }"#;
    const EXPO: &str = r#"{ "dependencies": { "react-native": "0.76.0", "expo": "52.0.0" } }"#;

    #[test]
    fn setup_creates_files_for_bare_project() {
        let (dir, project) = project(BARE);
        let changes = setup_nativewind(&project).unwrap();

        let paths: Vec<_> = changes.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec![TAILWIND_CONFIG, GLOBAL_CSS, METRO_CONFIG, BABEL_CONFIG]);
        assert!(changes.iter().all(|c| c.action == Action::Created));

        let metro = fs::read_to_string(dir.path().join(METRO_CONFIG)).unwrap();
        assert!(metro.contains("@react-native/metro-config"));
        let babel = fs::read_to_string(dir.path().join(BABEL_CONFIG)).unwrap();
        assert!(babel.contains("\"react-native\", { jsxImportSource: \"nativewind\" }"));
        assert!(!dir.path().join(APP_JSON).exists());
    }

    #[test]
    fn setup_configures_expo_project() {
        let (dir, project) = project(EXPO);
        fs::write(dir.path().join(APP_JSON), r#"{ "expo": { "name": "demo", "web": { "favicon": "./f.png" } } }"#).unwrap();

        let changes = setup_nativewind(&project).unwrap();
        let app = changes.iter().find(|c| c.path == APP_JSON).unwrap();
        assert_eq!(app.action, Action::Updated);

        let app_json: Value = serde_json::from_str(&fs::read_to_string(dir.path().join(APP_JSON)).unwrap()).unwrap();
        assert_eq!(app_json["expo"]["name"], "demo");
        assert_eq!(app_json["expo"]["web"]["favicon"], "./f.png");
        assert_eq!(app_json["expo"]["web"]["bundler"], "metro");

        let babel = fs::read_to_string(dir.path().join(BABEL_CONFIG)).unwrap();
        assert!(babel.contains("babel-preset-expo"));
    }

    #[test]
    fn setup_is_idempotent() {
        let (_dir, project) = project(EXPO);
        setup_nativewind(&project).unwrap();

        let changes = setup_nativewind(&project).unwrap();
        assert!(changes.iter().all(|c| c.action == Action::Skipped));
    }

    #[test]
    fn existing_babel_without_nativewind_is_replaced() {
        let (dir, project) = project(BARE);
        fs::write(dir.path().join(BABEL_CONFIG), "module.exports = { presets: ['module:@react-native/babel-preset'] };").unwrap();

        let change = babel_config(&project, false).unwrap();
        assert_eq!(change.action, Action::Updated);
        let babel = fs::read_to_string(dir.path().join(BABEL_CONFIG)).unwrap();
        assert!(babel.contains("nativewind/babel"));
    }

    #[test]
    fn patch_metro_wraps_existing_export() {
        let existing = "const { getDefaultConfig } = require('expo/metro-config');\n\nmodule.exports = getDefaultConfig(__dirname);\n";
        let patched = patch_metro_config(existing, true).unwrap();

        assert!(patched.starts_with("const { withNativeWind } = require('nativewind/metro');\n"));
        assert_eq!(patched.matches("getDefaultConfig }").count(), 1);
        assert!(patched.contains("const config = getDefaultConfig(__dirname);"));
        assert!(patched.ends_with("module.exports = withNativeWind(config, { input: './global.css' });\n"));
    }

    #[test]
    fn patch_metro_adds_default_config_import() {
        let patched = patch_metro_config("module.exports = {};", false).unwrap();
        assert!(patched.contains("require(\"@react-native/metro-config\")"));

        assert!(patch_metro_config("require('nativewind/metro')", false).is_none());
    }

    #[test]
    fn metro_bundler_is_untouched() {
        let existing = r#"{ "expo": { "web": { "bundler": "metro" } } }"#;
        assert!(ensure_metro_bundler(existing).unwrap().is_none());
    }

    #[test]
    fn other_bundler_is_replaced_with_metro() {
        let existing = r#"{ "expo": { "name": "demo", "web": { "bundler": "webpack", "output": "static" } } }"#;
        let updated = ensure_metro_bundler(existing).unwrap().unwrap();
        let value: Value = serde_json::from_str(&updated).unwrap();

        assert_eq!(value["expo"]["web"]["bundler"], "metro");
        assert_eq!(value["expo"]["web"]["output"], "static");
        assert_eq!(value["expo"]["name"], "demo");
    }

    #[test]
    fn patch_metro_keeps_existing_config_binding() {
        let existing = "const {getDefaultConfig, mergeConfig} = require('@react-native/metro-config');\n\nconst config = {};\n\nmodule.exports = mergeConfig(getDefaultConfig(__dirname), config);\n";
        let patched = patch_metro_config(existing, false).unwrap();

        assert_eq!(patched.matches("const config =").count(), 1);
        assert!(patched.contains("const nativecnConfig = mergeConfig(getDefaultConfig(__dirname), config);"));
        assert!(patched.ends_with("module.exports = withNativeWind(nativecnConfig, { input: './global.css' });\n"));
        assert_eq!(patched.matches("getDefaultConfig").count(), 2);
    }

    #[test]
    fn bundler_added_to_empty_manifest() {
        let updated = ensure_metro_bundler("{}").unwrap().unwrap();
        let value: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(value["expo"]["web"]["bundler"], "metro");

        assert!(ensure_metro_bundler("[]").is_err());
        assert!(ensure_metro_bundler(r#"{ "expo": "oops" }"#).is_err());
    }
}
