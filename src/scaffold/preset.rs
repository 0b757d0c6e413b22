//! Tailwind preset with the NativeCN design tokens

use std::sync::OnceLock;

use anyhow::Result;
use regex::{Captures, Regex};
use serde::Serialize;

use super::contents;
use super::{read_file, write_file, Action, FileChange};
use crate::storage::Project;

pub const PRESET_FILE: &str = "nativecn-preset.js";

const TAILWIND_CONFIG: &str = "tailwind.config.js";
const PRESET_REQUIRE: &str = "require(\"./nativecn-preset\")";
const ALREADY_WIRED: &str = "already uses the preset";

/// Files touched by `preset`
#[derive(Debug, Serialize)]
pub struct PresetReport {
    pub preset: FileChange,
    /// `None` when the project has no tailwind config
    pub tailwind: Option<FileChange>,
}

impl PresetReport {
    /// True when the user has to add the preset to their Tailwind config by hand
    pub fn needs_manual_setup(&self) -> bool {
        match &self.tailwind {
            Some(change) => change.action == Action::Skipped && change.reason.as_deref() != Some(ALREADY_WIRED),
            None => true,
        }
    }
}

fn presets_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"presets\s*:\s*\[(\s*\])?").unwrap())
}

fn exports_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"module\.exports\s*=\s*\{").unwrap())
}

/// Adds the preset to a tailwind config
///
/// Prepends to an existing `presets` array, or adds a `presets` key to the
/// exported object. Returns `None` when the config already references the
/// preset or has no recognizable shape.
pub fn patch_presets(config: &str) -> Option<String> {
    if config.contains("nativecn-preset") {
        return None;
    }

    if presets_re().is_match(config) {
        let patched = presets_re().replacen(config, 1, |caps: &Captures| {
            if caps.get(1).is_some() {
                format!("presets: [{}]", PRESET_REQUIRE)
            } else {
                format!("presets: [{}, ", PRESET_REQUIRE)
            }
        });
        return Some(patched.into_owned());
    }

    if exports_re().is_match(config) {
        let patched = exports_re().replacen(config, 1, |caps: &Captures| {
            format!("{}\n  presets: [{}],", &caps[0], PRESET_REQUIRE)
        });
        return Some(patched.into_owned());
    }

    None
}

/// Writes the preset file and wires it into `tailwind.config.js`
pub fn generate_preset(project: &Project) -> Result<PresetReport> {
    let root = project.root();

    let existed = root.join(PRESET_FILE).exists();
    write_file(root, PRESET_FILE, contents::PRESET)?;
    let preset = if existed {
        FileChange::updated(PRESET_FILE)
    } else {
        FileChange::created(PRESET_FILE)
    };

    if !root.join(TAILWIND_CONFIG).exists() {
        return Ok(PresetReport {
            preset,
            tailwind: None,
        });
    }

    let existing = read_file(root, TAILWIND_CONFIG)?;
    let tailwind = if existing.contains("nativecn-preset") {
        FileChange::skipped(TAILWIND_CONFIG, ALREADY_WIRED)
    } else {
        match patch_presets(&existing) {
            Some(patched) => {
                write_file(root, TAILWIND_CONFIG, &patched)?;
                FileChange::updated(TAILWIND_CONFIG)
            }
            None => FileChange::skipped(TAILWIND_CONFIG, "has no presets array or exported object"),
        }
    };

    Ok(PresetReport {
        preset,
        tailwind: Some(tailwind),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn patch_prepends_to_existing_presets() {
        let config = "module.exports = {\n  presets: [require(\"nativewind/preset\")],\n};";
        let patched = patch_presets(config).unwrap();

        assert!(patched.contains("presets: [require(\"./nativecn-preset\"), require(\"nativewind/preset\")]"));
    }

    #[test]
    fn patch_fills_empty_presets() {
        let patched = patch_presets("module.exports = { presets: [ ] };").unwrap();
        assert_eq!(patched, "module.exports = { presets: [require(\"./nativecn-preset\")] };");
    }

    #[test]
    fn patch_adds_presets_key() {
        let patched = patch_presets("module.exports = {\n  content: [],\n};").unwrap();
        assert!(patched.starts_with("module.exports = {\n  presets: [require(\"./nativecn-preset\")],\n  content: []"));
    }

    #[test]
    fn patch_leaves_unknown_shapes_alone() {
        assert!(patch_presets("export default config;").is_none());
        assert!(patch_presets("presets: [require('./nativecn-preset')]").is_none());
    }

    #[test]
    fn generate_writes_preset_and_patches_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join(TAILWIND_CONFIG), contents::TAILWIND_CONFIG).unwrap();
        let project = Project::at(dir.path()).unwrap();

        let report = generate_preset(&project).unwrap();
        assert_eq!(report.preset.action, Action::Created);
        assert_eq!(report.tailwind.as_ref().unwrap().action, Action::Updated);
        assert!(!report.needs_manual_setup());

        let preset = fs::read_to_string(dir.path().join(PRESET_FILE)).unwrap();
        assert!(preset.contains("module.exports = {"));
        let tailwind = fs::read_to_string(dir.path().join(TAILWIND_CONFIG)).unwrap();
        assert!(tailwind.contains(PRESET_REQUIRE));

        let report = generate_preset(&project).unwrap();
        assert_eq!(report.preset.action, Action::Updated);
        assert!(!report.needs_manual_setup());
        assert_eq!(report.tailwind.unwrap().action, Action::Skipped);
    }

    #[test]
    fn generate_without_tailwind_config() {
        let dir = TempDir::new().unwrap();
        let project = Project::at(dir.path()).unwrap();

        let report = generate_preset(&project).unwrap();
        assert!(report.tailwind.is_none());
        assert!(report.needs_manual_setup());
        assert!(dir.path().join(PRESET_FILE).is_file());
    }
}
