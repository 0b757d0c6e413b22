//! Template source rewriting
//!
//! Copied template files are plain text. A few tokens are rewritten on the
//! way into the project: editor directives are stripped, the styling mode
//! flag is flipped, and imports are pointed at the project's own helpers.

use std::path::{Component, Path};
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::domain::Styling;
use super::config::ProjectConfig;

/// Project settings that affect template contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub styling: Styling,
    /// Existing theme provider, relative to the project root
    pub existing_theme_path: Option<String>,
}

impl TemplateContext {
    pub fn from_config(config: &ProjectConfig) -> Self {
        let existing_theme_path = if config.theme.use_existing {
            config.theme.existing_theme_path.clone()
        } else {
            None
        };

        Self {
            styling: config.styling,
            existing_theme_path,
        }
    }
}

fn directive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:/\* tslint:disable \*/|/\* eslint-disable \*/|// @ts-nocheck.*)[\r\n]+")
            .unwrap()
    })
}

fn stylesheet_flag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"useNativeStyleSheet\s*=\s*false").unwrap())
}

fn core_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"import.*from\s*["']@nativecn/core["']"#).unwrap())
}

fn utils_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(["'])(?:\.\./)+lib/utils(["'])"#).unwrap())
}

/// Returns the `../` prefix leading from `dir` back to the project root
///
/// `dir` is relative to the root. Returns `None` when `dir` escapes the
/// root or is absolute, in which case imports are left untouched.
pub fn root_prefix(dir: &Path) -> Option<String> {
    let mut depth = 0;
    for component in dir.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if depth == 0 {
        Some("./".to_string())
    } else {
        Some("../".repeat(depth))
    }
}

/// Rewrites one template file
///
/// `file_dir` is the directory the file lands in, relative to the project
/// root; it decides how project-relative imports are written.
pub fn process(content: &str, context: &TemplateContext, file_dir: &Path) -> String {
    let mut content = directive_re().replace_all(content, "").into_owned();

    if context.styling == Styling::Stylesheet {
        content = stylesheet_flag_re()
            .replace_all(&content, "useNativeStyleSheet = true")
            .into_owned();
    }

    let prefix = root_prefix(file_dir);

    if let Some(theme_path) = &context.existing_theme_path {
        let theme_import = match &prefix {
            Some(prefix) => format!("{}{}", prefix, theme_path.trim_start_matches("./")),
            None => theme_path.clone(),
        };
        let replacement = format!(
            "import {{ cn, getVariantStyles, ThemeMode }} from \"@nativecn/core\";\nimport {{ useTheme }} from \"{}\"",
            theme_import
        );
        content = core_import_re()
            .replace_all(&content, NoExpand(&replacement))
            .into_owned();
    }

    if let Some(prefix) = prefix {
        let replacement = format!("${{1}}{}lib/utils${{2}}", prefix);
        content = utils_import_re()
            .replace_all(&content, replacement.as_str())
            .into_owned();
    }

    content
}
