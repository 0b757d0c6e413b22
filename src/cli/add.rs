//! The `add` command

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use super::app::load_project_config;
use super::output::Output;
use crate::domain::{ComponentName, RejectedEdge};
use crate::storage::{self, Catalog, CatalogError, CopyOutcome, Installer, Project, TemplateContext};

pub struct AddOptions {
    pub dir: Option<String>,
    pub overwrite: bool,
    pub templates: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Added {
    name: String,
    files: Vec<String>,
    /// False when pulled in as a dependency of another component
    requested: bool,
}

#[derive(Debug, Serialize)]
struct Failed {
    name: String,
    error: String,
}

#[derive(Debug, Default, Serialize)]
struct AddReport {
    target: String,
    added: Vec<Added>,
    skipped: Vec<String>,
    failed: Vec<Failed>,
    missing_packages: Vec<String>,
    barrel: Option<String>,
    usage: Option<String>,
}

/// Copies the requested components and their dependencies into the project
pub fn run(output: &Output, root: &Path, names: &[String], options: &AddOptions) -> Result<()> {
    let config = load_project_config(output, root);
    let project = Project::at(root)?;
    let target = options
        .dir
        .clone()
        .unwrap_or_else(|| config.components.out_dir.clone());

    output.line(&format!("Adding components to {}...", target));

    let catalog = Catalog::load(options.templates.as_deref())?;
    output.verbose_ctx("add", &format!("Loaded {} templates from {:?}", catalog.len(), catalog.source()));
    for note in catalog.notes() {
        output.verbose_ctx("catalog", note);
    }

    let graph = catalog.graph();
    for edge in graph.cycles() {
        output.warn(&format!(
            "Ignoring dependency {} -> {}: it would create a cycle",
            edge.component, edge.dependency
        ));
    }
    for edge in graph.unresolved() {
        output.warn(&format!(
            "Component '{}' depends on '{}', which is not in the catalog",
            edge.component, edge.dependency
        ));
    }

    let mut report = AddReport {
        target: display_dir(Path::new(&target)),
        ..AddReport::default()
    };

    let mut requested = vec![];
    for raw in names {
        match raw.parse::<ComponentName>() {
            Ok(name) if !requested.contains(&name) => requested.push(name),
            Ok(_) => {}
            Err(e) => fail(output, &mut report, raw, &e.to_string()),
        }
    }

    let resolution = graph.resolve(&requested);
    for name in &resolution.unknown {
        let error = CatalogError::UnknownTemplate(name.to_string());
        fail(output, &mut report, name.as_str(), &error.to_string());
    }
    for RejectedEdge { component, dependency } in &resolution.missing {
        output.verbose_ctx("add", &format!("Skipping missing dependency {} of {}", dependency, component));
    }
    output.verbose_ctx(
        "add",
        &format!(
            "Resolved order: {}",
            resolution
                .order
                .iter()
                .map(ComponentName::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    );

    let installer = Installer::new(root, &target, TemplateContext::from_config(&config));
    let mut packages = BTreeSet::new();

    for name in &resolution.order {
        let template = catalog.require(name)?;
        let is_requested = requested.contains(name);

        if !is_requested && !options.overwrite && installer.exists(template) {
            output.verbose_ctx("add", &format!("Dependency '{}' already present", name));
            report.skipped.push(name.to_string());
            continue;
        }

        match installer.copy(template, options.overwrite) {
            Ok(CopyOutcome::Copied(files)) => {
                output.success(&format!("Added component '{}'", name));
                for file in &files {
                    output.verbose_ctx("add", &format!("Wrote {}", file.display()));
                }
                packages.extend(template.packages.iter().cloned());
                report.added.push(Added {
                    name: name.to_string(),
                    files: files.iter().map(|f| display_dir(f)).collect(),
                    requested: is_requested,
                });
            }
            Ok(CopyOutcome::AlreadyExists) => {
                let error = format!("Component '{}' already exists. Use --overwrite to replace it.", name);
                fail(output, &mut report, name.as_str(), &error);
            }
            Err(e) => {
                let error = format!("Failed to copy component '{}': {:#}", name, e);
                fail(output, &mut report, name.as_str(), &error);
            }
        }
    }

    if !report.added.is_empty() {
        match storage::write_barrel(&installer.out_path()) {
            Ok(path) => {
                output.verbose_ctx("add", &format!("Regenerated {}", path.display()));
                report.barrel = Some(format!("{}/{}", report.target, storage::BARREL_FILE));
            }
            Err(e) => output.error(&format!("Failed to update barrel file: {:#}", e)),
        }

        let packages: Vec<String> = packages.into_iter().collect();
        if project.has_package_json() {
            report.missing_packages = project
                .missing_packages(&packages)
                .into_iter()
                .map(str::to_string)
                .collect();
        }

        report.usage = Some(usage_example(&report));
    }

    if output.is_json() {
        output.data(&report);
    } else {
        print_summary(output, &report, &project);
    }

    Ok(())
}

fn fail(output: &Output, report: &mut AddReport, name: &str, error: &str) {
    output.error(error);
    report.failed.push(Failed {
        name: name.to_string(),
        error: error.to_string(),
    });
}

/// `import { Button, InputOtp } from "components/ui/index";`
fn usage_example(report: &AddReport) -> String {
    let exports: Vec<String> = report
        .added
        .iter()
        .filter_map(|added| added.name.parse::<ComponentName>().ok())
        .map(|name| name.pascal_case())
        .collect();

    format!(
        "import {{ {} }} from \"{}/index\";",
        exports.join(", "),
        report.target
    )
}

fn print_summary(output: &Output, report: &AddReport, project: &Project) {
    output.blank();
    output.line("Summary:");

    if !report.added.is_empty() {
        output.success(&format!("Added {} component(s):", report.added.len()));
        for added in &report.added {
            if added.requested {
                output.line(&format!("  • {}", added.name));
            } else {
                output.line(&format!("  • {} (dependency)", added.name));
            }
        }
    }

    if !report.skipped.is_empty() {
        output.info(&format!(
            "Skipped {} dependency component(s) already present:",
            report.skipped.len()
        ));
        for name in &report.skipped {
            output.line(&format!("  • {}", name));
        }
    }

    if !report.failed.is_empty() {
        output.line(&format!("✗ Failed to add {} component(s):", report.failed.len()));
        for failed in &report.failed {
            output.line(&format!("  • {}", failed.name));
        }
    }

    if !report.missing_packages.is_empty() {
        output.blank();
        output.info("These components need packages that are not installed yet:");
        let pm = project.package_manager();
        output.line(&format!(
            "    {} {} {}",
            pm.command(),
            pm.add_subcommand(),
            report.missing_packages.join(" ")
        ));
    }

    if let Some(usage) = &report.usage {
        output.blank();
        output.line("Usage example:");
        output.blank();
        output.line(usage);
    }
}

/// Renders a relative path with `/` separators and without `./` segments
fn display_dir(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) => Some(String::new()),
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_dir_normalizes() {
        assert_eq!(display_dir(Path::new("./components/ui")), "components/ui");
        assert_eq!(display_dir(Path::new("src/ui/")), "src/ui");
        assert_eq!(display_dir(Path::new("../shared/ui")), "../shared/ui");
        assert_eq!(display_dir(Path::new(".")), ".");
    }

    #[test]
    fn usage_example_uses_pascal_case() {
        let report = AddReport {
            target: "components/ui".to_string(),
            added: vec![
                Added {
                    name: "button".to_string(),
                    files: vec![],
                    requested: true,
                },
                Added {
                    name: "input-otp".to_string(),
                    files: vec![],
                    requested: true,
                },
            ],
            ..AddReport::default()
        };

        assert_eq!(
            usage_example(&report),
            "import { Button, InputOtp } from \"components/ui/index\";"
        );
    }
}
