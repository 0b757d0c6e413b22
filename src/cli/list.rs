//! The `list` command

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::ComponentName;
use crate::storage::{Catalog, InstallState, Installer, ProjectConfig, Template, TemplateContext};

struct Row<'a> {
    template: &'a Template,
    /// Known direct dependencies
    requires: Vec<ComponentName>,
    used_by: Vec<ComponentName>,
    state: InstallState,
}

fn join(names: &[ComponentName]) -> String {
    names.iter().map(ComponentName::as_str).collect::<Vec<_>>().join(", ")
}

/// Lists the catalog, with install state when the project has a config
pub fn run(output: &Output, root: &Path, templates: Option<&Path>) -> Result<()> {
    let catalog = Catalog::load(templates)?;
    output.verbose_ctx("list", &format!("Loaded {} templates from {:?}", catalog.len(), catalog.source()));
    for note in catalog.notes() {
        output.verbose_ctx("catalog", note);
    }

    let installer = match ProjectConfig::read(root) {
        Ok(Some(config)) => Some(Installer::new(
            root,
            &config.components.out_dir,
            TemplateContext::from_config(&config),
        )),
        Ok(None) => {
            output.verbose_ctx("list", "No project config, not checking install state");
            None
        }
        Err(e) => {
            output.verbose_ctx("list", &format!("Ignoring project config: {:#}", e));
            None
        }
    };

    let graph = catalog.graph();

    let mut rows = vec![];
    for template in catalog.templates() {
        let state = match &installer {
            Some(installer) => installer.state(template)?,
            None => InstallState::NotInstalled,
        };
        rows.push(Row {
            template,
            requires: graph.dependencies(&template.name),
            used_by: graph.dependents(&template.name),
            state,
        });
    }

    if output.is_json() {
        let items: Vec<_> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "name": row.template.name,
                    "description": row.template.description,
                    "dependencies": row.requires,
                    "dependents": row.used_by,
                    "packages": row.template.packages,
                    "state": row.state,
                })
            })
            .collect();
        let cycles: Vec<_> = graph
            .cycles()
            .iter()
            .map(|e| serde_json::json!({ "component": e.component, "dependency": e.dependency }))
            .collect();
        let unresolved: Vec<_> = graph
            .unresolved()
            .iter()
            .map(|e| serde_json::json!({ "component": e.component, "dependency": e.dependency }))
            .collect();
        output.data(&serde_json::json!({
            "components": items,
            "cycles": cycles,
            "unresolved": unresolved,
        }));
        return Ok(());
    }

    if rows.is_empty() {
        println!("No components available.");
        return Ok(());
    }

    println!("Available components:");
    for row in &rows {
        let mut line = format!("  • {}", row.template.name);
        if !row.template.description.is_empty() {
            line.push_str(&format!(" - {}", row.template.description));
        }
        if !row.requires.is_empty() {
            line.push_str(&format!(" (requires: {})", join(&row.requires)));
        }
        if !row.used_by.is_empty() {
            line.push_str(&format!(" (used by: {})", join(&row.used_by)));
        }
        if row.state != InstallState::NotInstalled {
            line.push_str(&format!(" [{}]", row.state.as_str()));
        }
        println!("{}", line);
    }

    for edge in graph.cycles() {
        output.warn(&format!(
            "Dependency {} -> {} is ignored: it would create a cycle",
            edge.component, edge.dependency
        ));
    }
    for edge in graph.unresolved() {
        output.warn(&format!(
            "Component '{}' depends on '{}', which is not in the catalog",
            edge.component, edge.dependency
        ));
    }

    Ok(())
}
