//! The `init` command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::{Styling, ThemeMode};
use crate::scaffold::{self, FileChange, InstallPlan};
use crate::storage::{Project, ProjectConfig, ThemeConfig, CONFIG_FILE};

pub struct InitOptions {
    pub styling: Styling,
    pub theme: ThemeMode,
    pub skip_install: bool,
    pub ignore_existing_theme: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum InstallStatus {
    Installed,
    Skipped,
    NotNeeded,
    Failed,
}

#[derive(Debug, Serialize)]
struct InstallReport {
    status: InstallStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitReport {
    config: String,
    styling: Styling,
    theme: ThemeMode,
    existing_theme: Option<String>,
    components_dir: String,
    install: InstallReport,
    files: Vec<FileChange>,
}

/// Sets up NativeCN in the project at `root`
pub fn run(output: &Output, root: &Path, options: &InitOptions) -> Result<()> {
    output.line("Initializing NativeCN in your project...");

    let project = Project::open_react_native(root)?;
    output.verbose_ctx(
        "init",
        &format!(
            "expo={}, package manager={}",
            project.is_expo(),
            project.package_manager()
        ),
    );

    let existing_theme = if options.ignore_existing_theme {
        None
    } else {
        project.detect_theme_provider()?
    };
    if let Some(path) = &existing_theme {
        output.info(&format!("Found existing theme provider at {}, using it", path));
    }

    let config = ProjectConfig {
        styling: options.styling,
        theme: ThemeConfig {
            use_existing: existing_theme.is_some(),
            existing_theme_path: existing_theme.clone(),
            default_theme: options.theme,
            use_system_theme: options.theme == ThemeMode::System,
        },
        ..ProjectConfig::default()
    };

    let components_dir = root.join(&config.components.out_dir);
    fs::create_dir_all(&components_dir).with_context(|| {
        format!("Failed to create components directory: {}", components_dir.display())
    })?;
    output.verbose_ctx("init", &format!("Components directory: {}", components_dir.display()));

    config.write(root)?;
    output.success("Created NativeCN config file");

    let install = install_dependencies(output, &project, options);

    let mut files = vec![];
    if options.styling == Styling::Nativewind {
        output.line("Setting up NativeWind...");
        files.extend(report(output, scaffold::setup_nativewind(&project)?));
    }
    files.extend(report(
        output,
        scaffold::create_initial_files(&project, options.styling, existing_theme.is_some())?,
    ));

    if output.is_json() {
        output.data(&InitReport {
            config: CONFIG_FILE.to_string(),
            styling: options.styling,
            theme: options.theme,
            existing_theme,
            components_dir: config.components.out_dir.clone(),
            install,
            files,
        });
        return Ok(());
    }

    output.blank();
    output.success("NativeCN has been initialized in your project!");
    output.blank();
    output.line("Next steps:");
    output.line("  1. Add components: nativecn add button card");
    if options.styling == Styling::Nativewind {
        output.line("  2. Restart your bundler with a clean cache (e.g. npx expo start -c)");
    }

    Ok(())
}

fn install_dependencies(output: &Output, project: &Project, options: &InitOptions) -> InstallReport {
    if options.skip_install {
        output.verbose_ctx("install", "Skipping dependency installation");
        return InstallReport {
            status: InstallStatus::Skipped,
            command: None,
            error: None,
        };
    }

    let plan = match scaffold::plan_install(project, options.styling) {
        Some(plan) => plan,
        None => {
            output.verbose_ctx("install", "All dependencies already installed");
            return InstallReport {
                status: InstallStatus::NotNeeded,
                command: None,
                error: None,
            };
        }
    };

    output.line("Installing dependencies...");
    output.verbose_ctx("install", &format!("Running: {}", plan.command_line()));

    match scaffold::install(&plan, project.root()) {
        Ok(()) => {
            output.success("Installed dependencies");
            installed(&plan, InstallStatus::Installed, None)
        }
        Err(e) => {
            output.error(&format!("Failed to install dependencies: {:#}", e));
            output.warn(&format!("Install them manually: {}", plan.command_line()));
            installed(&plan, InstallStatus::Failed, Some(format!("{:#}", e)))
        }
    }
}

fn installed(plan: &InstallPlan, status: InstallStatus, error: Option<String>) -> InstallReport {
    InstallReport {
        status,
        command: Some(plan.command_line()),
        error,
    }
}

fn report(output: &Output, changes: Vec<FileChange>) -> Vec<FileChange> {
    for change in &changes {
        output.change(change);
    }
    changes
}
