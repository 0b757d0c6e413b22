//! Dependency installation through the project's package manager

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::domain::Styling;
use crate::storage::Project;

/// Packages `npx expo install` resolves to SDK-compatible versions
const EXPO_PACKAGES: &[&str] = &[
    "nativewind",
    "tailwindcss",
    "react-native-reanimated",
    "react-native-safe-area-context",
    "clsx",
    "tailwind-merge",
];

/// Pinned versions for bare React Native projects
const BARE_NATIVEWIND_PACKAGES: &[&str] = &[
    "clsx",
    "tailwind-merge",
    "nativewind@^4.1.0",
    "tailwindcss@^3.4.17",
    "react-native-reanimated@~3.16.1",
    "react-native-safe-area-context@4.12.0",
];

/// Needed by every component regardless of styling
const COMMON_PACKAGES: &[&str] = &["clsx", "tailwind-merge"];

/// A package manager invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallPlan {
    fn new(program: &str, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The full command, for display
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Decides which packages to install, if any
pub fn plan_install(project: &Project, styling: Styling) -> Option<InstallPlan> {
    let expo = project.is_expo();

    if styling == Styling::Nativewind && !project.has_package("nativewind") {
        if expo {
            let args = ["expo", "install"]
                .into_iter()
                .chain(EXPO_PACKAGES.iter().copied());
            return Some(InstallPlan::new("npx", args));
        }

        let pm = project.package_manager();
        let args = std::iter::once(pm.add_subcommand()).chain(BARE_NATIVEWIND_PACKAGES.iter().copied());
        return Some(InstallPlan::new(pm.command(), args));
    }

    if expo {
        return None;
    }

    let common: Vec<String> = COMMON_PACKAGES.iter().map(|p| p.to_string()).collect();
    let missing = project.missing_packages(&common);
    if missing.is_empty() {
        return None;
    }

    let pm = project.package_manager();
    let args = std::iter::once(pm.add_subcommand()).chain(missing);
    Some(InstallPlan::new(pm.command(), args))
}

/// Runs the plan in `root`, streaming the package manager's output
pub fn install(plan: &InstallPlan, root: &Path) -> Result<()> {
    let status = Command::new(&plan.program)
        .args(&plan.args)
        .current_dir(root)
        // stdout is reserved for our own (possibly JSON) output
        .stdout(std::io::stderr())
        .status()
        .with_context(|| format!("Failed to run '{}'", plan.program))?;

    if !status.success() {
        bail!("'{}' exited with {}", plan.command_line(), status);
    }

    Ok(())
}
