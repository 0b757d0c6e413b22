//! The `preset` command

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::scaffold;
use crate::storage::Project;

/// Writes the Tailwind preset and wires it into the project's Tailwind config
pub fn run(output: &Output, root: &Path) -> Result<()> {
    output.line("Generating Tailwind preset...");

    let project = Project::at(root)?;
    let report = scaffold::generate_preset(&project)?;
    output.verbose_ctx("preset", &format!("Preset {:?}", report.preset.action));

    if output.is_json() {
        output.data(&report);
        return Ok(());
    }

    output.change(&report.preset);

    match &report.tailwind {
        Some(change) => output.change(change),
        None => output.info("No tailwind.config.js found"),
    }

    if report.needs_manual_setup() {
        output.blank();
        output.line("Add the preset to your Tailwind config:");
        output.blank();
        output.line("  module.exports = {");
        output.line("    presets: [require(\"./nativecn-preset\")],");
        output.line("    // ...");
        output.line("  };");
    }

    Ok(())
}
