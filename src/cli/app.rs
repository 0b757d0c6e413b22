//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{add, init, list, preset};
use crate::domain::{Styling, ThemeMode};
use crate::storage::{GlobalConfig, ProjectConfig};

#[derive(Parser)]
#[command(name = "nativecn")]
#[command(author, version, about = "CLI for adding NativeCN UI components to React Native projects")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project directory
    #[arg(long, global = true, default_value = ".")]
    pub cwd: PathBuf,

    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory of component templates to use instead of the built-in catalog
    #[arg(long, global = true, env = "NATIVECN_TEMPLATES")]
    pub templates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize NativeCN in a React Native project
    Init {
        /// Styling approach for components
        #[arg(long, value_enum, default_value_t = Styling::Nativewind)]
        styling: Styling,

        /// Default theme mode
        #[arg(long, value_enum, default_value_t = ThemeMode::System)]
        theme: ThemeMode,

        /// Skip installing dependencies
        #[arg(long)]
        skip_install: bool,

        /// Create a new theme context even if the project already has one
        #[arg(long)]
        ignore_existing_theme: bool,
    },

    /// Add components to the project
    Add {
        /// Components to add (e.g. button card)
        #[arg(required = true)]
        components: Vec<String>,

        /// Target directory (defaults to components.outDir from the config)
        #[arg(long, short = 'd')]
        dir: Option<String>,

        /// Replace components that already exist
        #[arg(long)]
        overwrite: bool,
    },

    /// Generate a Tailwind preset with the NativeCN theme
    Preset,

    /// List available components
    List,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let global = GlobalConfig::load()?;

    let format = cli.format.or(global.default_format).unwrap_or_default();
    let output = Output::new(format, cli.verbose);

    output.verbose("NativeCN CLI starting");
    output.verbose_ctx("config", &format!("Project root: {}", cli.cwd.display()));

    let templates = cli.templates.or(global.templates_dir);
    if let Some(dir) = &templates {
        output.verbose_ctx("config", &format!("Using templates from: {}", dir.display()));
    }

    match cli.command {
        Commands::Init {
            styling,
            theme,
            skip_install,
            ignore_existing_theme,
        } => {
            output.verbose_ctx(
                "init",
                &format!("styling={}, theme={}, skip_install={}", styling, theme, skip_install),
            );
            let options = init::InitOptions {
                styling,
                theme,
                skip_install,
                ignore_existing_theme,
            };
            init::run(&output, &cli.cwd, &options)?
        }

        Commands::Add {
            components,
            dir,
            overwrite,
        } => {
            output.verbose_ctx(
                "add",
                &format!("components={:?}, dir={:?}, overwrite={}", components, dir, overwrite),
            );
            let options = add::AddOptions {
                dir,
                overwrite,
                templates,
            };
            add::run(&output, &cli.cwd, &components, &options)?
        }

        Commands::Preset => preset::run(&output, &cli.cwd)?,

        Commands::List => list::run(&output, &cli.cwd, templates.as_deref())?,
    }

    Ok(())
}

/// Reads the project config, falling back to defaults with a warning
pub(crate) fn load_project_config(output: &Output, root: &Path) -> ProjectConfig {
    match ProjectConfig::read(root) {
        Ok(Some(config)) => config,
        Ok(None) => {
            output.warn("Config file not found, using defaults. Run `nativecn init` first.");
            ProjectConfig::default()
        }
        Err(e) => {
            output.warn(&format!("{:#}, using defaults", e));
            ProjectConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn init_defaults() {
        let cli = Cli::try_parse_from(["nativecn", "init"]).unwrap();
        match cli.command {
            Commands::Init {
                styling,
                theme,
                skip_install,
                ignore_existing_theme,
            } => {
                assert_eq!(styling, Styling::Nativewind);
                assert_eq!(theme, ThemeMode::System);
                assert!(!skip_install);
                assert!(!ignore_existing_theme);
            }
            _ => panic!("expected init"),
        }
        assert_eq!(cli.cwd, PathBuf::from("."));
        assert!(cli.format.is_none());
    }

    #[test]
    fn add_requires_components() {
        assert!(Cli::try_parse_from(["nativecn", "add"]).is_err());

        let cli = Cli::try_parse_from(["nativecn", "add", "button", "card", "-d", "src/ui", "--overwrite"]).unwrap();
        match cli.command {
            Commands::Add {
                components,
                dir,
                overwrite,
            } => {
                assert_eq!(components, vec!["button", "card"]);
                assert_eq!(dir.as_deref(), Some("src/ui"));
                assert!(overwrite);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["nativecn", "list", "--format", "json", "--cwd", "app"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.cwd, PathBuf::from("app"));
    }

    #[test]
    fn rejects_unknown_styling() {
        assert!(Cli::try_parse_from(["nativecn", "init", "--styling", "emotion"]).is_err());
    }
}
