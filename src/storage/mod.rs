//! # Storage Layer
//!
//! Everything nativecn reads from or writes to disk, apart from the
//! scaffolded config files (see [`crate::scaffold`]).
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Project config | CommonJS module exporting JSON | `nativecn.config.js` |
//! | Global config | TOML | `~/.config/nativecn/config.toml` |
//! | Template catalog | Directories + TOML registry | built in, or `--templates <dir>` |
//! | Components | Processed template files | `<outDir>/<component>/` |
//! | Barrel | TypeScript re-exports | `<outDir>/index.ts` |
//!
//! ## Key Types
//!
//! - [`Project`] - The consumer React Native project and what it uses
//! - [`Catalog`] - Loaded component templates
//! - [`Installer`] - Copies templates into the project
//! - [`ProjectConfig`] / [`GlobalConfig`] - Configuration

mod barrel;
mod builtin;
mod catalog;
mod config;
mod install;
mod project;
mod transform;

pub use barrel::{render as render_barrel, write as write_barrel, BARREL_FILE};
pub use catalog::{Catalog, CatalogError, CatalogSource, Template, TemplateFile, REGISTRY_FILE};
pub use config::{
    ComponentsConfig, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, ThemeConfig,
    CONFIG_FILE,
};
pub use install::{CopyOutcome, InstallState, Installer};
pub use project::{PackageManager, Project, ProjectError};
pub use transform::{process as process_template, root_prefix, TemplateContext};
