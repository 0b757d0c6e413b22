//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Write `nativecn.config.js`, install dependencies, set up NativeWind |
//! | `add <component...>` | Copy component templates (and their dependencies) into the project |
//! | `preset` | Generate `nativecn-preset.js` and add it to the Tailwind config |
//! | `list` | Show the template catalog and what is installed |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! nativecn --verbose add button
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod add;
mod init;
mod list;
mod preset;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
