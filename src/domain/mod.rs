//! Domain models for nativecn
//!
//! Component names, styling choices and the template dependency graph.
//! No I/O happens here.

mod component;
mod graph;
mod style;

pub use component::{ComponentName, NameError};
pub use graph::{DependencyGraph, GraphError, RejectedEdge, Resolution};
pub use style::{Styling, ThemeMode};
