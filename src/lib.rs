//! NativeCN CLI - Component templates for React Native
//!
//! `nativecn` prepares a React Native project for NativeCN components
//! (NativeWind, Tailwind, Metro and Babel config, a theme context) and copies
//! component templates into it. Components are source code the project owns
//! after copying; the CLI only keeps track of what a fresh copy would look
//! like so it can report local modifications.

pub mod domain;
pub mod storage;
pub mod scaffold;
pub mod cli;

pub use domain::{ComponentName, DependencyGraph, Styling, ThemeMode};
