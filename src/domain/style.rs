//! Styling and theme choices recorded in the project config

use serde::{Deserialize, Serialize};
use std::fmt;

/// How copied components are styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Styling {
    /// Tailwind classes through NativeWind
    #[default]
    Nativewind,
    /// Plain React Native StyleSheet objects
    Stylesheet,
}

impl Styling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Styling::Nativewind => "nativewind",
            Styling::Stylesheet => "stylesheet",
        }
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default color scheme of generated components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
