//! Component names
//!
//! Component names are lowercase kebab-case (`button`, `input-otp`). They
//! double as the template directory name and the destination directory
//! name, so they never contain path separators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NameError {
    #[error("Component name cannot be empty")]
    Empty,

    #[error("Invalid component name '{0}': use lowercase letters, digits and hyphens (e.g. 'input-otp')")]
    Invalid(String),
}

/// A validated component name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentName(String);

impl ComponentName {
    /// Returns the name as written in the catalog
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the PascalCase identifier used in import statements
    ///
    /// `input-otp` becomes `InputOtp`.
    pub fn pascal_case(&self) -> String {
        self.0
            .split('-')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ComponentName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NameError::Empty);
        }

        let valid_chars = s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_chars || s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(NameError::Invalid(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ComponentName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentName> for String {
    fn from(name: ComponentName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert_eq!("button".parse::<ComponentName>().unwrap().as_str(), "button");
        assert_eq!("input-otp".parse::<ComponentName>().unwrap().as_str(), "input-otp");
        assert_eq!(" card ".parse::<ComponentName>().unwrap().as_str(), "card");
        assert!("h1".parse::<ComponentName>().is_ok());
    }

    #[test]
    fn parse_invalid_names() {
        assert_eq!("".parse::<ComponentName>(), Err(NameError::Empty));
        assert!("Button".parse::<ComponentName>().is_err());
        assert!("../etc".parse::<ComponentName>().is_err());
        assert!("a/b".parse::<ComponentName>().is_err());
        assert!("-button".parse::<ComponentName>().is_err());
        assert!("button-".parse::<ComponentName>().is_err());
        assert!("input--otp".parse::<ComponentName>().is_err());
    }

    #[test]
    fn pascal_case() {
        let name: ComponentName = "button".parse().unwrap();
        assert_eq!(name.pascal_case(), "Button");

        let name: ComponentName = "input-otp".parse().unwrap();
        assert_eq!(name.pascal_case(), "InputOtp");

        let name: ComponentName = "alert-dialog-2".parse().unwrap();
        assert_eq!(name.pascal_case(), "AlertDialog2");
    }

    #[test]
    fn serde_roundtrip_validates() {
        let name: ComponentName = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(name.as_str(), "card");

        let bad: Result<ComponentName, _> = serde_json::from_str("\"Not Valid\"");
        assert!(bad.is_err());
    }
}
