//! Templates compiled into the binary
//!
//! Mirrors the layout of the `templates/` directory at the crate root.

/// Contents of `templates/registry.toml`
pub const REGISTRY: &str = include_str!("../../templates/registry.toml");

/// `(component, relative path, contents)` for every built-in template file
pub const FILES: &[(&str, &str, &str)] = &[
    (
        "accordion",
        "styles.ts",
        include_str!("../../templates/accordion/styles.ts"),
    ),
    (
        "alert-dialog",
        "index.tsx",
        include_str!("../../templates/alert-dialog/index.tsx"),
    ),
    (
        "alert-dialog",
        "styles.tsx",
        include_str!("../../templates/alert-dialog/styles.tsx"),
    ),
    (
        "badge",
        "index.tsx",
        include_str!("../../templates/badge/index.tsx"),
    ),
    (
        "breadcrumb",
        "styles.ts",
        include_str!("../../templates/breadcrumb/styles.ts"),
    ),
    (
        "button",
        "index.tsx",
        include_str!("../../templates/button/index.tsx"),
    ),
    (
        "card",
        "index.tsx",
        include_str!("../../templates/card/index.tsx"),
    ),
    (
        "input-otp",
        "index.tsx",
        include_str!("../../templates/input-otp/index.tsx"),
    ),
    (
        "input-otp",
        "styles.tsx",
        include_str!("../../templates/input-otp/styles.tsx"),
    ),
    (
        "skeleton",
        "index.tsx",
        include_str!("../../templates/skeleton/index.tsx"),
    ),
];
