//! `[theme]` descriptor configuration (`theme.toml`).
//!
//! Contains design-token overrides, typography style rules, the content
//! scan glob list, and stylesheet generation switches.

use super::defaults;
use super::error::ConfigError;
use crate::css::{palette, resolve::Resolver, scan};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

/// CSS-selector-like key to style-property mapping for one variant.
pub type StyleRules = HashMap<String, HashMap<String, String>>;

// ============================================================================
// Enums
// ============================================================================

/// Dark-mode selection strategy for generated variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Scope dark rules under a `.dark` ancestor class (default).
    #[default]
    Class,
    /// Wrap dark rules in a `prefers-color-scheme` media query.
    Media,
}

// ============================================================================
// Root Descriptor
// ============================================================================

/// Root descriptor structure representing theme.toml
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Stylesheet generation switches
    pub theme: ThemeOptions,

    /// Content scanning settings
    pub scan: ScanConfig,

    /// Color token overrides: token name to palette scale name or `#hex`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub colors: HashMap<String, String>,

    /// Typography variants: variant name to selector to property map.
    /// Property values may reference color tokens (e.g. `gray.200`).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub typography: HashMap<String, StyleRules>,
}

impl ThemeConfig {
    /// Parse and validate the descriptor from TOML text.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the descriptor from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Serialize the descriptor back to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate descriptor invariants.
    ///
    /// The scan glob list must be non-empty and translatable, color
    /// overrides must point at known palette scales or literal colors, and
    /// every token reference inside typography rules must resolve.
    pub fn validate(&self) -> Result<()> {
        if self.scan.content.is_empty() {
            bail!(ConfigError::malformed(
                "scan.content",
                "must list at least one glob; an empty scan strips every utility class"
            ));
        }

        for glob in &self.scan.content {
            if let Err(err) = scan::glob_to_regex(glob) {
                bail!(ConfigError::malformed(
                    "scan.content",
                    format!("invalid glob `{glob}`: {err}")
                ));
            }
        }

        for (token, value) in &self.colors {
            if value.starts_with('#') {
                if !palette::is_literal_color(value) {
                    bail!(ConfigError::malformed(
                        format!("colors.{token}"),
                        format!("`{value}` is not a valid color literal")
                    ));
                }
            } else if palette::scale(value).is_none() {
                bail!(ConfigError::malformed(
                    format!("colors.{token}"),
                    format!("unknown palette scale `{value}`")
                ));
            }
        }

        let resolver = Resolver::new(&self.colors);
        for (variant, rules) in &self.typography {
            for (selector, properties) in rules {
                for value in properties.values() {
                    if Resolver::is_reference(value) && resolver.resolve_reference(value).is_none()
                    {
                        bail!(ConfigError::malformed(
                            format!("typography.{variant}"),
                            format!("unresolvable token reference `{value}` in `{selector}`")
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Sections
// ============================================================================

/// `[theme]` section in theme.toml - stylesheet generation switches.
///
/// # Example
/// ```toml
/// [theme]
/// dark_mode = "class"
/// important = true
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeOptions {
    /// Dark-mode selection strategy.
    #[serde(default)]
    pub dark_mode: DarkMode,

    /// Append `!important` to every generated declaration.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub important: bool,
}

/// `[scan]` section - source files scanned for utility-class usage.
///
/// # Example
/// ```toml
/// [scan]
/// content = ["components/**/*.{vue,js}", "content/**/*.md"]
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Glob patterns relative to the scan root. Order affects scan cost,
    /// not correctness.
    #[serde(default = "defaults::scan::content")]
    #[educe(Default = defaults::scan::content())]
    pub content: Vec<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_config_full() {
        let config = ThemeConfig::from_str(
            r#"
            [theme]
            dark_mode = "class"
            important = true

            [scan]
            content = ["components/**/*.{vue,js}", "content/**/*.md"]

            [colors]
            gray = "true-gray"

            [typography.light."a"]
            color = "gray.200"

            [typography.light."blockquote"]
            color = "gray.200"
            border-left-color = "gray.600"
        "#,
        )
        .unwrap();

        assert_eq!(config.theme.dark_mode, DarkMode::Class);
        assert!(config.theme.important);
        assert_eq!(config.scan.content.len(), 2);
        assert_eq!(config.colors.get("gray").map(String::as_str), Some("true-gray"));

        let light = config.typography.get("light").unwrap();
        assert_eq!(
            light.get("blockquote").and_then(|p| p.get("border-left-color")),
            Some(&"gray.600".to_string())
        );
    }

    #[test]
    fn test_theme_config_defaults() {
        let config = ThemeConfig::from_str("").unwrap();

        assert_eq!(config.theme.dark_mode, DarkMode::Class);
        assert!(!config.theme.important);
        assert!(!config.scan.content.is_empty());
        assert!(config.colors.is_empty());
        assert!(config.typography.is_empty());
    }

    #[test]
    fn test_empty_scan_list_rejected() {
        let result = ThemeConfig::from_str(
            r#"
            [scan]
            content = []
        "#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("scan.content"));
        assert!(err.contains("at least one glob"));
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let result = ThemeConfig::from_str(
            r#"
            [scan]
            content = ["components/**/*.{vue,js"]
        "#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("scan.content"));
        assert!(err.contains("invalid glob"));
    }

    #[test]
    fn test_unknown_scale_rejected() {
        let result = ThemeConfig::from_str(
            r#"
            [colors]
            gray = "no-such-scale"
        "#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("colors.gray"));
        assert!(err.contains("no-such-scale"));
    }

    #[test]
    fn test_literal_color_override() {
        let config = ThemeConfig::from_str(
            r##"
            [colors]
            accent = "#ff6600"
        "##,
        )
        .unwrap();

        assert_eq!(config.colors.get("accent").map(String::as_str), Some("#ff6600"));
    }

    #[test]
    fn test_bad_literal_color_rejected() {
        let result = ThemeConfig::from_str(
            r##"
            [colors]
            accent = "#zzz"
        "##,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("colors.accent"));
    }

    #[test]
    fn test_unresolvable_typography_token_rejected() {
        let result = ThemeConfig::from_str(
            r#"
            [typography.light."a"]
            color = "nonexistent.200"
        "#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("typography.light"));
        assert!(err.contains("nonexistent.200"));
    }

    #[test]
    fn test_typography_token_resolved_through_override() {
        // `gray` is overridden to the true-gray scale; gray.200 must resolve.
        let config = ThemeConfig::from_str(
            r#"
            [colors]
            gray = "true-gray"

            [typography.light."h1"]
            color = "gray.200"
        "#,
        );

        assert!(config.is_ok());
    }

    #[test]
    fn test_typography_literal_values_pass_through() {
        // Non-reference values (plain CSS) are not token-checked.
        let config = ThemeConfig::from_str(
            r#"
            [typography.DEFAULT."code::before"]
            content = "''"
        "#,
        )
        .unwrap();

        let rules = config.typography.get("DEFAULT").unwrap();
        assert_eq!(
            rules.get("code::before").and_then(|p| p.get("content")),
            Some(&"''".to_string())
        );
    }

    #[test]
    fn test_dark_mode_media() {
        let config = ThemeConfig::from_str(
            r#"
            [theme]
            dark_mode = "media"
        "#,
        )
        .unwrap();

        assert_eq!(config.theme.dark_mode, DarkMode::Media);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result = ThemeConfig::from_str(
            r#"
            [theme]
            purge = true
        "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = ThemeConfig::from_str(
            r#"
            [theme]
            dark_mode = "media"
            important = true

            [scan]
            content = ["pages/**/*.vue"]

            [colors]
            gray = "true-gray"

            [typography.light."a"]
            color = "gray.200"
        "#,
        )
        .unwrap();

        let serialized = config.to_toml().unwrap();
        let reloaded = ThemeConfig::from_str(&serialized).unwrap();
        assert_eq!(config, reloaded);
    }
}
