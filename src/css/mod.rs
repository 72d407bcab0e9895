//! Stylesheet generation from theme tokens and scanned class usage.
//!
//! This module provides:
//! - Token resolution against the built-in palette and theme overrides
//! - Content scanning for utility-class usage
//! - CSS generation (typography variants + color utilities) and
//!   fingerprinted output files

pub mod palette;
pub mod resolve;
pub mod scan;

use crate::config::{ConfigError, DarkMode, ThemeConfig};
use crate::{hash, log};
use anyhow::Result;
use resolve::Resolver;
use scan::ClassUsage;
use std::{
    cmp::Ordering,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Utility rule prefixes and the CSS property each generates.
const UTILITIES: &[(&str, &str)] = &[
    ("text", "color"),
    ("bg", "background-color"),
    ("border", "border-color"),
];

/// Variant prefix recognized in scanned class candidates.
const DARK_PREFIX: &str = "dark:";

// ============================================================================
// Generation
// ============================================================================

/// Generate the stylesheet for a theme, scoped to scanned class usage.
///
/// Typography variant blocks come first, then color utility rules for the
/// candidates that resolve against the palette. Output is deterministic:
/// variants, selectors, and properties are emitted in sorted order.
pub fn generate_stylesheet(config: &ThemeConfig, usage: &ClassUsage) -> Result<String> {
    let resolver = Resolver::new(&config.colors);
    let mut out = String::new();

    typography_css(config, &resolver, &mut out)?;
    utility_css(config, &resolver, usage, &mut out);

    Ok(out)
}

/// Emit typography blocks: `DEFAULT` maps to `.prose`, any other variant
/// to `.prose-{variant}`.
fn typography_css(config: &ThemeConfig, resolver: &Resolver, out: &mut String) -> Result<()> {
    let mut variants: Vec<&String> = config.typography.keys().collect();
    variants.sort_by(|a, b| match (a.as_str() == "DEFAULT", b.as_str() == "DEFAULT") {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    });

    for variant in variants {
        let class = if variant == "DEFAULT" {
            ".prose".to_string()
        } else {
            format!(".prose-{variant}")
        };

        let rules = &config.typography[variant];
        let mut selectors: Vec<&String> = rules.keys().collect();
        selectors.sort();

        for selector in selectors {
            let properties = &rules[selector];
            let mut names: Vec<&String> = properties.keys().collect();
            names.sort();

            let mut declarations = Vec::with_capacity(names.len());
            for name in names {
                let value = &properties[name];
                let resolved = if Resolver::is_reference(value) {
                    resolver.resolve_reference(value).ok_or_else(|| {
                        ConfigError::malformed(
                            format!("typography.{variant}"),
                            format!("unresolvable token reference `{value}`"),
                        )
                    })?
                } else {
                    value.clone()
                };
                declarations.push((name.as_str(), resolved));
            }

            write_rule(
                out,
                &format!("{class} {selector}"),
                &declarations,
                config.theme.important,
            );
        }
    }

    Ok(())
}

/// Emit color utility rules for scanned candidates that resolve.
///
/// Candidates that do not parse as a color utility (layout classes, prose
/// words picked up by the tokenizer) are skipped silently.
fn utility_css(config: &ThemeConfig, resolver: &Resolver, usage: &ClassUsage, out: &mut String) {
    let mut candidates: Vec<&str> = usage.iter().collect();
    candidates.sort_unstable();

    let mut dark_rules = String::new();

    for candidate in candidates {
        let (is_dark, utility) = match candidate.strip_prefix(DARK_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, candidate),
        };

        let Some((property, color)) = parse_utility(utility, resolver) else {
            continue;
        };
        let declarations = [(property, color)];

        if !is_dark {
            write_rule(
                out,
                &format!(".{}", escape_class(candidate)),
                &declarations,
                config.theme.important,
            );
            continue;
        }

        match config.theme.dark_mode {
            DarkMode::Class => write_rule(
                out,
                &format!(".dark .{}", escape_class(candidate)),
                &declarations,
                config.theme.important,
            ),
            DarkMode::Media => write_rule(
                &mut dark_rules,
                &format!(".{}", escape_class(candidate)),
                &declarations,
                config.theme.important,
            ),
        }
    }

    if !dark_rules.is_empty() {
        out.push_str("@media (prefers-color-scheme: dark) {\n");
        for line in dark_rules.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("}\n");
    }
}

/// Parse a candidate like `text-gray-200` or `bg-accent` into its CSS
/// property and resolved color.
fn parse_utility(class: &str, resolver: &Resolver) -> Option<(&'static str, String)> {
    for (prefix, property) in UTILITIES.iter().copied() {
        let Some(rest) = class.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) else {
            continue;
        };

        if let Some((token, shade)) = rest.rsplit_once('-')
            && !shade.is_empty()
            && shade.chars().all(|c| c.is_ascii_digit())
            && let Some(color) = resolver.resolve(token, shade)
        {
            return Some((property, color));
        }

        if let Some(color) = resolver.resolve_literal(rest) {
            return Some((property, color));
        }
    }
    None
}

/// Escape a class candidate for use in a CSS selector.
fn escape_class(class: &str) -> String {
    class.replace(':', "\\:")
}

fn write_rule(out: &mut String, selector: &str, declarations: &[(&str, String)], important: bool) {
    out.push_str(selector);
    out.push_str(" {\n");
    for (property, value) in declarations {
        out.push_str("  ");
        out.push_str(property);
        out.push_str(": ");
        out.push_str(value);
        if important {
            out.push_str(" !important");
        }
        out.push_str(";\n");
    }
    out.push_str("}\n");
}

// ============================================================================
// Output Files
// ============================================================================

/// Get the stylesheet filename for generated CSS (hidden file with hash).
///
/// Returns a filename like `.theme-a1b2c3d4.css`.
pub fn stylesheet_filename(css: &str) -> String {
    format!(".theme-{}.css", hash::fingerprint(css))
}

/// Write the generated stylesheet under a content-fingerprinted name and
/// remove stale fingerprints.
///
/// Returns the relative path to the written file.
pub fn write_stylesheet(output_dir: &Path, css: &str) -> Result<PathBuf> {
    let filename = stylesheet_filename(css);
    let path = output_dir.join(&filename);

    let mut file = fs::File::create(&path)?;
    file.write_all(css.as_bytes())?;

    cleanup_stale_stylesheets(output_dir, &filename)?;
    log!("theme"; "generated {filename}");

    Ok(PathBuf::from(filename))
}

/// Clean up old stylesheet files (matching `.theme-*.css`), keeping only
/// the current fingerprint.
pub fn cleanup_stale_stylesheets(output_dir: &Path, current: &str) -> Result<()> {
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        if name_str.starts_with(".theme-") && name_str.ends_with(".css") && name_str != current {
            fs::remove_file(entry.path())?;
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn usage_of(classes: &[&str]) -> ClassUsage {
        let mut usage = ClassUsage::default();
        for class in classes {
            usage.insert(*class);
        }
        usage
    }

    #[test]
    fn test_typography_resolves_overridden_tokens() {
        let config = ThemeConfig::from_str(
            r#"
            [colors]
            gray = "true-gray"

            [typography.light."a"]
            color = "gray.200"
        "#,
        )
        .unwrap();

        let css = generate_stylesheet(&config, &ClassUsage::default()).unwrap();
        assert!(css.contains(".prose-light a {\n  color: #e5e5e5;\n}"));
    }

    #[test]
    fn test_typography_default_variant_comes_first() {
        let config = ThemeConfig::from_str(
            r#"
            [typography.DEFAULT."code::before"]
            content = "''"

            [typography.light."h1"]
            color = "gray.200"
        "#,
        )
        .unwrap();

        let css = generate_stylesheet(&config, &ClassUsage::default()).unwrap();
        let default_at = css.find(".prose code::before").unwrap();
        let light_at = css.find(".prose-light h1").unwrap();
        assert!(default_at < light_at);
    }

    #[test]
    fn test_important_flag() {
        let config = ThemeConfig::from_str(
            r#"
            [theme]
            important = true

            [typography.light."a"]
            color = "gray.200"
        "#,
        )
        .unwrap();

        let css = generate_stylesheet(&config, &ClassUsage::default()).unwrap();
        assert!(css.contains("color: #e5e7eb !important;"));
    }

    #[test]
    fn test_utilities_scoped_to_usage() {
        let config = ThemeConfig::from_str("").unwrap();
        let usage = usage_of(&["text-gray-200", "text-lg", "flex", "unknowncolor-200"]);

        let css = generate_stylesheet(&config, &usage).unwrap();
        assert!(css.contains(".text-gray-200 {\n  color: #e5e7eb;\n}"));
        // Non-color candidates produce nothing.
        assert!(!css.contains("text-lg"));
        assert!(!css.contains("flex"));
        assert!(!css.contains("unknowncolor"));
    }

    #[test]
    fn test_utility_prefixes() {
        let config = ThemeConfig::from_str("").unwrap();
        let usage = usage_of(&["bg-true-gray-50", "border-gray-600"]);

        let css = generate_stylesheet(&config, &usage).unwrap();
        assert!(css.contains(".bg-true-gray-50 {\n  background-color: #fafafa;\n}"));
        assert!(css.contains(".border-gray-600 {\n  border-color: #4b5563;\n}"));
    }

    #[test]
    fn test_literal_override_utility() {
        let config = ThemeConfig::from_str(
            r##"
            [colors]
            accent = "#ff6600"
        "##,
        )
        .unwrap();
        let usage = usage_of(&["text-accent"]);

        let css = generate_stylesheet(&config, &usage).unwrap();
        assert!(css.contains(".text-accent {\n  color: #ff6600;\n}"));
    }

    #[test]
    fn test_dark_variant_class_strategy() {
        let config = ThemeConfig::from_str(
            r#"
            [theme]
            dark_mode = "class"
        "#,
        )
        .unwrap();
        let usage = usage_of(&["dark:text-gray-200"]);

        let css = generate_stylesheet(&config, &usage).unwrap();
        assert!(css.contains(".dark .dark\\:text-gray-200 {\n  color: #e5e7eb;\n}"));
    }

    #[test]
    fn test_dark_variant_media_strategy() {
        let config = ThemeConfig::from_str(
            r#"
            [theme]
            dark_mode = "media"
        "#,
        )
        .unwrap();
        let usage = usage_of(&["dark:text-gray-200"]);

        let css = generate_stylesheet(&config, &usage).unwrap();
        assert!(css.contains("@media (prefers-color-scheme: dark) {"));
        assert!(css.contains("  .dark\\:text-gray-200 {"));
        assert!(!css.contains(".dark .dark"));
    }

    #[test]
    fn test_stylesheet_filename_format() {
        let filename = stylesheet_filename("body {}");
        assert!(filename.starts_with(".theme-"));
        assert!(filename.ends_with(".css"));
        assert_eq!(filename.len(), ".theme-12345678.css".len());
    }

    #[test]
    fn test_stylesheet_filename_stable() {
        assert_eq!(stylesheet_filename("a {}"), stylesheet_filename("a {}"));
        assert_ne!(stylesheet_filename("a {}"), stylesheet_filename("b {}"));
    }

    #[test]
    fn test_write_stylesheet_cleans_stale_files() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join(".theme-old1.css"), "old").unwrap();
        fs::write(dir.path().join(".theme-old2.css"), "old").unwrap();
        fs::write(dir.path().join("kept.css"), "unrelated").unwrap();

        let written = write_stylesheet(dir.path(), ".a { color: red }").unwrap();

        let themed: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(".theme-"))
            .collect();
        assert_eq!(themed.len(), 1);
        assert_eq!(
            themed[0].file_name().to_string_lossy(),
            written.to_string_lossy()
        );
        assert!(dir.path().join("kept.css").exists());
    }
}
