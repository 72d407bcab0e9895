//! Design-token resolution.
//!
//! Typography rules and scanned utility classes reference colors as
//! `token.shade` (e.g. `gray.200`). Resolution layers the theme's color
//! overrides on top of the built-in palette: an override may redirect a
//! token to another scale (`gray = "true-gray"`) or define a literal color
//! (`accent = "#ff6600"`).

use super::palette;
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

/// Token reference shape: `gray.200`, `true-gray.50`, ...
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z][a-z0-9-]*)\.([0-9]{2,3})$").unwrap());

/// Resolves token references against overrides and the base palette.
pub struct Resolver<'a> {
    overrides: &'a HashMap<String, String>,
}

impl<'a> Resolver<'a> {
    pub fn new(overrides: &'a HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Check whether a value has the `token.shade` reference shape.
    pub fn is_reference(value: &str) -> bool {
        REFERENCE.is_match(value)
    }

    /// Resolve a `token.shade` reference to a concrete color.
    pub fn resolve_reference(&self, reference: &str) -> Option<String> {
        let captures = REFERENCE.captures(reference)?;
        self.resolve(&captures[1], &captures[2])
    }

    /// Resolve a token and shade step to a concrete color.
    ///
    /// An override redirecting the token to another scale takes precedence
    /// over a same-named base scale. Literal overrides carry no shades and
    /// never resolve through this path.
    pub fn resolve(&self, token: &str, shade: &str) -> Option<String> {
        match self.overrides.get(token) {
            Some(value) if value.starts_with('#') => None,
            Some(scale_name) => palette::lookup(scale_name, shade).map(str::to_owned),
            None => palette::lookup(token, shade).map(str::to_owned),
        }
    }

    /// Resolve a shadeless token defined as a literal color override.
    pub fn resolve_literal(&self, token: &str) -> Option<String> {
        self.overrides
            .get(token)
            .filter(|value| palette::is_literal_color(value))
            .cloned()
    }
}
