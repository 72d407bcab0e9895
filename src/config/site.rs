//! `[site]` descriptor configuration (`site.toml`).
//!
//! Contains the page head metadata: title, language, the ordered meta tag
//! sequence, favicon, render target, and integration toggles.

use super::defaults;
use super::error::ConfigError;
use anyhow::{Result, bail};
use educe::Educe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
    sync::LazyLock,
};

/// BCP 47 language tag shape: `en`, `en-US`, `zh-Hans`, ...
static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").unwrap());

// ============================================================================
// Enums
// ============================================================================

/// Rendering target for the generated pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Prerender every page to static HTML at build time (default).
    #[default]
    Static,
    /// Render pages on the server per request.
    Server,
}

/// Attribute axis a meta tag is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttribute {
    /// Standard `name="..."` metadata (viewport, description, twitter:*).
    Name,
    /// RDFa `property="..."` metadata (og:* namespace).
    Property,
}

// ============================================================================
// Root Descriptor
// ============================================================================

/// Root descriptor structure representing site.toml
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMetadata {
    /// Basic site information
    pub site: SiteInfo,

    /// Ordered `<meta>` tag sequence. Order is significant: consuming
    /// frameworks deduplicate by `hid` when present.
    pub meta: Vec<MetaTag>,

    /// Favicon link descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<FaviconLink>,

    /// Enabled integration modules and their settings
    pub integrations: IntegrationsConfig,

    /// User-defined extra fields
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteMetadata {
    /// Parse and validate the descriptor from TOML text.
    pub fn from_str(content: &str) -> Result<Self> {
        let meta: SiteMetadata = toml::from_str(content).map_err(ConfigError::Toml)?;
        meta.validate()?;
        Ok(meta)
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

    /// Check whether an integration module is enabled.
    pub fn has_integration(&self, name: &str) -> bool {
        self.integrations.enable.iter().any(|m| m == name)
    }

    /// Validate descriptor invariants.
    ///
    /// Required fields must be present, the language tag must be BCP 47
    /// shaped, every meta entry keys on exactly one attribute axis, and
    /// duplicate-suppression hints must be unique within the sequence.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            bail!(ConfigError::malformed(
                "site.title",
                "required field is missing or empty"
            ));
        }

        if self.site.language.is_empty() {
            bail!(ConfigError::malformed(
                "site.language",
                "required field is missing or empty"
            ));
        }

        if !LANGUAGE_TAG.is_match(&self.site.language) {
            bail!(ConfigError::malformed(
                "site.language",
                format!("`{}` is not a valid BCP 47 language tag", self.site.language)
            ));
        }

        let mut hints = HashSet::new();
        for (index, tag) in self.meta.iter().enumerate() {
            match (&tag.name, &tag.property) {
                (Some(_), Some(_)) => bail!(ConfigError::malformed(
                    format!("meta[{index}]"),
                    "sets both `name` and `property`; exactly one is allowed"
                )),
                (None, None) => bail!(ConfigError::malformed(
                    format!("meta[{index}]"),
                    "sets neither `name` nor `property`"
                )),
                _ => {}
            }

            if let Some(hid) = &tag.hid
                && !hints.insert(hid.as_str())
            {
                bail!(ConfigError::malformed(
                    "meta",
                    format!("duplicate hid `{hid}`")
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Sections
// ============================================================================

/// `[site]` section in site.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [site]
/// title = "Carson Bain"
/// language = "en"
/// description = "Carson Bain front end developer."
/// render = "static"
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Site title displayed in the browser tab and link previews.
    #[serde(default)]
    pub title: String,

    /// BCP 47 language code for the `<html>` element (e.g., "en", "en-US").
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,

    /// Document character set declaration.
    #[serde(default = "defaults::site::charset")]
    #[educe(Default = defaults::site::charset())]
    pub charset: String,

    /// Site description for SEO meta tags.
    #[serde(default)]
    pub description: String,

    /// Rendering target.
    #[serde(default)]
    pub render: RenderMode,

    /// Analytics property id rendered into the head when set.
    #[serde(default = "defaults::site::analytics_id")]
    #[educe(Default = defaults::site::analytics_id())]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
}

/// One `<meta>` entry in the head sequence.
///
/// # Formats
/// ```toml
/// [[meta]]
/// name = "viewport"
/// content = "width=device-width, initial-scale=1"
///
/// [[meta]]
/// hid = "og:image"
/// property = "og:image"
/// content = "/home-image.jpg"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaTag {
    /// Duplicate-suppression hint, exposed as `data-hid` in rendered markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,

    /// Key on the `name` attribute axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Key on the `property` attribute axis (og:* namespace).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// Tag content value.
    #[serde(default)]
    pub content: String,
}

impl MetaTag {
    /// Get the attribute axis this tag keys on.
    ///
    /// Returns `None` for entries that failed validation (neither axis set).
    pub fn attribute(&self) -> Option<MetaAttribute> {
        match (&self.name, &self.property) {
            (Some(_), None) => Some(MetaAttribute::Name),
            (None, Some(_)) => Some(MetaAttribute::Property),
            _ => None,
        }
    }

    /// Get the metadata key regardless of attribute axis.
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().or(self.property.as_deref())
    }
}

/// `[favicon]` section - favicon `<link>` descriptor.
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FaviconLink {
    /// Link relation (usually "icon").
    #[serde(default = "defaults::site::favicon::rel")]
    #[educe(Default = defaults::site::favicon::rel())]
    pub rel: String,

    /// MIME type served for the icon.
    #[serde(rename = "type", default = "defaults::site::favicon::mime_type")]
    #[educe(Default = defaults::site::favicon::mime_type())]
    pub mime_type: String,

    /// Icon location.
    #[serde(default = "defaults::site::favicon::href")]
    #[educe(Default = defaults::site::favicon::href())]
    pub href: String,
}

/// `[integrations]` section - enabled build modules.
///
/// # Example
/// ```toml
/// [integrations]
/// enable = ["content", "tailwindcss"]
///
/// [integrations.settings.content]
/// "markdown.prism.theme" = "prism-themes/themes/prism-coldark-cold.css"
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IntegrationsConfig {
    /// Enabled module identifiers. Order is irrelevant.
    #[serde(default)]
    pub enable: Vec<String>,

    /// Free-form per-module settings, keyed by module identifier.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub settings: HashMap<String, toml::Value>,
}

// ============================================================================
// Tests
// ============================================================================
