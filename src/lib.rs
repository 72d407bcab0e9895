//! Headmatter - site metadata and theme configuration for static site builds.
//!
//! Two TOML descriptors drive a site build: `site.toml` describes the page
//! head (title, language, meta tag sequence, favicon, integrations) and
//! `theme.toml` describes design tokens, typography rules, and the content
//! globs that scope utility-class stylesheet generation.
//!
//! Loading is a pure transform from text to a validated, immutable record:
//!
//! ```no_run
//! use headmatter::{SiteMetadata, ThemeConfig};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let site = SiteMetadata::from_path(Path::new("site.toml"))?;
//! let theme = ThemeConfig::from_path(Path::new("theme.toml"))?;
//!
//! let head = headmatter::html::render_head_fragment(&site)?;
//! let usage = headmatter::css::scan::scan_content(Path::new("."), &theme)?;
//! let css = headmatter::css::generate_stylesheet(&theme, &usage)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod css;
mod hash;
pub mod html;
pub mod logger;

pub use config::{
    ConfigError, DarkMode, FaviconLink, MetaAttribute, MetaTag, RenderMode, SiteMetadata,
    ThemeConfig,
};
