//! Site and theme descriptor management for `site.toml` and `theme.toml`.
//!
//! # Descriptors
//!
//! | File         | Record         | Purpose                                   |
//! |--------------|----------------|-------------------------------------------|
//! | `site.toml`  | `SiteMetadata` | Page head metadata (title, meta, favicon) |
//! | `theme.toml` | `ThemeConfig`  | Design tokens, typography, scan globs     |
//!
//! Both descriptors are immutable value objects for the lifetime of one
//! build: loading is a pure transform from TOML text to a validated record
//! or a [`ConfigError`]. A new site revision replaces the whole record
//! (atomically, via [`handle`]).
//!
//! # Example
//!
//! ```toml
//! # site.toml
//! [site]
//! title = "Carson Bain"
//! language = "en"
//! render = "static"
//!
//! [[meta]]
//! hid = "og:image"
//! property = "og:image"
//! content = "/home-image.jpg"
//!
//! [favicon]
//! href = "/favicon.ico"
//!
//! [integrations]
//! enable = ["content", "tailwindcss"]
//! ```
//!
//! ```toml
//! # theme.toml
//! [scan]
//! content = ["pages/**/*.vue", "content/**/*.md"]
//!
//! [colors]
//! gray = "true-gray"
//!
//! [typography.light."a"]
//! color = "gray.200"
//! ```

pub mod defaults;
mod error;
pub mod handle;
mod site;
mod theme;

pub use error::ConfigError;
pub use handle::{init_site, init_theme, reload_site, reload_theme, site, theme};
pub use site::{
    FaviconLink, IntegrationsConfig, MetaAttribute, MetaTag, RenderMode, SiteInfo, SiteMetadata,
};
pub use theme::{DarkMode, ScanConfig, StyleRules, ThemeConfig, ThemeOptions};
