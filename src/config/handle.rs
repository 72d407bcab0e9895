//! Global descriptor handles with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic replacement, so a build
//! tool can re-read `site.toml`/`theme.toml` while readers keep working on
//! the record they already loaded.
//!
//! # Usage
//!
//! ```ignore
//! use headmatter::config::{init_site, site};
//!
//! init_site(SiteMetadata::from_path(path)?);
//! let s = site();
//! render_head_fragment(&s)?;  // Arc auto-derefs to &SiteMetadata
//! ```

use super::site::SiteMetadata;
use super::theme::ThemeConfig;
use crate::hash;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::{
    fs,
    path::Path,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

// =============================================================================
// Global State
// =============================================================================

/// Global site descriptor storage with atomic replacement support.
pub static SITE: LazyLock<ArcSwap<SiteMetadata>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteMetadata::default()));

/// Global theme descriptor storage with atomic replacement support.
pub static THEME: LazyLock<ArcSwap<ThemeConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(ThemeConfig::default()));

/// Hash of the last loaded site.toml content.
static SITE_HASH: AtomicU64 = AtomicU64::new(0);

/// Hash of the last loaded theme.toml content.
static THEME_HASH: AtomicU64 = AtomicU64::new(0);

// =============================================================================
// Public API
// =============================================================================

/// Get the current site descriptor as `Arc<SiteMetadata>`.
///
/// Lock-free read via atomic load. The Arc stays valid even if the global
/// is replaced while the caller holds it.
#[inline]
pub fn site() -> Arc<SiteMetadata> {
    SITE.load_full()
}

/// Get the current theme descriptor as `Arc<ThemeConfig>`.
#[inline]
pub fn theme() -> Arc<ThemeConfig> {
    THEME.load_full()
}

/// Initialize the global site descriptor (called once at startup).
#[inline]
pub fn init_site(meta: SiteMetadata) {
    SITE.store(Arc::new(meta));
}

/// Initialize the global theme descriptor (called once at startup).
#[inline]
pub fn init_theme(config: ThemeConfig) {
    THEME.store(Arc::new(config));
}

/// Replace the site descriptor atomically from `site.toml`.
///
/// Returns `true` if the descriptor was actually updated, `false` if the
/// file content matches the last load.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation; the
/// previous descriptor stays in place.
pub fn reload_site(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)?;

    let new_hash = hash::compute(content.as_bytes());
    if new_hash == SITE_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let meta = SiteMetadata::from_str(&content)?;
    SITE.store(Arc::new(meta));
    SITE_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

/// Replace the theme descriptor atomically from `theme.toml`.
///
/// Same change-detection contract as [`reload_site`].
pub fn reload_theme(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)?;

    let new_hash = hash::compute(content.as_bytes());
    if new_hash == THEME_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let config = ThemeConfig::from_str(&content)?;
    THEME.store(Arc::new(config));
    THEME_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reload_site_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");

        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[site]\ntitle = \"First\"").unwrap();
        assert!(reload_site(&path).unwrap());
        assert_eq!(site().site.title, "First");

        // Unchanged content is a no-op.
        assert!(!reload_site(&path).unwrap());

        fs::write(&path, "[site]\ntitle = \"Second\"\n").unwrap();
        assert!(reload_site(&path).unwrap());
        assert_eq!(site().site.title, "Second");
    }

    #[test]
    fn test_reload_theme_keeps_previous_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        fs::write(&path, "[theme]\nimportant = true\n").unwrap();
        assert!(reload_theme(&path).unwrap());
        assert!(theme().theme.important);

        // Invalid content fails the reload but leaves the old record.
        fs::write(&path, "[scan]\ncontent = []\n").unwrap();
        assert!(reload_theme(&path).is_err());
        assert!(theme().theme.important);
    }
}
