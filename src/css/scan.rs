//! Content scanning: glob expansion and utility-class usage extraction.
//!
//! The theme's `[scan].content` globs identify which source files decide
//! the set of utility classes kept in the generated stylesheet. Matched
//! files are tokenized into class candidates; unknown candidates are
//! harmless since generation only queries the ones it can produce.

use crate::config::ThemeConfig;
use crate::log;
use anyhow::{Result, bail};
use regex::Regex;
use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::LazyLock,
};
use walkdir::WalkDir;

/// Class-candidate shape: lowercase utility tokens, optionally with a
/// variant prefix (`dark:text-gray-200`).
static CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][a-z0-9-]*(?::[a-z][a-z0-9-]*)*").unwrap());

// ============================================================================
// Class Usage
// ============================================================================

/// Utility-class candidates collected from scanned content.
#[derive(Debug, Default)]
pub struct ClassUsage {
    classes: HashSet<String>,
    /// Number of files that matched a scan glob.
    pub files_scanned: usize,
}

impl ClassUsage {
    /// Check whether a class candidate was seen in scanned content.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate candidates in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Record a candidate directly (bypassing a filesystem scan).
    pub fn insert(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }
}

// ============================================================================
// Glob Translation
// ============================================================================

/// Compile a glob pattern into an anchored regex.
///
/// Supported syntax: `*` (within one path segment), `?`, `**` (across
/// segments), and `{a,b}` alternation with literal alternatives.
pub fn glob_to_regex(glob: &str) -> Result<Regex> {
    Ok(Regex::new(&translate(glob)?)?)
}

fn translate(glob: &str) -> Result<String> {
    let mut re = String::from("^");
    let mut chars = glob.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    if chars.peek() == Some(&'/') {
                        chars.next();
                        // `**/` also matches zero directories
                        re.push_str("(?:.*/)?");
                    } else {
                        re.push_str(".*");
                    }
                } else {
                    re.push_str("[^/]*");
                }
            }
            '?' => re.push_str("[^/]"),
            '{' => {
                let mut body = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => bail!("nested `{{` in `{glob}`"),
                        Some(inner) => body.push(inner),
                        None => bail!("unclosed `{{` in `{glob}`"),
                    }
                }
                let alternatives: Vec<String> =
                    body.split(',').map(|alt| regex::escape(alt.trim())).collect();
                re.push_str(&format!("(?:{})", alternatives.join("|")));
            }
            '}' => bail!("unmatched `}}` in `{glob}`"),
            _ => re.push_str(&regex::escape(&c.to_string())),
        }
    }

    re.push('$');
    Ok(re)
}

// ============================================================================
// Content Scan
// ============================================================================

/// Walk `root` and collect class candidates from files matching the
/// theme's scan globs.
///
/// Globs are matched against `/`-separated paths relative to `root`;
/// tilde-expanded absolute patterns are matched against the full path.
pub fn scan_content(root: &Path, config: &ThemeConfig) -> Result<ClassUsage> {
    let patterns = config
        .scan
        .content
        .iter()
        .map(|glob| glob_to_regex(&shellexpand::tilde(glob)))
        .collect::<Result<Vec<_>>>()?;

    let mut usage = ClassUsage::default();

    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        let absolute = path.to_string_lossy().replace('\\', "/");

        if !patterns
            .iter()
            .any(|re| re.is_match(&relative) || re.is_match(&absolute))
        {
            continue;
        }

        let bytes = fs::read(path)?;
        extract_classes(&String::from_utf8_lossy(&bytes), &mut usage.classes);
        usage.files_scanned += 1;
    }

    log!(
        "scan";
        "{} files scanned, {} class candidates",
        usage.files_scanned,
        usage.len()
    );

    Ok(usage)
}

/// Tokenize text into class candidates.
fn extract_classes(text: &str, classes: &mut HashSet<String>) {
    for candidate in CANDIDATE.find_iter(text) {
        classes.insert(candidate.as_str().to_owned());
    }
}

// ============================================================================
// Tests
// ============================================================================
