//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn language() -> String {
        "en".into()
    }

    pub fn charset() -> String {
        "utf-8".into()
    }

    pub fn analytics_id() -> Option<String> {
        None
    }

    pub mod favicon {
        pub fn rel() -> String {
            "icon".into()
        }

        pub fn mime_type() -> String {
            "image/x-icon".into()
        }

        pub fn href() -> String {
            "/favicon.ico".into()
        }
    }
}

// ============================================================================
// [scan] Section Defaults
// ============================================================================

pub mod scan {
    pub fn content() -> Vec<String> {
        vec![
            "components/**/*.{vue,js}".into(),
            "layouts/**/*.vue".into(),
            "pages/**/*.vue".into(),
            "content/**/*.md".into(),
        ]
    }
}
