//! Built-in base color palette.
//!
//! Scale values mirror the conventional utility-framework gray families.
//! Theme color overrides resolve against these scales by name.

/// Shade steps available on every scale, lightest first.
pub const SHADES: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// Base scales: (name, hex value per shade step).
const SCALES: &[(&str, [&str; 10])] = &[
    (
        "gray",
        [
            "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563",
            "#374151", "#1f2937", "#111827",
        ],
    ),
    (
        "true-gray",
        [
            "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252",
            "#404040", "#262626", "#171717",
        ],
    ),
    (
        "warm-gray",
        [
            "#fafaf9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c", "#57534e",
            "#44403c", "#292524", "#1c1917",
        ],
    ),
    (
        "blue-gray",
        [
            "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569",
            "#334155", "#1e293b", "#0f172a",
        ],
    ),
];

/// Look up a scale by name.
pub fn scale(name: &str) -> Option<&'static [&'static str; 10]> {
    SCALES
        .iter()
        .find(|(scale_name, _)| *scale_name == name)
        .map(|(_, values)| values)
}

/// Look up a concrete color by scale name and shade step.
pub fn lookup(name: &str, shade: &str) -> Option<&'static str> {
    let values = scale(name)?;
    let index = SHADES.iter().position(|s| *s == shade)?;
    Some(values[index])
}

/// Check whether a value is a literal hex color (`#rgb`, `#rrggbb`, ...).
pub fn is_literal_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
