//! Fixed-width string helpers shared by both layouts.
//!
//! Width means `chars().count()`. Counts that would go negative are clamped to
//! zero by the callers (via `saturating_sub`), which yields an empty run.

/// Character count of `text`.
pub(super) fn width(text: &str) -> usize {
    text.chars().count()
}

/// `count` copies of `c`.
pub(super) fn run(c: char, count: usize) -> String {
    std::iter::repeat_n(c, count).collect()
}

/// Left-align `text` in a field of `field` characters. Longer text is returned
/// unchanged.
pub(super) fn pad_right(text: &str, field: usize) -> String {
    let mut out = String::with_capacity(text.len() + field);
    out.push_str(text);
    out.push_str(&run(' ', field.saturating_sub(width(text))));
    out
}

/// Right-align `text` in a field of `field` characters. Longer text is
/// returned unchanged.
pub(super) fn pad_left(text: &str, field: usize) -> String {
    let mut out = run(' ', field.saturating_sub(width(text)));
    out.push_str(text);
    out
}
