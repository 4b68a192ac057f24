//! Emoji payload normalization.
//!
//! Two payloads that render as the same emoji can differ in stray spaces and
//! in whether the presentation selector (U+FE0F) is present. For keycap
//! sequences the selector belongs between the base character and the
//! combining keycap (U+20E3), never after the keycap.

/// VARIATION SELECTOR-16, forces emoji presentation
pub const PRESENTATION_SELECTOR: char = '\u{FE0F}';

/// COMBINING ENCLOSING KEYCAP
pub const KEYCAP: char = '\u{20E3}';

/// Canonical form used to decide whether two payloads are the same emoji
///
/// Removes all spaces, then applies [`with_emoji_presentation`].
/// Idempotent: `normalize_emoji(&normalize_emoji(p)) == normalize_emoji(p)`.
pub fn normalize_emoji(payload: &str) -> String {
    with_emoji_presentation(&strip_spaces(payload))
}

/// Remove every space character from a payload
pub fn strip_spaces(payload: &str) -> String {
    payload.chars().filter(|c| *c != ' ').collect()
}

/// Ensure the payload carries a presentation selector
///
/// - Keycap sequences get the selector inserted before the trailing keycap
///   unless it is already there.
/// - Anything else gets the selector appended unless it already ends with one.
pub fn with_emoji_presentation(payload: &str) -> String {
    if let Some(base) = payload.strip_suffix(KEYCAP) {
        if base.ends_with(PRESENTATION_SELECTOR) {
            return payload.to_string();
        }
        let mut out = String::with_capacity(payload.len() + PRESENTATION_SELECTOR.len_utf8());
        out.push_str(base);
        out.push(PRESENTATION_SELECTOR);
        out.push(KEYCAP);
        return out;
    }
    if payload.ends_with(PRESENTATION_SELECTOR) {
        return payload.to_string();
    }
    let mut out = payload.to_string();
    out.push(PRESENTATION_SELECTOR);
    out
}

/// Render a payload as space-separated `U+XXXX` code points
///
/// Used in reports, where selectors and spaces are otherwise invisible.
pub fn code_points(payload: &str) -> String {
    payload
        .chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}
