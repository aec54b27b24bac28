//! Filename slugs.
//!
//! Pure string functions: lowercase ASCII alphanumerics, every other run of
//! characters collapsed to a single `-`, no leading or trailing separator.

/// Used when the identifying field is empty or slugs to nothing.
pub const FALLBACK_SLUG: &str = "documento";

const SEPARATOR: char = '-';

pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(SEPARATOR);
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}
