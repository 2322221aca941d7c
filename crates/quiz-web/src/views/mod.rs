//! HTML views.
//!
//! Pages are assembled from small string builders. Every piece of user
//! supplied text passes through [`escape`] before it reaches the markup.

pub mod layout;
pub mod play;
pub mod quizzes;

/// Escapes text for use in HTML element content and double- or
/// single-quoted attribute values.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
