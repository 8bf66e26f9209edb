//! Extractors whose rejections render as JSON [`Error`]s.
//!
//! [`Error`]: crate::handler::Error

mod enhanced_json;
mod enhanced_path;
mod validated_json;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::validated_json::ValidateJson;

/// Keeps the first lines of a rejection message and caps its length.
fn sanitize_error_message(message: &str, max_lines: usize, max_chars: usize) -> String {
    message
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect()
}
