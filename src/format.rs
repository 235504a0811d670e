//! Plain-text and JSON output for page windows.

use crate::controls::PageControls;
use crate::window::DisplayToken;

/// Render tokens as a single line, bracketing the current page.
///
/// ```
/// use pagewin::format::render_text;
/// use pagewin::window::compute_window;
///
/// let tokens = compute_window(50, 100, 2).unwrap();
/// assert_eq!(render_text(&tokens, 50), "1 … 48 49 [50] 51 52 … 100");
/// ```
pub fn render_text(tokens: &[DisplayToken], current: usize) -> String {
    tokens
        .iter()
        .map(|token| match token.as_page() {
            Some(page) if page == current => format!("[{page}]"),
            _ => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_json(controls: &PageControls) -> serde_json::Result<String> {
    serde_json::to_string(controls)
}
