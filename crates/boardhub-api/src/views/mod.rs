//! Built-in HTML views.
//!
//! Deliberately minimal: the monitoring-view boundary is
//! `render(queues, access_mode) -> Router`, so a real queue-UI widget
//! library can replace the board module without touching the core.

pub mod auth_failed;
pub mod board;
pub mod dashboard;

/// Escape text interpolated into HTML.
pub(crate) fn escape(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
