//! Info Panel view model
//!
//! Pure presentation over a [`DocumentSession`]: everything here is a
//! string ready for display, with no behavior of its own. Zoom actions go
//! through the session directly.

use super::{DocumentSession, LoadState};

/// Display strings for the sidebar info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub file_name: String,
    pub size: String,
    pub pages: String,
    pub uploaded: Option<String>,
}

impl InfoPanel {
    /// Build the panel for the current session, or `None` when no document
    /// has been loaded ("Upload a PDF to view its information").
    pub fn from_session(session: &DocumentSession) -> Option<Self> {
        let document = session.document()?;

        let pages = match session.state() {
            LoadState::Ready { page_count } => page_count.to_string(),
            _ => "Unknown".to_string(),
        };

        Some(Self {
            file_name: document.display_name.clone(),
            size: format_bytes(document.size_bytes),
            pages,
            uploaded: document.uploaded_at.map(|t| t.to_rfc3339()),
        })
    }
}

/// Human-readable byte size: 1024 base, Bytes/KB/MB/GB/TB, up to two
/// decimals with trailing zeros trimmed.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", trimmed, UNITS[exponent])
}
