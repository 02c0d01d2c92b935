//! Document Session
//!
//! Client-side model of the currently viewed document. A session holds at
//! most one document at a time and walks it through
//! `empty -> loading -> ready | error`. Each load attempt gets a
//! generation-numbered [`LoadTicket`]; completion reports carrying a stale
//! ticket are ignored, so a load that was superseded mid-parse can never
//! leak page counts or errors into its successor.

pub mod exchange;
pub mod panel;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;

// ============================================================================
// Constants
// ============================================================================

/// Minimum zoom factor
pub const ZOOM_MIN: f64 = 0.5;

/// Maximum zoom factor
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom step applied per zoom-in/zoom-out action
pub const ZOOM_STEP: f64 = 0.2;

// ============================================================================
// Types
// ============================================================================

/// Where the current document is in its load lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state")]
pub enum LoadState {
    /// No document loaded yet
    Empty,
    /// Document accepted, rendering library still parsing
    Loading,
    /// Parse succeeded; page count is known
    Ready { page_count: u32 },
    /// Parse failed; the file reference is kept but display falls back
    /// to the message until a new document is loaded
    Error { message: String },
}

/// Descriptor for a document entering the session, as returned by the
/// upload service (or built locally from a dropped file).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub access_url: String,
    pub display_name: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Handle identifying one load attempt. Reports against a superseded
/// ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Client-side state for the currently viewed document.
#[derive(Debug, Clone)]
pub struct DocumentSession {
    document: Option<DocumentDescriptor>,
    state: LoadState,
    zoom: f64,
    generation: u64,
    gate_zoom: bool,
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DocumentSession {
    /// Create an empty session.
    ///
    /// `gate_zoom` controls whether zoom actions require a ready document;
    /// front-end variants disagreed, so both behaviors are supported.
    pub fn new(gate_zoom: bool) -> Self {
        Self {
            document: None,
            state: LoadState::Empty,
            zoom: 1.0,
            generation: 0,
            gate_zoom,
        }
    }

    /// Create a session honoring the deployment's zoom-gating choice.
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.zoom_requires_document)
    }

    pub fn document(&self) -> Option<&DocumentDescriptor> {
        self.document.as_ref()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Page count, known only once the document is ready.
    pub fn page_count(&self) -> Option<u32> {
        match self.state {
            LoadState::Ready { page_count } => Some(page_count),
            _ => None,
        }
    }

    // ========================================================================
    // Load lifecycle
    // ========================================================================

    /// Accept a new document, unconditionally replacing whatever was there.
    ///
    /// Returns the ticket the viewer must present when the rendering
    /// library reports the outcome of this attempt.
    pub fn begin_load(&mut self, document: DocumentDescriptor) -> LoadTicket {
        self.generation += 1;
        self.document = Some(document);
        self.state = LoadState::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Record a successful parse. Ignored if the ticket is stale.
    pub fn resolve_ready(&mut self, ticket: LoadTicket, page_count: u32) {
        if ticket.generation != self.generation {
            return;
        }
        self.state = LoadState::Ready { page_count };
    }

    /// Record a parse failure. Ignored if the ticket is stale.
    pub fn resolve_error(&mut self, ticket: LoadTicket, message: impl Into<String>) {
        if ticket.generation != self.generation {
            return;
        }
        self.state = LoadState::Error {
            message: message.into(),
        };
    }

    // ========================================================================
    // Zoom
    // ========================================================================

    /// Step zoom in by one increment, silently clamped to [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) {
        self.adjust_zoom(ZOOM_STEP);
    }

    /// Step zoom out by one increment, silently clamped to [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) {
        self.adjust_zoom(-ZOOM_STEP);
    }

    fn adjust_zoom(&mut self, delta: f64) {
        if self.gate_zoom && !matches!(self.state, LoadState::Ready { .. }) {
            return;
        }
        self.zoom = (self.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> DocumentDescriptor {
        DocumentDescriptor {
            access_url: format!("/uploads/abc/{}", name),
            display_name: name.to_string(),
            size_bytes: 4096,
            uploaded_at: None,
        }
    }

    #[test]
    fn lifecycle_reaches_ready_with_page_count() {
        let mut session = DocumentSession::default();
        assert_eq!(*session.state(), LoadState::Empty);

        let ticket = session.begin_load(descriptor("act.pdf"));
        assert_eq!(*session.state(), LoadState::Loading);
        assert_eq!(session.page_count(), None);

        session.resolve_ready(ticket, 12);
        assert_eq!(session.page_count(), Some(12));
    }

    #[test]
    fn parse_failure_keeps_file_reference() {
        let mut session = DocumentSession::default();
        let ticket = session.begin_load(descriptor("act.pdf"));

        session.resolve_error(ticket, "Error loading PDF document");
        assert!(matches!(session.state(), LoadState::Error { .. }));
        assert_eq!(session.document().unwrap().display_name, "act.pdf");
    }

    #[test]
    fn superseded_load_cannot_touch_the_new_session() {
        let mut session = DocumentSession::default();
        let first = session.begin_load(descriptor("first.pdf"));
        let second = session.begin_load(descriptor("second.pdf"));

        // Late success from the abandoned first load
        session.resolve_ready(first, 99);
        assert_eq!(*session.state(), LoadState::Loading);
        assert_eq!(session.document().unwrap().display_name, "second.pdf");

        // Late error from the abandoned first load
        session.resolve_error(first, "boom");
        assert_eq!(*session.state(), LoadState::Loading);

        session.resolve_ready(second, 3);
        assert_eq!(session.page_count(), Some(3));
    }

    #[test]
    fn zoom_in_clamps_at_max() {
        let mut session = DocumentSession::default();
        for _ in 0..11 {
            session.zoom_in();
        }
        assert_eq!(session.zoom(), ZOOM_MAX);

        session.zoom_in();
        assert_eq!(session.zoom(), ZOOM_MAX);
    }

    #[test]
    fn zoom_out_clamps_at_min() {
        let mut session = DocumentSession::default();
        for _ in 0..11 {
            session.zoom_out();
        }
        assert_eq!(session.zoom(), ZOOM_MIN);

        session.zoom_out();
        assert_eq!(session.zoom(), ZOOM_MIN);
    }

    #[test]
    fn gated_zoom_waits_for_ready() {
        let mut session = DocumentSession::new(true);
        session.zoom_in();
        assert_eq!(session.zoom(), 1.0);

        let ticket = session.begin_load(descriptor("act.pdf"));
        session.zoom_in();
        assert_eq!(session.zoom(), 1.0);

        session.resolve_ready(ticket, 1);
        session.zoom_in();
        assert!((session.zoom() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn session_picks_up_gating_from_config() {
        let mut gated = DocumentSession::from_config(&ViewerConfig {
            zoom_requires_document: true,
        });
        gated.zoom_in();
        assert_eq!(gated.zoom(), 1.0);

        let mut ungated = DocumentSession::from_config(&ViewerConfig {
            zoom_requires_document: false,
        });
        ungated.zoom_in();
        assert!((ungated.zoom() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn ungated_zoom_applies_before_any_document() {
        let mut session = DocumentSession::new(false);
        session.zoom_in();
        assert!((session.zoom() - 1.2).abs() < 1e-9);
    }
}
