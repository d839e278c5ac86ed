use std::time::{Duration, Instant};

use crate::editor::EditorSession;
use crate::graph::{self, SampleRange};

/// How loudly a toast message is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// The complete application state.
///
/// All state lives here - no global or scattered state. The editor
/// session is the single source of truth for the expression; the curve
/// is a cache the evaluator subscriber refreshes whenever the session's
/// revision moves.
#[derive(Debug, Clone)]
pub struct Model {
    /// The one editing session for this surface.
    pub session: EditorSession,
    /// Plot window and resolution.
    pub range: SampleRange,
    /// Last successfully sampled curve, if any.
    pub curve: Option<Vec<(f64, f64)>>,
    /// Set by [`super::update`] when the user asked to exit.
    pub should_quit: bool,
    toast: Option<Toast>,
    seen_revision: u64,
}

impl Model {
    /// Fresh model with an empty expression.
    pub fn new(range: SampleRange) -> Self {
        Self {
            session: EditorSession::new(),
            range,
            curve: None,
            should_quit: false,
            toast: None,
            seen_revision: 0,
        }
    }

    /// Model seeded with an initial expression, cursor at the end.
    pub fn with_expression(range: SampleRange, expression: &str) -> Self {
        let mut model = Self::new(range);
        model.session = EditorSession::with_text(expression);
        model.refresh_curve();
        model
    }

    /// Whether the session changed since this was last called.
    ///
    /// The event loop uses this as the single "buffer changed"
    /// notification point for both subscribers (renderer, evaluator).
    pub fn take_changed(&mut self) -> bool {
        let revision = self.session.revision();
        let changed = revision != self.seen_revision;
        self.seen_revision = revision;
        changed
    }

    /// Evaluator subscriber: re-sample the curve from the current text.
    ///
    /// Malformed or mid-edit markup degrades to `None` (no curve drawn).
    pub fn refresh_curve(&mut self) {
        self.curve = graph::curve_for(&self.session.current_text(), self.range);
    }

    /// Show a transient status message.
    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// The toast to display, if it has not expired.
    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .filter(|t| t.expires_at > Instant::now())
            .map(|t| (t.message.as_str(), t.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(SampleRange::default())
    }
}
