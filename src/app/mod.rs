//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use crate::graph::SampleRange;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    expression: Option<String>,
    range: SampleRange,
}

impl App {
    /// Create a new application with an empty expression.
    pub const fn new() -> Self {
        Self {
            expression: None,
            range: SampleRange::new(crate::graph::DEFAULT_X_START, crate::graph::DEFAULT_X_END),
        }
    }

    /// Seed the editor with an initial expression.
    pub fn with_expression(mut self, expression: Option<String>) -> Self {
        self.expression = expression;
        self
    }

    /// Set the plot window and resolution.
    pub const fn with_range(mut self, range: SampleRange) -> Self {
        self.range = range;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
