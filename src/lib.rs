// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorSession)
    clippy::module_name_repetitions
)]

//! # Texplot
//!
//! A terminal graphing calculator with structural math input.
//!
//! Expressions are edited as single-line LaTeX-like markup where
//! function arguments live inside brace-delimited slots. The editor is
//! structural: templates are inserted and deleted as whole units, the
//! cursor jumps between slots, and braces can never be half-deleted
//! into unbalanced text. The expression is plotted live as you type.
//!
//! ## Architecture
//!
//! Texplot uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Structural markup editing
//! - [`eval`]: Markup preprocessing and math evaluation
//! - [`graph`]: Curve sampling for the plot
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved flag defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod eval;
pub mod graph;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::EditorSession;
    pub use crate::eval::Expr;
    pub use crate::graph::SampleRange;
}
