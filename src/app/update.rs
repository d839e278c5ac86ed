use tracing::warn;

use crate::app::model::{Model, ToastLevel};
use crate::editor::Direction;
use crate::eval;

/// All possible events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Insert a plain character at the cursor
    InsertChar(char),
    /// Insert a padded binary operator
    InsertOperator(char),
    /// Insert a named function template, cursor into its first slot
    InsertTemplate(&'static str),
    /// Insert the exponent shorthand `^{}`
    InsertExponent,
    /// Structural cursor move left
    MoveLeft,
    /// Structural cursor move right
    MoveRight,
    /// Structural backspace
    Backspace,
    /// Wipe the whole expression
    Clear,
    /// Evaluate the expression in place (Enter)
    Evaluate,
    /// Exit the application
    Quit,
}

/// Pure state transition: apply one message to the model.
///
/// Editing goes through the session facade only; rejected edits become
/// toasts, never failures. Rendering and curve evaluation are *not*
/// triggered from here - the event loop observes the session's revision
/// afterwards and notifies each subscriber independently.
pub fn update(model: &mut Model, message: Message) {
    match message {
        Message::InsertChar(ch) => model.session.insert_char(ch),
        Message::InsertOperator(op) => model.session.insert_operator(op),
        Message::InsertTemplate(name) => {
            if let Err(err) = model.session.insert_template(name) {
                warn!(template = name, %err, "template insert rejected");
                model.show_toast(ToastLevel::Warning, err.to_string());
            }
        }
        Message::InsertExponent => {
            if let Err(err) = model.session.insert_exponent() {
                warn!(%err, "exponent insert rejected");
                model.show_toast(ToastLevel::Warning, err.to_string());
            }
        }
        Message::MoveLeft => model.session.move_cursor(Direction::Left),
        Message::MoveRight => model.session.move_cursor(Direction::Right),
        Message::Backspace => model.session.backspace(),
        Message::Clear => model.session.clear(),
        Message::Evaluate => evaluate_in_place(model),
        Message::Quit => model.should_quit = true,
    }
}

/// Enter-key behavior: constant expressions are replaced by their
/// value; expressions in `x` are already answered by the plotted curve.
fn evaluate_in_place(model: &mut Model) {
    let text = model.session.current_text();
    match eval::compile(&text) {
        Ok(expr) if expr.contains_var() => {
            model.show_toast(ToastLevel::Info, "expression in x - see the curve");
        }
        Ok(expr) => {
            let value = expr.eval(0.0);
            if value.is_finite() {
                model.session.set_text(&format_result(value));
            } else {
                model.show_toast(ToastLevel::Error, "result is undefined");
            }
        }
        Err(err) => {
            model.show_toast(ToastLevel::Error, err.to_string());
        }
    }
}

/// Trim floating noise so `4` renders as `4`, not `4.000000`.
fn format_result(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 && value.abs() < 1e15 {
        format!("{}", value.round())
    } else {
        format!("{value}")
    }
}
