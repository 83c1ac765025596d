//! The form controller's seam to the embedding UI.
//!
//! The SDK never touches widgets. Field text lives in the UI; the controller
//! reads it and pushes style, button and message updates back through this
//! trait. Implementations are expected to be cheap and non-blocking.

use super::fields::Field;
use super::summary::OrderSummary;

/// Visual validity state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    Valid,
    Invalid,
}

/// Visual state of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Original label; the enabled flag is driven separately.
    Idle,
    /// "Traitement en cours..."
    InProgress,
    /// "Commande confirmée !"
    Confirmed,
}

/// A feedback message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Success(text) | Feedback::Error(text) => text,
        }
    }
}

pub trait FormView: Send + Sync {
    /// Current text of a field.
    fn field_value(&self, field: Field) -> String;

    /// Overwrite the text of a field (amount reformatting).
    fn set_field_value(&self, field: Field, value: &str);

    /// Selected shipping option, if any.
    fn shipping_choice(&self) -> Option<String>;

    /// Apply the validity style to a field.
    fn set_field_style(&self, field: Field, style: FieldStyle);

    /// Enable or disable the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Switch the submit control's visual phase.
    fn set_submit_phase(&self, phase: SubmitPhase);

    /// Show a feedback message.
    fn show_feedback(&self, feedback: &Feedback);

    /// Clear every field and the shipping selection.
    fn reset_fields(&self);

    /// Push the recomputed order summary.
    fn set_summary(&self, summary: &OrderSummary);
}
