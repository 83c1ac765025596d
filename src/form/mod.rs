//! Order form controller — field validation state machine, running summary,
//! and AJAX submission.

pub mod fields;
pub mod summary;
pub mod view;

pub use fields::{Field, FieldRegistry};
pub use summary::{shipping_cost, OrderSummary};
pub use view::{Feedback, FieldStyle, FormView, SubmitPhase};

use crate::domain::order::client::OrderGateway;
use crate::shared::currency;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error};

/// Delay between an input event and the full-form revalidation.
const INPUT_DEBOUNCE: Duration = Duration::from_millis(100);
/// Delay before the form resets after a confirmed submission.
const RESET_DELAY: Duration = Duration::from_secs(3);

const MSG_FIX_FIELDS: &str = "Veuillez remplir tous les champs obligatoires correctement.";
const MSG_CONNECTIVITY: &str = "Une erreur de connexion est survenue. Veuillez réessayer.";
const MSG_GENERIC: &str = "Une erreur est survenue.";

/// Handle to the order form page. Construct via [`OrderForm::init`].
pub struct OrderForm {
    registry: FieldRegistry,
    view: Arc<dyn FormView>,
    gateway: Arc<dyn OrderGateway>,
}

impl OrderForm {
    /// Wire the controller, run the initial validation and summary render,
    /// and hand back the page handle.
    pub fn init(view: Arc<dyn FormView>, gateway: Arc<dyn OrderGateway>) -> Arc<Self> {
        let form = Arc::new(Self {
            registry: FieldRegistry::new(),
            view,
            gateway,
        });
        form.validate_form();
        form.update_summary();
        form
    }

    fn validate_field(&self, field: Field) -> bool {
        field.validate(&self.view.field_value(field))
    }

    fn apply_field_style(&self, field: Field, valid: bool) {
        let style = if valid {
            FieldStyle::Valid
        } else {
            FieldStyle::Invalid
        };
        self.view.set_field_style(field, style);
    }

    /// Validate every required field plus the shipping choice, style the
    /// fields, and drive the submit-enabled flag. Returns overall validity.
    pub fn validate_form(&self) -> bool {
        let mut form_valid = true;
        for field in self.registry.required() {
            let valid = self.validate_field(field);
            self.apply_field_style(field, valid);
            if !valid {
                form_valid = false;
            }
        }
        if self.view.shipping_choice().is_none() {
            form_valid = false;
        }
        self.view.set_submit_enabled(form_valid);
        form_valid
    }

    /// Recompute the summary from the current amount text.
    pub fn update_summary(&self) {
        let summary = OrderSummary::from_amount_text(&self.view.field_value(Field::Amount));
        self.view.set_summary(&summary);
    }

    /// Input on a required field: debounce, then revalidate the whole form.
    ///
    /// Earlier pending revalidations are not cancelled; they are idempotent
    /// and the last one wins.
    pub async fn on_field_input(&self, _field: Field) {
        sleep(INPUT_DEBOUNCE).await;
        self.validate_form();
    }

    /// Blur on a required field: immediate single-field style update.
    pub fn on_field_blur(&self, field: Field) {
        let valid = self.validate_field(field);
        self.apply_field_style(field, valid);
    }

    /// Input on the amount field: live summary update, no reformatting.
    pub fn on_amount_input(&self) {
        self.update_summary();
    }

    /// Blur on the amount field: normalize the text, then refresh the
    /// summary.
    pub fn on_amount_blur(&self) {
        let raw = self.view.field_value(Field::Amount);
        if let Some(formatted) = currency::format_amount_field(&raw) {
            self.view.set_field_value(Field::Amount, &formatted);
        }
        self.update_summary();
    }

    /// A shipping option was picked or changed.
    pub fn on_shipping_change(&self) {
        self.validate_form();
    }

    /// Every registry field plus the shipping choice, in wire form.
    fn collect_fields(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .registry
            .all()
            .iter()
            .map(|field| (field.wire_name().to_string(), self.view.field_value(*field)))
            .collect();
        if let Some(shipping) = self.view.shipping_choice() {
            out.push(("shipping".to_string(), shipping));
        }
        out
    }

    /// Submit the order. Every failure is terminal for this attempt; a new
    /// user action is required to try again.
    pub async fn submit(&self) {
        if !self.validate_form() {
            self.view
                .show_feedback(&Feedback::Error(MSG_FIX_FIELDS.to_string()));
            return;
        }

        self.view.set_submit_enabled(false);
        self.view.set_submit_phase(SubmitPhase::InProgress);

        let fields = self.collect_fields();
        debug!(field_count = fields.len(), "submitting order");

        match self.gateway.submit_order(&fields).await {
            Ok(resp) if resp.success => {
                self.view.set_submit_phase(SubmitPhase::Confirmed);
                let reference = resp.reference.unwrap_or_default();
                self.view.show_feedback(&Feedback::Success(format!(
                    "Commande créée avec succès ! Référence: {reference}"
                )));

                sleep(RESET_DELAY).await;
                self.view.reset_fields();
                self.view.set_submit_phase(SubmitPhase::Idle);
                self.view.set_submit_enabled(true);
                self.validate_form();
                self.update_summary();
            }
            Ok(resp) => {
                self.view.set_submit_phase(SubmitPhase::Idle);
                self.view.set_submit_enabled(true);
                let text = match resp.errors {
                    Some(errors) if !errors.is_empty() => render_error_list(&errors),
                    _ => resp.message.unwrap_or_else(|| MSG_GENERIC.to_string()),
                };
                self.view.show_feedback(&Feedback::Error(text));
            }
            Err(err) => {
                error!(error = %err, "order submission failed");
                self.view.set_submit_phase(SubmitPhase::Idle);
                self.view.set_submit_enabled(true);
                self.view
                    .show_feedback(&Feedback::Error(MSG_CONNECTIVITY.to_string()));
            }
        }
    }
}

/// Flatten a field-error map into the list shown to the user.
fn render_error_list(errors: &HashMap<String, Vec<String>>) -> String {
    let mut text = String::from("Erreurs de validation:");
    for messages in errors.values() {
        for message in messages {
            text.push_str("\n- ");
            text.push_str(message);
        }
    }
    text
}
