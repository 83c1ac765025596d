//! The tracking page's seam to the embedding UI.

use crate::domain::order::Order;
use crate::shared::currency;

/// Placeholder shown while the list loads.
pub const LOADING_TEXT: &str = "Chargement des commandes...";
/// Placeholder row when there is nothing to show.
pub const NO_ORDERS_TEXT: &str = "Aucune commande trouvée";
/// Carrier cell fallback.
pub const CARRIER_PLACEHOLDER: &str = "Non défini";

/// Display projection of one order: the five pre-formatted cells plus the
/// status badge class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub reference: String,
    pub date: String,
    pub total: String,
    pub carrier: String,
    pub status_class: &'static str,
    pub status_label: &'static str,
}

impl OrderRow {
    pub fn project(order: &Order) -> Self {
        Self {
            reference: order.reference.to_string(),
            date: currency::format_date(&order.date),
            total: currency::format_currency(&order.total),
            carrier: order
                .carrier
                .clone()
                .unwrap_or_else(|| CARRIER_PLACEHOLDER.to_string()),
            status_class: order.status.style_class(),
            status_label: order.status.label(),
        }
    }
}

pub trait TrackingView: Send + Sync {
    /// Replace the table body with the loading placeholder.
    fn show_loading(&self);

    /// Replace the table body with the single "no orders" placeholder row.
    fn show_empty(&self);

    /// Render one row per order, in the given sequence.
    fn render_rows(&self, rows: &[OrderRow]);

    /// Show the blocking detail disclosure for an activated row.
    fn show_details(&self, text: &str);
}
