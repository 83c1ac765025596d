//! Order tracking page controller — load sequence, row projection, and the
//! external add/refresh surface.

pub mod archive;
pub mod hotkey;
pub mod view;

pub use archive::{sample_orders, OrderArchive, STORAGE_KEY};
pub use hotkey::{KeyChord, Modifiers};
pub use view::{OrderRow, TrackingView, CARRIER_PLACEHOLDER, LOADING_TEXT, NO_ORDERS_TEXT};

use crate::domain::order::client::OrderGateway;
use crate::domain::order::Order;
use crate::shared::currency;

use async_lock::RwLock;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Handle to the tracking page. Construct via [`TrackingPage::init`] and
/// pass the handle to any script that needs the external surface.
pub struct TrackingPage {
    view: Arc<dyn TrackingView>,
    gateway: Arc<dyn OrderGateway>,
    archive: OrderArchive,
    /// Orders behind the currently rendered rows, for detail lookups.
    displayed: RwLock<Vec<Order>>,
}

impl TrackingPage {
    /// Wire the controller, run the initial load, and hand back the handle.
    pub async fn init(
        view: Arc<dyn TrackingView>,
        gateway: Arc<dyn OrderGateway>,
        archive: OrderArchive,
    ) -> Arc<Self> {
        let page = Arc::new(Self {
            view,
            gateway,
            archive,
            displayed: RwLock::new(Vec::new()),
        });
        page.load_and_display().await;
        page
    }

    /// Remote-first load. Any fetch failure is absorbed: the user sees the
    /// locally persisted list (or the empty placeholder), never an error.
    async fn load_orders(&self) -> Vec<Order> {
        let orders = match self.gateway.fetch_orders().await {
            Ok(orders) => {
                if orders.is_empty() {
                    debug!("server returned no orders");
                }
                orders
            }
            Err(err) => {
                warn!(error = %err, "could not load orders from the server");
                Vec::new()
            }
        };

        if orders.is_empty() {
            self.archive.load()
        } else {
            orders
        }
    }

    async fn load_and_display(&self) {
        self.view.show_loading();
        let orders = self.load_orders().await;
        self.display(orders).await;
    }

    async fn display(&self, orders: Vec<Order>) {
        if orders.is_empty() {
            self.view.show_empty();
        } else {
            let rows: Vec<OrderRow> = orders.iter().map(OrderRow::project).collect();
            self.view.render_rows(&rows);
        }
        *self.displayed.write().await = orders;
    }

    /// Re-run the whole load sequence.
    pub async fn refresh_orders(&self) {
        self.load_and_display().await;
    }

    /// Prepend an order to the persisted list and refresh the display.
    /// Returns whether the order was stored.
    pub async fn add_order(&self, order: Order) -> bool {
        if let Err(err) = self.archive.prepend(order) {
            error!(error = %err, "could not store the new order");
            return false;
        }
        self.refresh_orders().await;
        true
    }

    /// Seed the three demo orders and refresh. Manual-testing helper.
    pub async fn add_sample_order(&self) {
        if let Err(err) = self.archive.seed_samples() {
            error!(error = %err, "could not seed the sample orders");
            return;
        }
        self.refresh_orders().await;
    }

    /// Feed a key event; returns whether the chord was consumed.
    pub async fn handle_key(&self, chord: &KeyChord) -> bool {
        if hotkey::is_sample_seed_chord(chord) {
            self.add_sample_order().await;
            return true;
        }
        false
    }

    /// A rendered row was activated; show its blocking detail disclosure.
    pub async fn on_row_activated(&self, index: usize) {
        let displayed = self.displayed.read().await;
        if let Some(order) = displayed.get(index) {
            self.view.show_details(&detail_text(order));
        }
    }
}

/// The detail disclosure body for one order.
fn detail_text(order: &Order) -> String {
    format!(
        "Détails de la commande {}:\n\nDate: {}\nMontant: {}\nTransporteur: {}\nStatut: {}",
        order.reference,
        currency::format_date(&order.date),
        currency::format_currency(&order.total),
        order.carrier.as_deref().unwrap_or(CARRIER_PLACEHOLDER),
        order.status,
    )
}
