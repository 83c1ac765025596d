//! Order domain — the tracked order record and its lifecycle status.

pub mod client;
pub mod wire;

use crate::shared::OrderRef;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Order lifecycle status.
///
/// The backend and the stored list may use either the canonical or the
/// localized spelling of each code; both parse, case-insensitively.
/// Anything unrecognized maps to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Total mapping from a raw status code.
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "pending" | "en_attente" => OrderStatus::Pending,
            "shipped" | "expedie" => OrderStatus::Shipped,
            "delivered" | "livre" => OrderStatus::Delivered,
            "cancelled" | "annule" => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }

    /// Canonical wire spelling.
    pub fn as_code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Style class of the status badge.
    pub fn style_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pending",
            OrderStatus::Shipped => "status-shipped",
            OrderStatus::Delivered => "status-delivered",
            OrderStatus::Cancelled => "status-cancelled",
        }
    }

    /// Localized badge label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::Shipped => "Expédiée",
            OrderStatus::Delivered => "Livrée",
            OrderStatus::Cancelled => "Annulée",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(OrderStatus::from_code(&code))
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A tracked order, as the backend creates it on submission success or as
/// seeded locally for the demo flow. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub reference: OrderRef,
    pub date: NaiveDate,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    pub status: OrderStatus,
}
