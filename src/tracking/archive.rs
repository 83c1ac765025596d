//! The locally persisted order list — the tracking page's fallback and demo
//! data source.

use crate::domain::order::{Order, OrderStatus};
use crate::error::SdkError;
use crate::shared::OrderRef;
use crate::storage::KeyValueStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::warn;

/// Storage key holding the serialized order list.
pub const STORAGE_KEY: &str = "user_orders";

/// Wholesale read/write access to the persisted order list, newest first.
pub struct OrderArchive {
    store: Arc<dyn KeyValueStore>,
}

impl OrderArchive {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the whole list. Missing or corrupt data reads as empty.
    pub fn load(&self) -> Vec<Order> {
        let Some(raw) = self.store.get(STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(orders) => orders,
            Err(err) => {
                warn!(error = %err, "persisted order list is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the whole list.
    pub fn save(&self, orders: &[Order]) -> Result<(), SdkError> {
        let raw = serde_json::to_string(orders)?;
        self.store.set(STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// Prepend one order, newest first.
    pub fn prepend(&self, order: Order) -> Result<(), SdkError> {
        let mut orders = self.load();
        orders.insert(0, order);
        self.save(&orders)
    }

    /// Seed the three demo orders, replacing whatever is stored.
    pub fn seed_samples(&self) -> Result<(), SdkError> {
        self.save(&sample_orders())
    }
}

/// The literal demo orders behind the manual-testing shortcut.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            reference: OrderRef::from("CMD-2024-001"),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            total: Decimal::new(4599, 2),
            carrier: Some("Chronopost".to_string()),
            status: OrderStatus::Delivered,
        },
        Order {
            reference: OrderRef::from("CMD-2024-002"),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date"),
            total: Decimal::new(2950, 2),
            carrier: Some("Mondial Relay".to_string()),
            status: OrderStatus::Shipped,
        },
        Order {
            reference: OrderRef::from("CMD-2024-003"),
            date: NaiveDate::from_ymd_opt(2024, 1, 25).expect("valid date"),
            total: Decimal::new(6780, 2),
            carrier: Some("Chronopost".to_string()),
            status: OrderStatus::Pending,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn archive() -> OrderArchive {
        OrderArchive::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_missing_list_reads_as_empty() {
        assert!(archive().load().is_empty());
    }

    #[test]
    fn test_corrupt_list_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(STORAGE_KEY, "{not json").unwrap();
        let archive = OrderArchive::new(store);
        assert!(archive.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let archive = archive();
        archive.save(&sample_orders()).unwrap();
        assert_eq!(archive.load(), sample_orders());
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let archive = archive();
        archive.seed_samples().unwrap();
        let mut order = sample_orders()[0].clone();
        order.reference = OrderRef::from("CMD-2024-099");
        archive.prepend(order).unwrap();

        let orders = archive.load();
        assert_eq!(orders.len(), 4);
        assert_eq!(orders[0].reference.as_str(), "CMD-2024-099");
    }

    #[test]
    fn test_seed_replaces_existing_list() {
        let archive = archive();
        let mut order = sample_orders()[0].clone();
        order.reference = OrderRef::from("CMD-OLD");
        archive.prepend(order).unwrap();

        archive.seed_samples().unwrap();
        let orders = archive.load();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].reference.as_str(), "CMD-2024-001");
    }
}
