//! Wire types for the backend's JSON responses.

use super::Order;
use serde::Deserialize;
use std::collections::HashMap;

/// Response to the order submission POST.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    /// Reference of the created order, present on success.
    #[serde(default)]
    pub reference: Option<String>,
    /// Server-provided error or info message.
    #[serde(default)]
    pub message: Option<String>,
    /// Field-level validation errors, keyed by wire field name.
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

/// Response to the order list GET.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_success_shape() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"success": true, "reference": "CMD-42"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.reference.as_deref(), Some("CMD-42"));
        assert!(resp.errors.is_none());
    }

    #[test]
    fn test_submit_response_field_errors_shape() {
        let resp: SubmitResponse = serde_json::from_str(
            r#"{"success": false, "errors": {"email": ["invalid"], "ville": ["required"]}}"#,
        )
        .unwrap();
        assert!(!resp.success);
        let errors = resp.errors.unwrap();
        assert_eq!(errors["email"], vec!["invalid"]);
    }

    #[test]
    fn test_orders_response_missing_list_is_empty() {
        let resp: OrdersResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.orders.is_empty());
    }

    #[test]
    fn test_orders_response_decodes_list() {
        let resp: OrdersResponse = serde_json::from_str(
            r#"{"orders": [
                {"reference": "CMD-1", "date": "2024-01-15", "total": 45.99, "status": "livre"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.orders.len(), 1);
        assert_eq!(resp.orders[0].status, super::super::OrderStatus::Delivered);
    }
}
