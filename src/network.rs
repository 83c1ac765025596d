//! Endpoint constants for the storefront backend.

/// Default base URL of the storefront backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Order list endpoint, relative to the base URL.
pub const ORDERS_PATH: &str = "/api/orders";

/// Default order submission endpoint, relative to the base URL. The form's
/// configured action overrides this via the client builder.
pub const SUBMIT_ORDER_PATH: &str = "/commande";
