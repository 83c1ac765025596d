//! # Storefront SDK
//!
//! Client-side order flow for a storefront backend: form validation and
//! submission, the running order summary, and the order tracking page with
//! its local-storage fallback.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes/formatting, order domain + wire types, errors
//! 2. **HTTP** — `StorefrontHttp` with anti-forgery header injection
//! 3. **Storage** — The persisted order list behind `KeyValueStore`
//! 4. **Controllers** — `OrderForm` and `TrackingPage` over view traits
//! 5. **High-Level Client** — `StorefrontClient` wiring it all together
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_sdk::prelude::*;
//!
//! let client = StorefrontClient::builder()
//!     .base_url("https://boutique.example")
//!     .csrf_token(&page_token)
//!     .build()?;
//!
//! let form = client.order_form(form_view.clone());
//! form.submit().await;
//!
//! let tracking = client.tracking_page(tracking_view.clone()).await;
//! tracking.refresh_orders().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Endpoint constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with anti-forgery header injection.
pub mod http;

// ── Layer 3: Storage ─────────────────────────────────────────────────────────

/// Local persisted key-value storage.
pub mod storage;

// ── Layer 4: Controllers ─────────────────────────────────────────────────────

/// Order form page controller.
pub mod form;

/// Order tracking page controller.
pub mod tracking;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `StorefrontClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::{currency, OrderRef};

    // Domain types — order
    pub use crate::domain::order::client::{HttpOrderGateway, OrderGateway};
    pub use crate::domain::order::wire::{OrdersResponse, SubmitResponse};
    pub use crate::domain::order::{Order, OrderStatus};

    // Errors
    pub use crate::error::{HttpError, SdkError, StorageError};

    // Network
    pub use crate::network::DEFAULT_BASE_URL;

    // HTTP client
    pub use crate::http::StorefrontHttp;

    // Storage
    pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};

    // Form controller
    pub use crate::form::{
        shipping_cost, Feedback, Field, FieldRegistry, FieldStyle, FormView, OrderForm,
        OrderSummary, SubmitPhase,
    };

    // Tracking controller
    pub use crate::tracking::{
        sample_orders, KeyChord, Modifiers, OrderArchive, OrderRow, TrackingPage, TrackingView,
        CARRIER_PLACEHOLDER, LOADING_TEXT, NO_ORDERS_TEXT,
    };

    // High-level client
    pub use crate::client::{StorefrontClient, StorefrontClientBuilder};
}
