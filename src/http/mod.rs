//! HTTP client layer — `StorefrontHttp` with anti-forgery header injection.

pub mod client;

pub use client::StorefrontHttp;
