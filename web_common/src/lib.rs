//! Shared API types for the Muvio order web application.
//!
//! This crate provides the wire contract between the web client and the
//! order-creation endpoint. All types are WASM-compatible.
//!
//! # Architecture
//!
//! - `web_common` - wire types (`CreateOrderRequest`, `SubmitOutcome`)
//! - `order_core` - form state (`OrderSelection`, wizard, groups)
//!
//! The `web_app` crate depends on both: it collects an
//! [`order_core::OrderSelection`] from the form and ships it through the
//! request/outcome types defined here. The endpoint itself is an external
//! collaborator; its success body is opaque and rendered verbatim.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;

// Re-export the order_core aggregate used in the API surface
pub use order_core::{FieldValue, OrderSelection};
