//! Turvo TMS client and request conversion.
//!
//! Turvo's create-shipment API expects a deeply nested, code-keyed body.
//! This module owns that schema, the fixed reference codes that go into
//! it, the conversion from a caller's load, and the HTTP client that
//! submits and lists shipments.
//!
//! Key characteristics of the API:
//! - Every request carries an `x-api-key` header and a bearer token from
//!   the OAuth password grant
//! - Enumerations are `{key, value}` pairs where only the numeric key is
//!   authoritative
//! - List endpoints wrap their payload as `{"Status": ..., "details": ...}`

mod client;
mod convert;
mod error;
mod mock;
mod reference;
mod types;

pub use client::{TurvoClient, TurvoConfig};
pub use convert::{
    build_customer_order, build_equipment, build_stop, external_customer_id, transform_load,
};
pub use error::TurvoError;
pub use mock::MockTurvoClient;
pub use reference::{ReferenceData, equipment_type, stop_type};
pub use types::*;
