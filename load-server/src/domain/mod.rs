//! Domain types for load creation.
//!
//! These are the transport-independent pieces of the create-load
//! transform: the caller-facing load model, the status code table,
//! equipment inference, PO-number handling and appointment parsing.
//! Nothing here knows about HTTP or the TMS wire schema.

mod appointment;
mod equipment;
mod error;
mod load;
mod po_numbers;
mod status;

pub use appointment::{Appointment, StopKind};
pub use equipment::{EquipmentSelection, EquipmentType};
pub use error::TransformError;
pub use load::{
    BillTo, Carrier, Consignee, CreateLoadRequest, Customer, Pickup, RateData, Specifications,
    StopAddress,
};
pub use po_numbers::split_po_numbers;
pub use status::StatusCode;
