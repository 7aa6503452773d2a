//! Fixed reference data sent with every shipment.
//!
//! Turvo identifies most enumerations by numeric key. The placeholders
//! here (group, item name, flat freight code) are account-specific and
//! meant to be swapped without touching the transform.

use crate::domain::{EquipmentType, StopKind};

use super::types::{Group, ValueKey};

/// Account- and deployment-specific values used by the transform.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Zone tag sent with the shipment start and end dates.
    pub time_zone: String,

    /// Notes attached to the shipment status.
    pub status_notes: String,

    /// Group every created shipment is assigned to.
    pub group: Group,

    pub trailer_size: ValueKey,
    pub weight_units: ValueKey,
    pub temp_units: ValueKey,

    /// Name of the single item placed on each customer order.
    pub item_name: String,
    pub handling_unit: ValueKey,

    /// Code of the single flat-rate cost line.
    pub freight_line_item: ValueKey,

    /// External-id type for purchase order numbers.
    pub po_external_id: ValueKey,

    /// Appointment tolerance in seconds.
    pub appointment_flex_secs: i64,

    /// Loads lighter than this (in pounds) are LTL.
    pub ltl_weight_threshold: f64,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            time_zone: "America/Chicago".to_string(),
            status_notes: "Created via API".to_string(),
            group: Group {
                id: 7839,
                name: "Drumkit Test".to_string(),
                operation: 0,
            },
            trailer_size: ValueKey::new("1000", "53ft"),
            weight_units: ValueKey::new("1520", "lb"),
            temp_units: ValueKey::new("1510", "°F"),
            item_name: "Proof of Concept Item".to_string(),
            handling_unit: ValueKey::new("35210", "Pallets"),
            freight_line_item: ValueKey::new("1600", "Freight - flat"),
            po_external_id: ValueKey::new("1400", "Purchase order #"),
            appointment_flex_secs: 3600,
            ltl_weight_threshold: 15000.0,
        }
    }
}

/// Turvo equipment type code.
pub fn equipment_type(kind: EquipmentType) -> ValueKey {
    match kind {
        EquipmentType::Van => ValueKey::new("1200", "Van"),
        EquipmentType::Flatbed => ValueKey::new("1204", "Flatbed"),
        EquipmentType::Refrigerated => ValueKey::new("1208", "Refrigerated"),
    }
}

/// Turvo stop type code.
pub fn stop_type(kind: StopKind) -> ValueKey {
    match kind {
        StopKind::Pickup => ValueKey::new("1500", "Pickup"),
        StopKind::Delivery => ValueKey::new("1501", "Delivery"),
    }
}
