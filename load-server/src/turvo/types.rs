//! Turvo API DTOs.
//!
//! The create-shipment body is deeply nested and code-keyed. Every field
//! the API knows about is modelled so that unset parts serialize as their
//! zero values, the way the API expects them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Turvo code table entry: a numeric key and its display value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueKey {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub key: String,
}

impl ValueKey {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A Turvo location id, as returned by the locations list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Create shipment
// ---------------------------------------------------------------------------

/// Body of `POST /shipments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    pub ltl_shipment: bool,
    pub start_date: ZonedDate,
    pub end_date: ZonedDate,
    pub status: ShipmentStatus,
    pub groups: Vec<Group>,
    pub contributors: Vec<Contributor>,
    pub equipment: Vec<Equipment>,
    pub lane: Lane,
    pub global_route: Vec<RouteStop>,
    pub skip_distance_calculation: bool,
    pub mode_info: Vec<ModeInfo>,
    pub customer_order: Vec<CustomerOrder>,
    pub carrier_order: Vec<CarrierOrder>,
    #[serde(rename = "use_routing_guide")]
    pub use_routing_guide: bool,
}

/// A date string paired with a named time zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonedDate {
    pub date: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentStatus {
    pub code: ValueKey,
    pub notes: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(rename = "_operation")]
    pub operation: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[serde(rename = "type")]
    pub kind: ValueKey,
    pub contributor_user: ContributorUser,
    #[serde(rename = "_operation")]
    pub operation: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorUser {
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(rename = "_operation")]
    pub operation: i32,
    #[serde(rename = "type")]
    pub kind: ValueKey,
    pub size: ValueKey,
    pub weight: i64,
    pub weight_units: ValueKey,
    pub temp: i32,
    pub temp_units: ValueKey,
    pub shipment_length: i32,
}

/// Origin and destination as "City, State".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub start: String,
    pub end: String,
}

/// One entry of the shipment's `globalRoute`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub global_ship_location_source_id: String,
    pub name: String,
    pub scheduling_type: ValueKey,
    pub stop_type: ValueKey,
    pub timezone: String,
    pub location: LocationRef,
    pub segment_sequence: u32,
    pub layover_time: LayoverTime,
    pub sequence: u32,
    pub state: String,
    pub appointment: StopAppointment,
    pub appointment_confirmation: bool,
    pub planned_appointment_date: PlannedAppointmentDate,
    pub services: Vec<ValueKey>,
    pub po_numbers: Vec<String>,
    pub notes: String,
    pub customer_order: Vec<RouteCustomerOrder>,
    pub carrier_order: Vec<RouteCarrierOrder>,
    pub transportation: Transportation,
    pub fragment_distance: Distance,
    pub distance: Distance,
    #[serde(
        rename = "stop_level_fragment_distance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_level_fragment_distance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: LocationId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoverTime {
    pub value: i32,
    pub units: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopAppointment {
    pub date: String,
    pub timezone: String,
    /// Tolerance around `date`, in seconds.
    pub flex: i64,
    pub has_time: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedAppointmentDate {
    pub scheduling_type: ValueKey,
    pub appointment: PlannedAppointmentWindow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAppointmentWindow {
    pub from: StopAppointment,
    pub to: StopAppointment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCustomerOrder {
    pub customer_id: i64,
    pub customer_order_source_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCarrierOrder {
    pub carrier_id: i64,
    pub carrier_order_source_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    pub mode: ValueKey,
    pub service_type: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub units: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    #[serde(rename = "_operation")]
    pub operation: i32,
    pub source_segment_sequence: String,
    pub mode: ValueKey,
    pub service_type: ValueKey,
    pub total_segment_value: TotalSegmentValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalSegmentValue {
    pub sync: bool,
    pub value: i64,
    pub currency: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub customer_order_source_id: i64,
    pub customer: CustomerRef,
    pub items: Vec<Item>,
    pub costs: Costs,
    pub external_ids: Vec<ExternalId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: i64,
    pub name: String,
}

/// A commodity line on a customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub dimensions: Dimensions,
    pub item_category: ValueKey,
    pub qty: i32,
    pub unit: ValueKey,
    pub handling_qty: i32,
    pub handling_unit: ValueKey,
    pub name: String,
    pub notes: String,
    pub pickup_location: Vec<ItemLocation>,
    pub delivery_location: Vec<ItemLocation>,
    #[serde(rename = "_operation")]
    pub operation: i32,
    pub item_number: String,
    pub nmfc: String,
    pub nmfc_sub: String,
    pub is_hazmat: bool,
    pub stackable: bool,
    pub freight_class: ValueKey,
    pub value: f64,
    pub total_value: f64,
    pub currency: ValueKey,
    pub min_temp: Temperature,
    pub max_temp: Temperature,
    pub stack_dimensions_limit: StackDimensionsLimit,
    pub load_bearing_capacity: LoadBearingCapacity,
    pub max_stack_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: i32,
    pub width: i32,
    pub height: i32,
    pub units: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLocation {
    pub global_ship_location_source_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub temp: i32,
    pub temp_unit: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDimensionsLimit {
    pub height: i32,
    pub width: i32,
    pub unit: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBearingCapacity {
    pub value: i32,
    pub unit: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    pub total_amount: f64,
    pub line_item: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub code: ValueKey,
    pub qty: i32,
    pub price: f64,
    pub amount: f64,
    pub billable: bool,
    pub notes: String,
    #[serde(rename = "_operation")]
    pub operation: i32,
}

/// A reference value attached to an order, e.g. a PO number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalId {
    #[serde(rename = "type")]
    pub kind: ValueKey,
    pub value: String,
    pub copy_to_carrier_order: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierOrder {
    pub carrier_order_source_id: i64,
    pub carrier: CarrierRef,
    pub drivers: Vec<Driver>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRef {
    pub name: String,
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: i64,
    #[serde(rename = "_operation")]
    pub operation: i32,
    pub segment_sequence: u32,
}

// ---------------------------------------------------------------------------
// List responses
// ---------------------------------------------------------------------------

/// Common wrapper of every Turvo list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<D> {
    #[serde(rename = "Status", default)]
    pub status: String,
    pub details: D,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub start: i64,
    pub page_size: i64,
    pub total_records_in_page: i64,
    pub more_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_object_key: Option<String>,
}

/// One page of `GET /shipments/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentPage {
    pub pagination: Pagination,
    pub shipments: Vec<Shipment>,
}

/// A shipment summary as listed by the TMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipment {
    pub id: i64,
    pub custom_id: String,
    pub status: ShipmentState,
    pub customer_order: Option<Vec<ShipmentCustomerOrder>>,
    pub carrier_order: Option<Vec<ShipmentCarrierOrder>>,
    pub created: String,
    pub updated: String,
    pub last_updated_on: String,
    pub created_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentState {
    pub code: ValueKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentCustomerOrder {
    pub id: i64,
    pub customer: Account,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentCarrierOrder {
    pub id: i64,
    pub carrier: Account,
    pub deleted: bool,
}

/// A customer or carrier account with its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub parent_account: ParentAccount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
}

/// One page of `GET /locations/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationPage {
    pub pagination: Pagination,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub created: String,
    pub updated: String,
    pub addresses: Vec<Address>,
    pub phones: Vec<Phone>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Phone {
    pub country_code: String,
    pub number: String,
    pub extension: String,
}
