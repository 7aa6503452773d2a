//! The caller-facing create-load body.
//!
//! Every field defaults when absent so that partial bodies deserialize;
//! the transform decides which omissions are fatal.

use serde::{Deserialize, Serialize};

/// A load as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLoadRequest {
    #[serde(rename = "externalTMSLoadID")]
    pub external_tms_load_id: String,
    #[serde(rename = "freightLoadID")]
    pub freight_load_id: String,
    /// Human-readable status label, e.g. "Covered".
    pub status: String,
    pub customer: Customer,
    pub bill_to: BillTo,
    pub pickup: Pickup,
    pub consignee: Consignee,
    pub carrier: Carrier,
    pub rate_data: RateData,
    pub specifications: Specifications,
    pub in_pallet_count: i32,
    pub out_pallet_count: i32,
    pub num_commodities: i32,
    /// Total weight in pounds.
    pub total_weight: f64,
    pub billable_weight: f64,
    /// Comma-separated purchase order numbers.
    pub po_nums: String,
    pub operator: String,
    pub route_miles: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// The customer's numeric id in the TMS, as a string.
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub ref_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillTo {
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pickup {
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    /// Location name, resolved to a TMS location id before submission.
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub business_hours: String,
    pub ref_number: String,
    pub ready_time: String,
    /// RFC 3339 appointment time. Required.
    pub appt_time: String,
    pub appt_note: String,
    pub timezone: String,
    pub warehouse_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consignee {
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    /// Location name, resolved to a TMS location id before submission.
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub business_hours: String,
    pub ref_number: String,
    pub must_deliver: String,
    /// RFC 3339 appointment time. Required.
    pub appt_time: String,
    pub appt_note: String,
    pub timezone: String,
    pub warehouse_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Carrier {
    pub mc_number: String,
    pub dot_number: String,
    pub name: String,
    pub phone: String,
    pub dispatcher: String,
    pub seal_number: String,
    pub scac: String,
    pub first_driver_name: String,
    pub first_driver_phone: String,
    pub second_driver_name: String,
    pub second_driver_phone: String,
    pub email: String,
    pub dispatch_city: String,
    pub dispatch_state: String,
    #[serde(rename = "externalTMSTruckId")]
    pub external_tms_truck_id: String,
    #[serde(rename = "externalTMSTrailerId")]
    pub external_tms_trailer_id: String,
    pub confirmation_sent_time: String,
    pub confirmation_received_time: String,
    pub dispatched_time: String,
    pub expected_pickup_time: String,
    pub pickup_start: String,
    pub pickup_end: String,
    pub expected_delivery_time: String,
    pub delivery_start: String,
    pub delivery_end: String,
    pub signed_by: String,
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateData {
    pub customer_rate_type: String,
    pub customer_num_hours: f64,
    /// Customer line-haul rate in USD; becomes the flat freight charge.
    pub customer_lh_rate_usd: f64,
    pub fsc_percent: f64,
    pub fsc_per_mile: f64,
    pub carrier_rate_type: String,
    pub carrier_num_hours: f64,
    pub carrier_lh_rate_usd: f64,
    pub carrier_max_rate: f64,
    pub net_profit_usd: f64,
    pub profit_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specifications {
    /// Zero means "not set".
    pub min_temp_fahrenheit: i32,
    /// Zero means "not set".
    pub max_temp_fahrenheit: i32,
    pub liftgate_pickup: bool,
    pub liftgate_delivery: bool,
    pub inside_pickup: bool,
    pub inside_delivery: bool,
    pub tarps: bool,
    pub oversized: bool,
    pub hazmat: bool,
    pub straps: bool,
    pub permits: bool,
    pub escorts: bool,
    pub seal: bool,
    pub custom_bonded: bool,
    pub labor: bool,
}

/// The parts of a pickup or consignee that route construction needs.
#[derive(Debug, Clone, Copy)]
pub struct StopAddress<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub appt_time: &'a str,
    pub appt_note: &'a str,
    pub timezone: &'a str,
}

impl StopAddress<'_> {
    /// "City, State" as used for lane endpoints.
    pub fn place(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl Pickup {
    pub fn address(&self) -> StopAddress<'_> {
        StopAddress {
            name: &self.name,
            city: &self.city,
            state: &self.state,
            appt_time: &self.appt_time,
            appt_note: &self.appt_note,
            timezone: &self.timezone,
        }
    }
}

impl Consignee {
    pub fn address(&self) -> StopAddress<'_> {
        StopAddress {
            name: &self.name,
            city: &self.city,
            state: &self.state,
            appt_time: &self.appt_time,
            appt_note: &self.appt_note,
            timezone: &self.timezone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_body() {
        let json = r#"{
            "pickup": {"name": "test", "apptTime": "2023-10-01T08:00:00Z", "city": "Chicago", "state": "IL", "country": "USA"},
            "consignee": {"name": "test", "apptTime": "2023-10-01T17:00:00Z", "city": "Los Angeles", "state": "CA"},
            "status": "Covered",
            "customer": {"name": "Test Customer", "externalTMSId": "973069"},
            "specifications": {"minTempFahrenheit": 32, "maxTempFahrenheit": 75},
            "totalWeight": 10000
        }"#;

        let load: CreateLoadRequest = serde_json::from_str(json).unwrap();
        assert_eq!(load.status, "Covered");
        assert_eq!(load.customer.external_tms_id, "973069");
        assert_eq!(load.pickup.city, "Chicago");
        assert_eq!(load.consignee.appt_time, "2023-10-01T17:00:00Z");
        assert_eq!(load.specifications.min_temp_fahrenheit, 32);
        assert_eq!(load.total_weight, 10000.0);
        assert!(load.po_nums.is_empty());
        assert_eq!(load.rate_data, RateData::default());
    }

    #[test]
    fn deserializes_renamed_identifiers() {
        let json = r#"{
            "externalTMSLoadID": "L-1",
            "freightLoadID": "F-9",
            "carrier": {"externalTMSTruckId": "T1", "externalTMSTrailerId": "TR2", "mcNumber": "MC1"}
        }"#;

        let load: CreateLoadRequest = serde_json::from_str(json).unwrap();
        assert_eq!(load.external_tms_load_id, "L-1");
        assert_eq!(load.freight_load_id, "F-9");
        assert_eq!(load.carrier.external_tms_truck_id, "T1");
        assert_eq!(load.carrier.external_tms_trailer_id, "TR2");
        assert_eq!(load.carrier.mc_number, "MC1");
    }

    #[test]
    fn stop_address_place() {
        let pickup = Pickup {
            city: "Chicago".into(),
            state: "IL".into(),
            ..Pickup::default()
        };
        assert_eq!(pickup.address().place(), "Chicago, IL");
    }
}
