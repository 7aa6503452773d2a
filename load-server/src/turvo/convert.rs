//! Conversion from a caller's load to a Turvo create-shipment request.
//!
//! The transform is pure: given the load, the two resolved location ids
//! and the reference data it always produces the same request. Timestamps
//! and the status label are validated up front; any failure aborts the
//! whole load.

use crate::domain::{
    Appointment, CreateLoadRequest, EquipmentSelection, StatusCode, StopAddress, StopKind,
    TransformError, split_po_numbers,
};

use super::reference::{ReferenceData, equipment_type, stop_type};
use super::types::{
    Costs, CustomerOrder, CustomerRef, Equipment, ExternalId, Item, Lane, LineItem, LocationId,
    LocationRef, RouteStop, ShipmentRequest, ShipmentStatus, StopAppointment, Temperature,
    ValueKey, ZonedDate,
};

/// Build the create-shipment request for one load.
///
/// `pickup` and `delivery` are the TMS location ids already resolved from
/// the pickup and consignee names.
pub fn transform_load(
    input: &CreateLoadRequest,
    pickup: LocationId,
    delivery: LocationId,
    reference: &ReferenceData,
) -> Result<ShipmentRequest, TransformError> {
    let pickup_address = input.pickup.address();
    let consignee_address = input.consignee.address();

    let pickup_appt = Appointment::parse(
        StopKind::Pickup,
        pickup_address.appt_time,
        pickup_address.timezone,
    )?;
    let delivery_appt = Appointment::parse(
        StopKind::Delivery,
        consignee_address.appt_time,
        consignee_address.timezone,
    )?;

    let status = StatusCode::resolve(&input.status)
        .ok_or_else(|| TransformError::UnknownStatus(input.status.clone()))?;

    let ltl_shipment = input.total_weight < reference.ltl_weight_threshold;

    let selection = EquipmentSelection::classify(&input.specifications);
    let equipment = build_equipment(selection, input.total_weight, reference);

    let lane = Lane {
        start: pickup_address.place(),
        end: consignee_address.place(),
    };

    let po_numbers = split_po_numbers(&input.po_nums);

    let global_route = vec![
        build_stop(
            &pickup_address,
            &pickup_appt,
            pickup,
            StopKind::Pickup,
            &po_numbers,
            reference,
        ),
        build_stop(
            &consignee_address,
            &delivery_appt,
            delivery,
            StopKind::Delivery,
            &po_numbers,
            reference,
        ),
    ];

    let customer_order = build_customer_order(input, &po_numbers, reference);

    Ok(ShipmentRequest {
        ltl_shipment,
        start_date: ZonedDate {
            date: pickup_appt.wall_clock(),
            time_zone: reference.time_zone.clone(),
        },
        end_date: ZonedDate {
            date: delivery_appt.wall_clock(),
            time_zone: reference.time_zone.clone(),
        },
        status: ShipmentStatus {
            code: ValueKey::new(status.key(), input.status.clone()),
            notes: reference.status_notes.clone(),
            description: input.status.clone(),
        },
        groups: vec![reference.group.clone()],
        equipment: vec![equipment],
        lane,
        global_route,
        customer_order: vec![customer_order],
        ..ShipmentRequest::default()
    })
}

/// Build the single equipment entry for a load.
///
/// Weight is truncated to whole pounds. Temperature fields are only
/// filled for refrigerated equipment.
pub fn build_equipment(
    selection: EquipmentSelection,
    total_weight: f64,
    reference: &ReferenceData,
) -> Equipment {
    let mut equipment = Equipment {
        kind: equipment_type(selection.kind),
        size: reference.trailer_size.clone(),
        weight: total_weight as i64,
        weight_units: reference.weight_units.clone(),
        ..Equipment::default()
    };

    if let Some(temp) = selection.temperature {
        equipment.temp = temp;
        equipment.temp_units = reference.temp_units.clone();
    }

    equipment
}

/// Build one route stop.
///
/// The appointment keeps the stop's own offset and timezone name. Both
/// stops of a shipment carry the same PO numbers.
pub fn build_stop(
    address: &StopAddress<'_>,
    appointment: &Appointment,
    location: LocationId,
    kind: StopKind,
    po_numbers: &[String],
    reference: &ReferenceData,
) -> RouteStop {
    RouteStop {
        stop_type: stop_type(kind),
        name: address.name.to_string(),
        location: LocationRef { id: location },
        sequence: kind.sequence(),
        appointment: StopAppointment {
            date: appointment.rfc3339(),
            timezone: appointment.timezone().to_string(),
            flex: reference.appointment_flex_secs,
            has_time: true,
        },
        po_numbers: po_numbers.to_vec(),
        notes: address.appt_note.to_string(),
        ..RouteStop::default()
    }
}

/// Build the customer order: one item, one flat-rate cost line and one
/// external id per PO number.
pub fn build_customer_order(
    input: &CreateLoadRequest,
    po_numbers: &[String],
    reference: &ReferenceData,
) -> CustomerOrder {
    let customer_id = external_customer_id(&input.customer.external_tms_id);
    let specs = &input.specifications;
    let rate = input.rate_data.customer_lh_rate_usd;

    let item = Item {
        name: reference.item_name.clone(),
        handling_qty: input.in_pallet_count,
        handling_unit: reference.handling_unit.clone(),
        is_hazmat: specs.hazmat,
        min_temp: Temperature {
            temp: specs.min_temp_fahrenheit,
            temp_unit: reference.temp_units.clone(),
        },
        max_temp: Temperature {
            temp: specs.max_temp_fahrenheit,
            temp_unit: reference.temp_units.clone(),
        },
        ..Item::default()
    };

    let line_item = LineItem {
        code: reference.freight_line_item.clone(),
        price: rate,
        amount: rate,
        billable: true,
        ..LineItem::default()
    };

    CustomerOrder {
        customer_order_source_id: customer_id,
        customer: CustomerRef {
            id: customer_id,
            name: input.customer.name.clone(),
        },
        items: vec![item],
        costs: Costs {
            total_amount: rate,
            line_item: vec![line_item],
        },
        external_ids: external_ids(po_numbers, reference),
    }
}

/// The customer's TMS id, or 0 when it is empty or not a number.
///
/// The order is still created when the id does not parse, just without
/// a customer link.
pub fn external_customer_id(raw: &str) -> i64 {
    raw.parse::<i64>().ok().unwrap_or_default()
}

fn external_ids(po_numbers: &[String], reference: &ReferenceData) -> Vec<ExternalId> {
    po_numbers
        .iter()
        .map(|po| ExternalId {
            kind: reference.po_external_id.clone(),
            value: po.clone(),
            copy_to_carrier_order: false,
        })
        .collect()
}
