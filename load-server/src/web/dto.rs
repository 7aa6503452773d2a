//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::CreateLoadRequest;

/// Body of `POST /v2/create-load`: a single load or a batch.
#[derive(Debug)]
pub enum LoadsPayload {
    Many(Vec<CreateLoadRequest>),
    One(Box<CreateLoadRequest>),
}

impl LoadsPayload {
    /// Parse a JSON body. A leading `[` selects the batch form.
    ///
    /// The shape is chosen before deserializing so that field errors keep
    /// serde's path and position.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let is_batch = body
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|&b| b == b'[');

        if is_batch {
            serde_json::from_slice(body).map(LoadsPayload::Many)
        } else {
            serde_json::from_slice(body).map(LoadsPayload::One)
        }
    }

    /// The loads in submission order.
    pub fn into_loads(self) -> Vec<CreateLoadRequest> {
        match self {
            LoadsPayload::Many(loads) => loads,
            LoadsPayload::One(load) => vec![*load],
        }
    }
}

/// Query parameters of `GET /v2/view-loads`.
#[derive(Debug, Default, Deserialize)]
pub struct ViewLoadsQuery {
    /// Offset of the first shipment
    pub start: Option<u32>,

    /// Maximum shipments per page
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
}

/// Response to a successful create.
#[derive(Debug, Serialize)]
pub struct CreateLoadsResponse {
    pub message: String,

    /// Number of loads submitted
    pub created: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_object_or_array() {
        let one = LoadsPayload::from_json(br#"{"status": "Covered"}"#).unwrap();
        let loads = one.into_loads();
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].status, "Covered");

        let many =
            LoadsPayload::from_json(b" \n[{\"status\": \"Covered\"}, {\"status\": \"Tendered\"}]")
                .unwrap();
        let statuses: Vec<_> = many.into_loads().into_iter().map(|l| l.status).collect();
        assert_eq!(statuses, vec!["Covered", "Tendered"]);

        let empty = LoadsPayload::from_json(b"[]").unwrap();
        assert!(empty.into_loads().is_empty());
    }

    #[test]
    fn payload_rejects_scalars() {
        assert!(LoadsPayload::from_json(b"42").is_err());
        assert!(LoadsPayload::from_json(br#""load""#).is_err());
        assert!(LoadsPayload::from_json(b"").is_err());
    }

    #[test]
    fn field_errors_keep_position() {
        let err = LoadsPayload::from_json(br#"{"status": "Covered", "totalWeight": "heavy"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid type"), "{err}");
        assert!(err.contains("line 1"), "{err}");
        assert!(!err.contains("untagged"), "{err}");

        let err = LoadsPayload::from_json(br#"[{"totalWeight": "heavy"}]"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid type"), "{err}");
    }
}
