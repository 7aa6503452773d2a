//! Stop appointments.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat};

use super::error::TransformError;

/// Which end of the shipment a stop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopKind {
    Pickup,
    Delivery,
}

impl StopKind {
    /// Position of the stop in the route (pickup first).
    pub fn sequence(self) -> u32 {
        match self {
            StopKind::Pickup => 0,
            StopKind::Delivery => 1,
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopKind::Pickup => f.write_str("pickup"),
            StopKind::Delivery => f.write_str("consignee"),
        }
    }
}

/// A parsed appointment time together with the stop's own timezone name.
///
/// The instant keeps the UTC offset it was written with, so formatting it
/// again reproduces the caller's wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    at: DateTime<FixedOffset>,
    timezone: String,
}

impl Appointment {
    /// Parse an RFC 3339 appointment time for the given stop.
    ///
    /// An empty or malformed value is an error naming the stop.
    pub fn parse(stop: StopKind, raw: &str, timezone: &str) -> Result<Self, TransformError> {
        let at = DateTime::parse_from_rfc3339(raw).map_err(|source| {
            TransformError::InvalidApptTime {
                stop,
                value: raw.to_string(),
                source,
            }
        })?;

        Ok(Self {
            at,
            timezone: timezone.to_string(),
        })
    }

    pub fn at(&self) -> DateTime<FixedOffset> {
        self.at
    }

    /// The stop-local timezone name as supplied by the caller.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// RFC 3339 at second precision, `Z` for a zero offset.
    pub fn rfc3339(&self) -> String {
        self.at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Wall-clock time with a literal `Z` suffix.
    ///
    /// The offset is dropped, not applied: `08:00-05:00` becomes
    /// `08:00:00Z`. Shipment-level dates are sent this way alongside a
    /// fixed zone tag.
    pub fn wall_clock(&self) -> String {
        self.at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}
