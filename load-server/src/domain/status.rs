//! Shipment status codes.

use std::fmt;

/// Known shipment status labels (lower-cased) and their TMS codes.
///
/// Placeholder codes; replace with the account's status list.
const STATUS_CODES: &[(&str, u16)] = &[
    ("quote active", 2100),
    ("tendered", 2101),
    ("covered", 2102),
    ("dispatched", 2103),
    ("at pickup", 2104),
    ("en route", 2105),
    ("at delivery", 2106),
    ("delivered", 2107),
    ("ready for billing", 2108),
    ("processing", 2109),
    ("carrier paid", 2110),
    ("customer paid", 2111),
    ("completed", 2112),
    ("canceled", 2113),
    ("quote inactive", 2114),
    ("picked up", 2115),
    ("route complete", 2116),
    ("tender - offered", 2117),
    ("tender - accepted", 2118),
    ("tender - rejected", 2119),
    ("draft", 2120),
    ("planned", 2121),
    ("hold", 2122),
    ("loading", 2123),
    ("loaded", 2124),
    ("unloading", 2125),
    ("unloaded", 2126),
    ("arrived at shipper", 2127),
    ("arrived at consignee", 2128),
    ("in transit", 2129),
    ("delayed", 2130),
    ("rescheduled", 2131),
    ("cross dock", 2132),
    ("out for delivery", 2133),
    ("returned", 2134),
    ("claim filed", 2135),
    ("invoiced", 2136),
    ("voided", 2137),
    ("pending", 2138),
    ("booked", 2139),
];

/// A canonical shipment status code, e.g. `2102` for "Covered".
///
/// Only codes from the fixed status table can be constructed, so an
/// unknown label can never turn into a default status.
///
/// # Examples
///
/// ```
/// use load_server::domain::StatusCode;
///
/// let covered = StatusCode::resolve("  Covered ").unwrap();
/// assert_eq!(covered.code(), 2102);
///
/// // Only the leading word of an unknown label is retried
/// assert_eq!(StatusCode::resolve("delivered late"), StatusCode::resolve("delivered"));
///
/// assert!(StatusCode::resolve("archived").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// Resolve a human-readable status label.
    ///
    /// The label is trimmed and lower-cased, then matched exactly against
    /// the table. On a miss the first whitespace-delimited word is tried.
    pub fn resolve(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();

        lookup(&normalized).or_else(|| {
            let first = normalized.split_whitespace().next()?;
            lookup(first)
        })
    }

    /// The numeric code.
    pub fn code(self) -> u16 {
        self.0
    }

    /// The code as the string key used on the wire.
    pub fn key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn lookup(label: &str) -> Option<StatusCode> {
    STATUS_CODES
        .iter()
        .find(|(known, _)| *known == label)
        .map(|&(_, code)| StatusCode(code))
}
