//! # Corridor Record Wire Types
//!
//! Mirrors the pricing API's corridor listing response. The engine accepts
//! any JSON object shape that supplies the fields it needs: unknown fields
//! are ignored and absent optional fields default to empty, so upstream
//! schema additions never break deserialization.

use serde::{Deserialize, Serialize};

/// Payment method reference on the funding side of a corridor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodRef {
    /// Method type code, e.g. `bank`, `cash_payin`, `jetco-hkg`.
    #[serde(rename = "type", default)]
    pub method_type: String,
    /// Partner/agent network qualifier. Empty when unqualified.
    #[serde(default)]
    pub partner: String,
}

/// Payout method reference on the destination side of a corridor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutRef {
    /// Payout method type code, e.g. `cash_pickup`, `ewallet`.
    #[serde(rename = "type", default)]
    pub method_type: String,
    /// Partner/agent network delivering the payout. Empty when unqualified.
    #[serde(default)]
    pub partner: String,
    /// ISO-like currency code of the payout.
    #[serde(default)]
    pub currency: String,
}

/// One priced corridor as returned by the pricing API.
///
/// `dest_key` is an opaque identifier for a unique payout configuration
/// (method + partner + currency); records sharing a `dest_key` are merged
/// into one [`PayoutSummary`] by the aggregator.
///
/// `rate` is `Option` so that a record missing it survives deserialization
/// and can be reported as a malformed-input error with its index, rather
/// than failing the whole batch decode anonymously.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorridorRecord {
    /// Payment method funding the transfer.
    #[serde(default)]
    pub source: MethodRef,
    /// Payout method at the destination.
    #[serde(default)]
    pub dest: PayoutRef,
    /// Opaque grouping key for the payout configuration.
    #[serde(default)]
    pub dest_key: String,
    /// Exchange rate, source currency per destination currency.
    /// Opaque to the engine: compared exactly and formatted as-is.
    #[serde(default)]
    pub rate: Option<f64>,
}

/// Per-invocation configuration for a corridor rate lookup.
///
/// Supplied by the caller on every aggregation call; nothing is read from
/// ambient process state. An empty `dest_currency` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    /// ISO country code of the sending side, e.g. `HKG`.
    pub source_country: String,
    /// Currency the transfer is funded in, e.g. `HKD`.
    pub source_currency: String,
    /// ISO country code of the payout side, e.g. `PHL`.
    pub dest_country: String,
    /// Requested payout currency. Empty keeps every corridor.
    pub dest_currency: String,
}

impl RateQuery {
    /// Build a query. `dest_currency` may be empty to disable filtering.
    pub fn new(
        source_country: impl Into<String>,
        source_currency: impl Into<String>,
        dest_country: impl Into<String>,
        dest_currency: impl Into<String>,
    ) -> Self {
        Self {
            source_country: source_country.into(),
            source_currency: source_currency.into(),
            dest_country: dest_country.into(),
            dest_currency: dest_currency.into(),
        }
    }
}

/// One payout option, aggregated across every corridor record that shares
/// its destination key. Ordered by first appearance in the input.
///
/// `title` and `subtitle` are display-ready; their separators (`"\n"`,
/// `", "`, `": "`) are a stable contract the downstream card renderer
/// depends on. `method_type` and `partner` are carried through for
/// display-asset selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutSummary {
    /// Card title, e.g. `to Cash Pickup(Cebuana Lhuillier), 1 HKD:6.98 PHP`.
    pub title: String,
    /// Card subtitle listing the available funding methods.
    pub subtitle: String,
    /// Payout method type code, for asset selection.
    pub method_type: String,
    /// Payout partner code, for asset selection.
    pub partner: String,
}
