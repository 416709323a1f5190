//! # Corridor Aggregation
//!
//! Turns the pricing API's flat corridor listing into ordered payout-option
//! summaries: filter by the requested payout currency, group by destination
//! key, deduplicate rates, and format the funding-method lists.
//!
//! The computation is pure and synchronous. It runs strictly after the
//! fetch completes and consumes the full result set; there is no streaming
//! or partial aggregation. All accumulators are local to one call.

use std::collections::HashMap;

use crate::names::NameResolver;
use crate::record::{CorridorRecord, PayoutSummary, RateQuery};

/// Aggregation failure. A malformed batch yields no partial result:
/// summaries built from half a listing would misquote the available
/// options, so the whole call fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// A corridor record is missing a required field or carries an
    /// unusable value in it.
    #[error("invalid corridor record at index {index}: missing or invalid {field}")]
    InvalidRecord {
        /// Zero-based position of the record in the input sequence.
        index: usize,
        /// The offending field, in wire naming.
        field: &'static str,
    },
}

/// A validated view of one record: same data, rate guaranteed present.
struct ValidRecord<'a> {
    record: &'a CorridorRecord,
    rate: f64,
}

/// Accumulator for one destination key.
struct Group {
    with_rate: String,
    without_rate: String,
    rates: Vec<f64>,
    method_type: String,
    partner: String,
}

/// Aggregate corridor records into ordered payout summaries.
///
/// Records are filtered by `query.dest_currency` (case-insensitive; empty
/// disables the filter), grouped by `dest_key` in first-seen order, and
/// finalized into one [`PayoutSummary`] per group. An input where every
/// record is filtered out produces an empty vector, not an error — the
/// caller decides how to present "no options".
///
/// Display formatting contract (pinned by golden tests):
/// - one distinct rate →
///   `to {payout}, 1 {source_currency}:{rate} {dest_currency}` /
///   `You could send money via\n{label}, {label}, …`
/// - several distinct rates → `to {payout}` (no single rate is
///   representative) / `Send via\n{label}: {rate}\n{label}: {rate}…`
pub fn aggregate(
    records: &[CorridorRecord],
    query: &RateQuery,
    resolver: &NameResolver,
) -> Result<Vec<PayoutSummary>, AggregateError> {
    let valid = validate(records)?;

    let filter = query.dest_currency.to_lowercase();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for ValidRecord { record, rate } in &valid {
        if !filter.is_empty() && record.dest.currency.to_lowercase() != filter {
            continue;
        }
        let label = resolver.source_label(&record.source.method_type);
        match index.get(record.dest_key.as_str()) {
            Some(&at) => {
                let group = &mut groups[at];
                group.with_rate.push_str(&format!("\n{label}: {rate}"));
                group.without_rate.push_str(&format!(", {label}"));
                // Exact equality by contract: a rate joins the distinct
                // set only when byte-for-byte the same number.
                if !group.rates.contains(rate) {
                    group.rates.push(*rate);
                }
            }
            None => {
                index.insert(record.dest_key.as_str(), groups.len());
                groups.push(Group {
                    with_rate: format!("{label}: {rate}"),
                    without_rate: label,
                    rates: vec![*rate],
                    method_type: record.dest.method_type.clone(),
                    partner: record.dest.partner.clone(),
                });
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|group| finalize(group, query, resolver))
        .collect())
}

/// Validate the whole batch up front. Even records the currency filter
/// would drop must be well-formed: all-or-nothing per request.
fn validate(records: &[CorridorRecord]) -> Result<Vec<ValidRecord<'_>>, AggregateError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if record.dest_key.is_empty() {
                return Err(AggregateError::InvalidRecord {
                    index,
                    field: "dest_key",
                });
            }
            if record.dest.method_type.is_empty() {
                return Err(AggregateError::InvalidRecord {
                    index,
                    field: "dest.type",
                });
            }
            match record.rate {
                Some(rate) if rate.is_finite() => Ok(ValidRecord { record, rate }),
                _ => Err(AggregateError::InvalidRecord {
                    index,
                    field: "rate",
                }),
            }
        })
        .collect()
}

fn finalize(group: Group, query: &RateQuery, resolver: &NameResolver) -> PayoutSummary {
    let dest_label =
        resolver.payout_label(&group.method_type, &query.dest_country, &group.partner);

    let (title, subtitle) = if group.rates.len() == 1 {
        (
            format!(
                "to {dest_label}, 1 {}:{} {}",
                query.source_currency, group.rates[0], query.dest_currency
            ),
            format!("You could send money via\n{}", group.without_rate),
        )
    } else {
        // Multiple distinct rates: the title carries the payout label
        // alone, the per-method rates live in the subtitle.
        (
            format!("to {dest_label}"),
            format!("Send via\n{}", group.with_rate),
        )
    };

    PayoutSummary {
        title,
        subtitle,
        method_type: group.method_type,
        partner: group.partner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MethodRef, PayoutRef};

    fn record(source_type: &str, dest_key: &str, dest_type: &str, currency: &str, rate: f64) -> CorridorRecord {
        CorridorRecord {
            source: MethodRef {
                method_type: source_type.to_string(),
                partner: String::new(),
            },
            dest: PayoutRef {
                method_type: dest_type.to_string(),
                partner: String::new(),
                currency: currency.to_string(),
            },
            dest_key: dest_key.to_string(),
            rate: Some(rate),
        }
    }

    fn query(dest_currency: &str) -> RateQuery {
        RateQuery::new("HKG", "HKD", "PHL", dest_currency)
    }

    fn resolver() -> NameResolver {
        NameResolver::builtin()
    }

    #[test]
    fn single_rate_group_gets_rate_in_title() {
        let records = vec![record("bank", "k1", "bank_account", "PHP", 6.312)];
        let out = aggregate(&records, &query("PHP"), &resolver()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "to Bank Account, 1 HKD:6.312 PHP");
        assert_eq!(out[0].subtitle, "You could send money via\nBank Account");
    }

    #[test]
    fn multi_rate_group_title_has_no_rate_literal() {
        let records = vec![
            record("circlek", "k1", "bank_account", "PHP", 6.312),
            record("jetco", "k1", "bank_account", "PHP", 6.345),
        ];
        let out = aggregate(&records, &query("PHP"), &resolver()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "to Bank Account");
        assert_eq!(
            out[0].subtitle,
            "Send via\nCircle K: 6.312\nJET PAYMENT: 6.345"
        );
    }

    #[test]
    fn currency_filter_is_case_insensitive() {
        let records = vec![
            record("bank", "k1", "bank_account", "php", 6.3),
            record("bank", "k2", "cash_pickup", "USD", 0.128),
        ];
        let out = aggregate(&records, &query("PHP"), &resolver()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].method_type, "bank_account");
    }

    #[test]
    fn empty_filter_keeps_every_currency() {
        let records = vec![
            record("bank", "k1", "bank_account", "PHP", 6.3),
            record("bank", "k2", "cash_pickup", "USD", 0.128),
        ];
        let out = aggregate(&records, &query(""), &resolver()).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn fully_filtered_input_yields_empty_not_error() {
        let records = vec![record("bank", "k1", "bank_account", "VND", 2900.0)];
        let out = aggregate(&records, &query("PHP"), &resolver()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn rates_deduplicate_in_first_seen_order() {
        let records = vec![
            record("bank", "k1", "bank_account", "PHP", 5.0),
            record("circlek", "k1", "bank_account", "PHP", 5.0),
            record("jetco", "k1", "bank_account", "PHP", 7.0),
            record("visa", "k1", "bank_account", "PHP", 5.0),
        ];
        let out = aggregate(&records, &query("PHP"), &resolver()).unwrap();
        assert_eq!(out.len(), 1);
        // Two distinct rates [5, 7] → multi-rate branch, all four funding
        // lines preserved with their own rate annotation.
        assert_eq!(out[0].title, "to Bank Account");
        assert_eq!(
            out[0].subtitle,
            "Send via\nBank Account: 5\nCircle K: 5\nJET PAYMENT: 7\nVisa: 5"
        );
    }

    #[test]
    fn groups_emerge_in_first_seen_dest_key_order() {
        let records = vec![
            record("bank", "k2", "cash_pickup", "PHP", 6.1),
            record("bank", "k1", "bank_account", "PHP", 6.2),
            record("circlek", "k2", "cash_pickup", "PHP", 6.1),
        ];
        let out = aggregate(&records, &query("PHP"), &resolver()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].method_type, "cash_pickup");
        assert_eq!(out[1].method_type, "bank_account");
    }

    #[test]
    fn end_to_end_two_identical_rates_one_summary() {
        let records = vec![
            record("bank", "K1", "bank_account", "PHP", 3.1),
            record("ewallet", "K1", "bank_account", "PHP", 3.1),
        ];
        let out = aggregate(&records, &query("PHP"), &resolver()).unwrap();
        assert_eq!(out.len(), 1);
        // One distinct rate → single-rate branch.
        assert_eq!(out[0].subtitle, "You could send money via\nBank Account, E-Wallet");
        assert_eq!(out[0].title, "to Bank Account, 1 HKD:3.1 PHP");
        assert_eq!(out[0].title.matches("3.1").count(), 1);
    }

    #[test]
    fn payout_partner_flows_into_label_and_summary() {
        let mut with_partner = record("bank", "k1", "cash_pickup", "PHP", 6.98);
        with_partner.dest.partner = "cebuana".to_string();
        let out = aggregate(&[with_partner], &query("PHP"), &resolver()).unwrap();
        assert_eq!(out[0].title, "to Cash Pickup(Cebuana Lhuillier), 1 HKD:6.98 PHP");
        assert_eq!(out[0].partner, "cebuana");
    }

    #[test]
    fn empty_dest_currency_renders_trailing_space_title() {
        // No filter requested: the title still closes with the (empty)
        // requested currency. Downstream renders this as-is.
        let records = vec![record("bank", "k1", "bank_account", "VND", 2900.5)];
        let out = aggregate(&records, &query(""), &resolver()).unwrap();
        assert_eq!(out[0].title, "to Bank Account, 1 HKD:2900.5 ");
    }

    #[test]
    fn missing_dest_key_is_invalid() {
        let mut bad = record("bank", "", "bank_account", "PHP", 6.3);
        bad.dest_key.clear();
        let err = aggregate(&[bad], &query("PHP"), &resolver()).unwrap_err();
        assert_eq!(
            err,
            AggregateError::InvalidRecord {
                index: 0,
                field: "dest_key"
            }
        );
    }

    #[test]
    fn missing_dest_type_is_invalid() {
        let bad = record("bank", "k1", "", "PHP", 6.3);
        let err = aggregate(&[bad], &query("PHP"), &resolver()).unwrap_err();
        assert_eq!(
            err,
            AggregateError::InvalidRecord {
                index: 0,
                field: "dest.type"
            }
        );
    }

    #[test]
    fn missing_rate_is_invalid_with_index() {
        let good = record("bank", "k1", "bank_account", "PHP", 6.3);
        let mut bad = record("bank", "k2", "cash_pickup", "PHP", 6.3);
        bad.rate = None;
        let err = aggregate(&[good, bad], &query("PHP"), &resolver()).unwrap_err();
        assert_eq!(
            err,
            AggregateError::InvalidRecord {
                index: 1,
                field: "rate"
            }
        );
    }

    #[test]
    fn malformed_record_fails_even_when_filter_would_drop_it() {
        // The bad record's currency does not match the filter, but the
        // batch is still rejected: all-or-nothing.
        let good = record("bank", "k1", "bank_account", "PHP", 6.3);
        let mut bad = record("bank", "k2", "cash_pickup", "USD", 6.3);
        bad.rate = None;
        let err = aggregate(&[good, bad], &query("PHP"), &resolver()).unwrap_err();
        assert_eq!(
            err,
            AggregateError::InvalidRecord {
                index: 1,
                field: "rate"
            }
        );
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = aggregate(&[], &query("PHP"), &resolver()).unwrap();
        assert!(out.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = CorridorRecord> {
            (
                prop::sample::select(vec!["bank", "ewallet", "circlek", "oddball"]),
                prop::sample::select(vec!["k1", "k2", "k3"]),
                prop::sample::select(vec!["bank_account", "cash_pickup", "ewallet"]),
                prop::sample::select(vec!["PHP", "php", "USD", "VND"]),
                prop::sample::select(vec![1.0f64, 2.5, 6.312, 7.0]),
            )
                .prop_map(|(src, key, dest, cur, rate)| record(src, key, dest, cur, rate))
        }

        proptest! {
            #[test]
            fn aggregation_is_idempotent(records in prop::collection::vec(arb_record(), 0..24)) {
                let resolver = resolver();
                let q = query("PHP");
                let first = aggregate(&records, &q, &resolver).unwrap();
                let second = aggregate(&records, &q, &resolver).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn filtered_currencies_never_contribute(records in prop::collection::vec(arb_record(), 0..24)) {
                let resolver = resolver();
                let out = aggregate(&records, &query("PHP"), &resolver).unwrap();
                let matching: Vec<&CorridorRecord> = records
                    .iter()
                    .filter(|r| r.dest.currency.eq_ignore_ascii_case("PHP"))
                    .collect();
                let distinct_keys: std::collections::HashSet<&str> =
                    matching.iter().map(|r| r.dest_key.as_str()).collect();
                prop_assert_eq!(out.len(), distinct_keys.len());
            }
        }
    }
}
