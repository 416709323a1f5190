//! # Payout Method Name Resolution
//!
//! Resolves `(method type, country, partner)` triples to human-readable
//! display names. Resolution is a pure function over an immutable
//! [`NameCatalog`] plus two ordered rule lists, and it never fails: each
//! step degrades to a less specific lookup, terminating at the raw type
//! code. Label quality degrades; the call never errors.
//!
//! The original dispatch was a long if/else-if chain. It is rebuilt here
//! as a key→value map plus explicit ordered rule slices so the precedence
//! is testable on its own.

use std::collections::HashMap;

use crate::catalog::BUILTIN_NAMES;

/// Compound payout categories whose partner annotation is resolved through
/// the `…_agent_name_emq_partner_…` key shape. Checked before the general
/// fallback chain, so these types never reach the legacy alias list.
/// Both e-wallet spellings share one canonical key.
const COMPOUND_CATEGORIES: &[(&str, &str)] = &[
    ("cash_pickup", "payment_method_cash_pickup"),
    ("e_wallet", "payment_method_e_wallet"),
    ("ewallet", "payment_method_e_wallet"),
    ("cash_delivery", "payment_method_cash_delivery"),
];

/// Legacy type aliases, matched by exact literal equality, first match
/// wins. Order is load-bearing and mirrors the historical dispatch.
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("cash_payin", "payment_method_cash_payin"),
    ("circlek", "payment_method_circlek"),
    ("cash-payin", "payment_method_cash_payin"),
    ("jetco-hkg", "payment_method_jetco"),
];

/// Immutable canonical-key → display-name table.
///
/// Lookup is exact-string and case-sensitive; a missing key means "no
/// entry", not an error. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct NameCatalog {
    entries: HashMap<String, String>,
}

impl NameCatalog {
    /// Catalog with the built-in entries shipped in `catalog.rs`.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_NAMES.iter().copied())
    }

    /// Catalog from arbitrary key/name pairs. Later duplicates win.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Exact lookup of a canonical key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries, mostly for diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Display-name resolver over a [`NameCatalog`].
#[derive(Debug, Clone)]
pub struct NameResolver {
    catalog: NameCatalog,
}

impl NameResolver {
    /// Resolver over the given catalog.
    pub fn new(catalog: NameCatalog) -> Self {
        Self { catalog }
    }

    /// Resolver over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(NameCatalog::builtin())
    }

    /// The catalog this resolver reads from.
    pub fn catalog(&self) -> &NameCatalog {
        &self.catalog
    }

    fn lookup_or(&self, key: &str, fallback: &str) -> String {
        self.catalog.get(key).unwrap_or(fallback).to_string()
    }

    /// Label for a funding-side method. Source methods never carry a
    /// partner in this system, so this is a single-key lookup:
    /// `payment_method_{type}`, degrading to the raw type code.
    pub fn source_label(&self, method_type: &str) -> String {
        let key = format!("payment_method_{method_type}");
        self.lookup_or(&key, method_type)
    }

    /// Label for a destination payout method, optionally qualified by the
    /// partner/agent network delivering it.
    ///
    /// Compound categories (cash pickup, e-wallet, cash delivery) resolve
    /// the partner through the agent-name key shape and render it as
    /// `Category(Agent)`; a missing agent entry silently drops the
    /// annotation. Every other type walks the general chain: fully
    /// qualified key, legacy aliases, bare key, raw type code.
    pub fn payout_label(&self, method_type: &str, country: &str, partner: &str) -> String {
        if let Some((_, canonical)) = COMPOUND_CATEGORIES
            .iter()
            .find(|(t, _)| *t == method_type)
        {
            let category = self.lookup_or(canonical, method_type);
            if partner.is_empty() {
                return category;
            }
            let agent_key = format!(
                "payment_method_{}_{}_agent_name_emq_partner_{}",
                method_type,
                country.to_lowercase(),
                partner
            );
            return match self.catalog.get(&agent_key) {
                Some(agent) => format!("{category}({agent})"),
                None => category,
            };
        }

        // General chain. Country is used exactly as passed here; only the
        // agent-name shape above lowercases it.
        let qualified = format!("payment_method_{method_type}_{country}_{partner}");
        if let Some(name) = self.catalog.get(&qualified) {
            return name.to_string();
        }
        if let Some((_, canonical)) = LEGACY_ALIASES.iter().find(|(t, _)| *t == method_type) {
            return self.lookup_or(canonical, canonical);
        }
        let bare = format!("payment_method_{method_type}");
        if let Some(name) = self.catalog.get(&bare) {
            return name.to_string();
        }
        method_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> NameResolver {
        NameResolver::builtin()
    }

    #[test]
    fn source_label_hits_the_table() {
        assert_eq!(resolver().source_label("bank"), "Bank Account");
        assert_eq!(resolver().source_label("jetco"), "JET PAYMENT");
    }

    #[test]
    fn source_label_unknown_type_passes_through() {
        assert_eq!(resolver().source_label("unknown_rail"), "unknown_rail");
    }

    #[test]
    fn compound_category_with_known_partner_annotates() {
        assert_eq!(
            resolver().payout_label("cash_pickup", "PHL", "cebuana"),
            "Cash Pickup(Cebuana Lhuillier)"
        );
        assert_eq!(
            resolver().payout_label("cash_pickup", "PHL", "palawan"),
            "Cash Pickup(Palawan)"
        );
    }

    #[test]
    fn compound_category_lowercases_country_in_agent_key() {
        // "PHL" must match the phl agent entry.
        assert_eq!(
            resolver().payout_label("ewallet", "PHL", "gcash"),
            "E-Wallet(GCash)"
        );
    }

    #[test]
    fn compound_category_with_empty_partner_returns_bare_category() {
        assert_eq!(resolver().payout_label("cash_pickup", "PHL", ""), "Cash Pickup");
        assert_eq!(resolver().payout_label("e_wallet", "CHN", ""), "E-Wallet");
        assert_eq!(resolver().payout_label("ewallet", "IND", ""), "E-Wallet");
        assert_eq!(resolver().payout_label("cash_delivery", "VNM", ""), "Cash Delivery");
    }

    #[test]
    fn compound_category_with_unknown_partner_drops_annotation() {
        assert_eq!(
            resolver().payout_label("cash_pickup", "PHL", "nobody"),
            "Cash Pickup"
        );
    }

    #[test]
    fn compound_category_never_reaches_alias_list() {
        // A catalog without the compound canonical entries forces the
        // literal-type fallback; the alias list must not be consulted.
        let catalog = NameCatalog::from_entries([("payment_method_cash_payin", "Cash Pay-in")]);
        let resolver = NameResolver::new(catalog);
        assert_eq!(resolver.payout_label("cash_pickup", "PHL", ""), "cash_pickup");
    }

    #[test]
    fn legacy_aliases_resolve_in_order() {
        assert_eq!(resolver().payout_label("cash_payin", "HKG", ""), "Cash Pay-in");
        assert_eq!(resolver().payout_label("cash-payin", "HKG", ""), "Cash Pay-in");
        assert_eq!(resolver().payout_label("circlek", "HKG", ""), "Circle K");
        assert_eq!(resolver().payout_label("jetco-hkg", "HKG", ""), "JET PAYMENT");
    }

    #[test]
    fn fully_qualified_key_wins_over_aliases() {
        let catalog = NameCatalog::from_entries([
            ("payment_method_circlek_HKG_ok", "Circle K Kiosk"),
            ("payment_method_circlek", "Circle K"),
        ]);
        let resolver = NameResolver::new(catalog);
        assert_eq!(resolver.payout_label("circlek", "HKG", "ok"), "Circle K Kiosk");
    }

    #[test]
    fn bare_key_fallback_then_passthrough() {
        assert_eq!(resolver().payout_label("visa", "PHL", ""), "Visa");
        assert_eq!(resolver().payout_label("unknown_rail", "ZZZ", ""), "unknown_rail");
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolver().payout_label("cash_pickup", "PHL", "cebuana");
        let b = resolver().payout_label("cash_pickup", "PHL", "cebuana");
        assert_eq!(a, b);
    }

    #[test]
    fn builtin_catalog_is_nonempty() {
        let catalog = NameCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.len() >= 30);
        assert_eq!(catalog.get("payment_method_jetco"), Some("JET PAYMENT"));
        assert_eq!(catalog.get("payment_method_missing"), None);
    }
}
