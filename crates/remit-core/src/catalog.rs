//! # Built-in Display Name Catalog
//!
//! Static reference data mapping canonical payment-method keys to short
//! display strings. Two key shapes exist:
//!
//! - `payment_method_{type}` — bare method or category name;
//! - `payment_method_{type}_{country}_agent_name_emq_partner_{partner}` —
//!   partner-qualified agent name for compound payout categories.
//!
//! Loaded once into a [`crate::names::NameCatalog`] and never mutated at
//! runtime. Entries with no live lookup path are kept deliberately: they
//! document historical partner wiring and cost nothing.

/// Canonical key → display name entries shipped with the service.
pub const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("payment_method_bank", "Bank Account"),
    ("payment_method_bank_account", "Bank Account"),
    ("payment_method_bank_name_hdbank", "HDBank"),
    ("payment_method_cash_delivery", "Cash Delivery"),
    ("payment_method_cash_delivery_vnm_agent_name", "HDBank"),
    ("payment_method_cash_delivery_vnm_agent_name_emq_bank_hdb", "HDBank"),
    ("payment_method_cash_payin", "Cash Pay-in"),
    ("payment_method_cash_pickup", "Cash Pickup"),
    ("payment_method_cash_pickup_agency_cebuana", "Cebuana Lhuillier"),
    ("payment_method_cash_pickup_agent_finnet", "Delima remittance service"),
    ("payment_method_cash_pickup_idn_agent_name", "Delima remittance service"),
    (
        "payment_method_cash_pickup_idn_agent_name_emq_partner_finnet",
        "Delima remittance service",
    ),
    ("payment_method_cash_pickup_phl_agent_name", "Cebuana Lhuillier"),
    (
        "payment_method_cash_pickup_phl_agent_name_emq_partner_cebuana",
        "Cebuana Lhuillier",
    ),
    (
        "payment_method_cash_pickup_phl_agent_name_emq_partner_palawan",
        "Palawan",
    ),
    ("payment_method_cash_pickup_vnm_agent_name", "HDBank"),
    ("payment_method_cash_pickup_vnm_agent_name_emq_bank_hdb", "HDBank"),
    ("payment_method_circlek", "Circle K"),
    ("payment_method_e_wallet", "E-Wallet"),
    ("payment_method_e_wallet_service_alipay", "Alipay"),
    ("payment_method_ewallet", "E-Wallet"),
    (
        "payment_method_ewallet_ind_agent_name_emq_partner_paytm",
        "Paytm Payments Bank",
    ),
    ("payment_method_ewallet_ind_emq_partner_paytm", "Paytm Payments Bank Account"),
    ("payment_method_ewallet_phl_agent_name", "GCash"),
    ("payment_method_ewallet_phl_agent_name_emq_partner_gcash", "GCash"),
    ("payment_method_jetco", "JET PAYMENT"),
    ("payment_method_local_bank_account", "HDBank Account"),
    ("payment_method_local_bank_account_vnm_agent_name", "HDBank"),
    (
        "payment_method_local_bank_account_vnm_agent_name_emq_bank_hdb",
        "HDBank",
    ),
    ("payment_method_visa", "Visa"),
    ("payment_method_visa_phl_agent_name", "Visa"),
    ("payment_method_visa_phl_agent_name_emq_partner_visa", "Visa"),
];
