//! Card rendering.
//!
//! Turns aggregated payout summaries into generic-template carousel
//! elements. Each payout method has a pre-rendered image asset named
//! `{type}_{country}_{partner}.png` (country lowercased) served from this
//! service's `/assets/` directory.

use remit_core::{PayoutSummary, RateQuery};
use remit_messenger::{Button, GenericElement};

/// Render one payout summary into a carousel card.
pub fn payout_card(
    summary: &PayoutSummary,
    query: &RateQuery,
    server_url: &str,
    web_service_url: &str,
) -> GenericElement {
    let image = format!(
        "{}/assets/{}_{}_{}.png",
        server_url,
        summary.method_type,
        query.dest_country.to_lowercase(),
        summary.partner
    );
    let transaction_url = format!(
        "{}?destinationCountry={}&destinationCurrency={}",
        web_service_url, query.dest_country, query.dest_currency
    );

    GenericElement {
        title: summary.title.clone(),
        subtitle: summary.subtitle.clone(),
        item_url: Some(web_service_url.to_string()),
        image_url: Some(image),
        buttons: vec![Button::webview("Create a Transaction", transaction_url)],
    }
}
