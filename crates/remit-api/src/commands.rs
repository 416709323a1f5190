//! Keyword command table.
//!
//! Inbound text (and postback payloads) are matched case-insensitively
//! against a fixed table. Corridor commands all originate from the Hong
//! Kong side, so the source is pinned to HKG/HKD; each keyword selects
//! the destination country and, where the corridor pays out in more than
//! one currency, the destination currency. An empty currency means no
//! filter (the `vnm` keyword lists both USD and VND payouts).

use remit_core::RateQuery;
use remit_messenger::QuickReply;

/// Fixed source side for all keyword corridors.
pub const SOURCE_COUNTRY: &str = "HKG";
pub const SOURCE_CURRENCY: &str = "HKD";

/// A recognized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt the user to pick a destination currency.
    TodayRate,
    /// Fetch and render corridor rates for one destination.
    Corridor(RateQuery),
}

/// Keyword → destination mapping, in match order.
const CORRIDOR_KEYWORDS: &[(&str, &str, &str)] = &[
    ("phl", "PHL", "PHP"),
    ("chn", "CHN", "CNY"),
    ("ind", "IND", "INR"),
    ("jpn", "JPN", "JPY"),
    ("idn", "IDN", "IDR"),
    ("vnm", "VNM", ""),
    ("vnm-usd", "VNM", "USD"),
    ("vnm-vnd", "VNM", "VND"),
];

/// Resolve raw message text (or a postback payload) to a command.
pub fn resolve(text: &str) -> Option<Command> {
    let lowered = text.trim().to_lowercase();
    if lowered == "today rate" {
        return Some(Command::TodayRate);
    }
    CORRIDOR_KEYWORDS
        .iter()
        .find(|(keyword, _, _)| *keyword == lowered)
        .map(|(_, country, currency)| {
            Command::Corridor(RateQuery::new(
                SOURCE_COUNTRY,
                SOURCE_CURRENCY,
                *country,
                *currency,
            ))
        })
}

/// Quick-reply prompt sent for the `today rate` command.
pub fn rate_prompt_text() -> &'static str {
    "Which currency would you like to convert HKD into?"
}

/// Destination chips for the rate prompt. Chip titles round-trip as the
/// next inbound message text, so each title is itself a keyword.
pub fn rate_prompt_replies() -> Vec<QuickReply> {
    ["PHL", "IDN", "VNM-VND", "VNM-USD", "CHN", "JPN", "IND"]
        .into_iter()
        .map(|title| QuickReply::text(title, format!("RATE_HKG_{title}")))
        .collect()
}
