//! # remit-core — Corridor Rate Aggregation Engine
//!
//! The data-transformation core of the remit-bot service:
//!
//! - **Records** (`record.rs`): wire types for the pricing API's corridor
//!   listing, plus the per-invocation [`RateQuery`] and the rendered
//!   [`PayoutSummary`] handed to the card renderer.
//!
//! - **Aggregation** (`aggregate.rs`): filters corridor records by the
//!   requested payout currency, groups them by destination key, and
//!   produces one ordered summary per distinct payout configuration.
//!
//! - **Names** (`names.rs`): resolves `(method type, country, partner)`
//!   triples to display names through an ordered fallback chain over the
//!   static catalog in `catalog.rs`. Resolution never fails — it degrades
//!   to the raw type code.
//!
//! ## Crate Policy
//!
//! Pure and synchronous: no I/O, no global state. The catalog is built
//! once and shared immutably; aggregation state is local to a single
//! call. Fetching corridor data lives in `remit-pricing`, rendering in
//! `remit-api`.

pub mod aggregate;
pub mod catalog;
pub mod names;
pub mod record;

pub use aggregate::{aggregate, AggregateError};
pub use names::{NameCatalog, NameResolver};
pub use record::{CorridorRecord, MethodRef, PayoutRef, PayoutSummary, RateQuery};
