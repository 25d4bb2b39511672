/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Binance SBE Spot
//!
//! Typed codecs for the Binance Spot SBE schema (id 3, version 2).
//!
//! Every message is a plain struct implementing [`SbeMessage`]:
//! - **Root fields** in wire order, with optional fields as `Option<T>`
//! - **Repeating groups** as `Vec` of entry structs
//! - **Var data** as `String` or [`bytes::Bytes`]
//! - **Metadata** through `FIELDS`, `GROUPS`, `VAR_DATA` and `META`
//!
//! [`SpotMessage`] dispatches on the template id of the header.
//!
//! ## Example
//!
//! ```rust,ignore
//! use binance_sbe_spot::{SpotMessage, SbeMessage};
//!
//! let message = SpotMessage::decode(&frame, true)?;
//! if let SpotMessage::ExecutionReport(report) = message {
//!     println!("{} {:?}", report.symbol, report.order_status);
//! }
//! ```

#[macro_use]
mod macros;

pub mod dispatch;
pub mod enums;
pub mod groups;
pub mod messages;
pub mod sets;

pub use binance_sbe_core::{SbeBlock, SbeEnum, SbeMessage, SbeSet};
pub use dispatch::{MESSAGES, SpotMessage, spot_schema};
pub use enums::*;
pub use groups::{Fill, ListOrder, ListStatus, PreventedMatch};
pub use messages::*;
pub use sets::{AllowedSelfTradePreventionModes, OrderTypes};

/// Schema id of the spot schema.
pub const SCHEMA_ID: u16 = binance_sbe_core::SPOT_SCHEMA_ID;

/// Schema version the typed codecs were generated for.
pub const SCHEMA_VERSION: u16 = 2;

/// Semantic version of the spot schema.
pub const SEMANTIC_VERSION: &str = "5.2";
