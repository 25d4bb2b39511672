/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Binance SBE
//!
//! Simple Binary Encoding codecs for the Binance Spot API.
//!
//! Binance SBE reads and writes the binary responses and user data stream
//! events of schema 3 (versions 0 through 2), either as typed Rust structs or
//! through a schema-driven engine working on dynamic records.
//!
//! ## Features
//!
//! - **Typed messages**: One struct per template with encode, decode and range checks
//! - **Schema evolution**: Older data nulls newer fields, newer data is skipped over
//! - **Generic engine**: Decode any registered template into a [`codec::Record`]
//! - **Stream framing**: Tokio codecs for the Simple Open Framing Header
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use binance_sbe::prelude::*;
//!
//! let message = SpotMessage::decode(&payload, true)?;
//! match message {
//!     SpotMessage::Error(error) => eprintln!("{}: {}", error.code, error.msg),
//!     SpotMessage::Order(order) => println!("{:?}", order.status),
//!     _ => {}
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`]: Layout metadata and the message registry
//! - [`core`]: Errors, buffers, header and message traits
//! - [`codec`]: Schema-driven encoder and decoder
//! - [`spot`]: Typed spot messages
//! - [`transport`]: Stream framing

pub mod schema {
    //! Layout metadata and the message registry.
    pub use binance_sbe_schema::*;
}

pub mod core {
    //! Errors, buffers, header and message traits.
    pub use binance_sbe_core::*;
}

pub mod codec {
    //! Schema-driven encoder and decoder.
    pub use binance_sbe_codec::*;
}

pub mod spot {
    //! Typed spot messages.
    pub use binance_sbe_spot::*;
}

pub mod transport {
    //! Stream framing.
    pub use binance_sbe_transport::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use binance_sbe_core::{
        CodecConfig, DecodeError, EncodeError, MessageHeader, RangeError, Result, SbeBlock,
        SbeEnum, SbeError, SbeMessage, SbeSet,
    };

    // Schema
    pub use binance_sbe_schema::{MessageMeta, Schema};

    // Generic engine
    pub use binance_sbe_codec::{Record, SbeDecoder, SbeEncoder, Value};

    // Spot messages
    pub use binance_sbe_spot::{
        AccountResponse, CancelOrderListResponse, CancelOrderResponse, ErrorResponse,
        ExchangeInfoResponse, ExecutionReportEvent, NewOrderFullResponse,
        NewOrderListFullResponse, NewOrderListResultResponse, NewOrderResultResponse,
        OrderAmendKeepPriorityResponse, OrderResponse, OrdersResponse, SpotMessage,
        Ticker24hFullResponse, spot_schema,
    };

    // Transport
    pub use binance_sbe_transport::{CodecError, SofhCodec, SpotCodec};
}
