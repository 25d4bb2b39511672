/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Binance SBE Codec
//!
//! Schema-driven encoding and decoding for Binance SBE messages.
//!
//! Where the typed messages of `binance-sbe-spot` are compiled against one
//! layout, this engine walks the field metadata of a [`Schema`] at runtime and
//! produces dynamic [`Record`] values. It is useful for tooling, logging and
//! for cross-checking the typed codecs.
//!
//! ## Features
//!
//! - **Decoding**: any registered template into a `Record`
//! - **Encoding**: a `Record` into any registered template
//! - **Range checking**: the same bounds the typed codecs enforce
//! - **Versioning**: acting-version nulls and block extension skipping
//!
//! [`Schema`]: binance_sbe_schema::Schema

pub mod decoder;
pub mod encoder;
pub mod validate;
pub mod value;

pub use decoder::{DecodedMessage, SbeDecoder};
pub use encoder::SbeEncoder;
pub use validate::range_check;
pub use value::{Record, Value};
