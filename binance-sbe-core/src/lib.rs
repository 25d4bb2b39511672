/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Binance SBE Core
//!
//! Wire-level building blocks for Binance Spot Simple Binary Encoding.
//!
//! This crate provides the pieces every message codec is assembled from:
//! - **Error types**: `DecodeError`, `EncodeError`, `RangeError` unified by `SbeError`
//! - **Primitives**: little-endian integers and floats with their null sentinels
//! - **Composites**: `MessageHeader` and `GroupDimension`
//! - **Buffers**: `SbeReader` and `SbeWriter` applying acting-version rules
//! - **Traits**: `SbeBlock`, `SbeMessage`, `SbeEnum`, `SbeSet`
//! - **Range checks** and **decimal/timestamp conversions**
//!
//! ## Versioning
//!
//! Readers carry both the acting version found in the header and the schema
//! version the code was compiled against. Fields newer than the acting version
//! read as null, and block bytes appended by a newer schema are skipped.

pub mod buffer;
pub mod config;
pub mod convert;
pub mod enums;
pub mod error;
pub mod header;
pub mod message;
pub mod primitive;
pub mod range;

pub use buffer::{SbeReader, SbeWriter};
pub use config::{CodecConfig, SPOT_SCHEMA_ID};
pub use convert::{decimal_to_mantissa, mantissa_to_decimal, timestamp_from_micros};
pub use enums::{SbeEnum, SbeSet};
pub use error::{DecodeError, EncodeError, RangeError, Result, SbeError};
pub use header::{GroupDimension, MessageHeader};
pub use message::{SbeBlock, SbeMessage};
pub use primitive::Primitive;
