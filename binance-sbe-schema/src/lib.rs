/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Binance SBE Schema
//!
//! Static SBE schema metadata for the Binance SBE codec.
//!
//! This crate provides:
//! - **Primitive types**: SBE encodings with their null, min and max sentinels
//! - **Descriptors**: `const`-constructible field, group, var data and message metadata
//! - **Enumerations and sets**: value tables used for validation and dynamic decoding
//! - **Registry**: template lookup by id or name

pub mod error;
pub mod meta;
pub mod registry;
pub mod types;

pub use error::SchemaError;
pub use meta::{
    Choice, EnumMeta, Encoding, FieldMeta, GroupMeta, MessageMeta, SetMeta, ValidValue,
    VarDataMeta, fields_length,
};
pub use registry::Schema;
pub use types::{
    DimensionEncoding, LengthPrefix, MetaAttribute, Presence, PrimitiveType, ScalarValue,
};
