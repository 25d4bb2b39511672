/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the Binance SBE codec.
//!
//! This module provides a unified error hierarchy using `thiserror`. Decoding,
//! encoding and range checking each have their own enum; [`SbeError`] wraps
//! all three for APIs that can fail in more than one way.

use thiserror::Error;

/// Result type alias using [`SbeError`] as the error type.
pub type Result<T> = std::result::Result<T, SbeError>;

/// Top-level error type for all codec operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SbeError {
    /// Error during message decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error during message encoding.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Value failed range checking.
    #[error("{0}")]
    Range(#[from] RangeError),
}

/// Errors that occur during SBE decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ends before the value being read.
    #[error("unexpected end of buffer: need {needed} bytes, have {remaining}")]
    UnexpectedEof {
        /// Bytes needed to read the value.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// A UTF-8 var data field holds invalid UTF-8.
    #[error("invalid utf-8 in field {field}")]
    InvalidUtf8 {
        /// Field name.
        field: String,
    },

    /// The header names a template the decoder does not know.
    #[error("unknown template id: {0}")]
    UnknownTemplate(u16),

    /// The header names a different template than the one requested.
    #[error("template mismatch: expected {expected}, got {actual}")]
    TemplateMismatch {
        /// Template id of the requested message.
        expected: u16,
        /// Template id found in the header.
        actual: u16,
    },

    /// The header belongs to another schema.
    #[error("schema mismatch: expected schema id {expected}, got {actual}")]
    SchemaMismatch {
        /// Schema id the decoder was built for.
        expected: u16,
        /// Schema id found in the header.
        actual: u16,
    },

    /// An enumeration code is unknown to a schema at least as new as the data.
    #[error("unknown value {value} for enum {name}")]
    UnknownEnumValue {
        /// Enumeration name.
        name: String,
        /// Wire code.
        value: u64,
    },

    /// Message exceeds the configured maximum size.
    #[error("message too large: {size} bytes exceeds maximum {max_size}")]
    MessageTooLarge {
        /// Message size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

/// Errors that occur during SBE encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Buffer capacity exceeded during encoding.
    #[error("buffer overflow: need {needed} bytes, have {available}")]
    BufferOverflow {
        /// Bytes needed to complete the write.
        needed: usize,
        /// Bytes available in the buffer.
        available: usize,
    },

    /// Var data longer than its length prefix can express.
    #[error("field {field} too long: {length} bytes exceeds maximum {max_length}")]
    VarDataTooLong {
        /// Field name.
        field: String,
        /// Data length.
        length: usize,
        /// Maximum length of the prefix.
        max_length: usize,
    },

    /// Group with more entries than its dimension can express.
    #[error("group {group} too large: {count} entries exceeds maximum {max_count}")]
    GroupTooLarge {
        /// Group name.
        group: String,
        /// Number of entries.
        count: usize,
        /// Maximum count of the dimension.
        max_count: usize,
    },

    /// A required field has no value.
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name.
        field: String,
    },

    /// A value does not fit the field encoding.
    #[error("type mismatch for field {field}: expected {expected}")]
    TypeMismatch {
        /// Field name.
        field: String,
        /// Expected encoding.
        expected: String,
    },

    /// No layout is known for the template.
    #[error("unknown template id: {0}")]
    UnknownTemplate(u16),
}

/// Errors raised by range checking.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Numeric value outside the field bounds.
    #[error("range check failed on {field} ({min} < {value} > {max})")]
    OutOfRange {
        /// Field name.
        field: String,
        /// Offending value.
        value: String,
        /// Minimum valid value.
        min: String,
        /// Maximum valid value.
        max: String,
    },

    /// Enumeration code outside the value table.
    #[error("range check failed on {field}, unknown enumeration value {value}")]
    UnknownEnumValue {
        /// Field name.
        field: String,
        /// Wire code.
        value: u64,
    },

    /// String data is not valid UTF-8.
    #[error("{field} failed UTF-8 validation")]
    InvalidUtf8 {
        /// Field name.
        field: String,
    },
}
