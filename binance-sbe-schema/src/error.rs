/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema error types.

use thiserror::Error;

/// Errors raised while building or querying a schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Unknown primitive type name.
    #[error("unknown primitive type: {0}")]
    UnknownPrimitiveType(String),

    /// A template id was registered twice.
    #[error("duplicate template id {template_id} ({name})")]
    DuplicateTemplate {
        /// Template id.
        template_id: u16,
        /// Name of the message already registered.
        name: &'static str,
    },

    /// A message belongs to another schema.
    #[error("message {name} belongs to schema {actual}, expected {expected}")]
    ForeignMessage {
        /// Message name.
        name: &'static str,
        /// Schema id of the registry.
        expected: u16,
        /// Schema id of the message.
        actual: u16,
    },

    /// Declared block length disagrees with the field layout.
    #[error("block length mismatch on {name}: declared {declared}, fields sum to {computed}")]
    BlockLengthMismatch {
        /// Message or group name.
        name: &'static str,
        /// Declared block length.
        declared: u16,
        /// Sum of fixed field lengths.
        computed: usize,
    },
}
