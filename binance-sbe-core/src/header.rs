/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message header and group dimension composites.

use crate::error::{DecodeError, EncodeError};
use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

/// SBE message header preceding every message body.
///
/// Layout (little-endian, 8 bytes):
/// `blockLength u16 | templateId u16 | schemaId u16 | version u16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Block length of the message root.
    pub block_length: u16,
    /// Template id of the message.
    pub template_id: u16,
    /// Schema id.
    pub schema_id: u16,
    /// Schema version the message was encoded with.
    pub version: u16,
}

impl MessageHeader {
    /// Encoded size of the header.
    pub const ENCODED_LENGTH: usize = 8;

    /// Creates a new header.
    #[must_use]
    pub const fn new(block_length: u16, template_id: u16, schema_id: u16, version: u16) -> Self {
        Self {
            block_length,
            template_id,
            schema_id,
            version,
        }
    }

    /// Decodes a header from the start of `buf`.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if fewer than 8 bytes are available.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < Self::ENCODED_LENGTH {
            return Err(DecodeError::UnexpectedEof {
                needed: Self::ENCODED_LENGTH,
                remaining: buf.len(),
            });
        }
        let mut cursor = &buf[..Self::ENCODED_LENGTH];
        Ok(Self {
            block_length: cursor.get_u16_le(),
            template_id: cursor.get_u16_le(),
            schema_id: cursor.get_u16_le(),
            version: cursor.get_u16_le(),
        })
    }

    /// Encodes the header into `buf`.
    ///
    /// # Errors
    /// Returns `EncodeError::BufferOverflow` if `buf` has less than 8 bytes of room.
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), EncodeError> {
        if buf.remaining_mut() < Self::ENCODED_LENGTH {
            return Err(EncodeError::BufferOverflow {
                needed: Self::ENCODED_LENGTH,
                available: buf.remaining_mut(),
            });
        }
        buf.put_u16_le(self.block_length);
        buf.put_u16_le(self.template_id);
        buf.put_u16_le(self.schema_id);
        buf.put_u16_le(self.version);
        Ok(())
    }
}

/// Decoded repeating group dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupDimension {
    /// Block length of each entry.
    pub block_length: u16,
    /// Number of entries.
    pub num_in_group: u32,
}
