/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Typed message and block traits.
//!
//! [`SbeBlock`] is implemented by every encodable block: message roots and
//! repeating group entries. [`SbeMessage`] adds the header identity of a
//! top-level message and provides the framed encode and decode entry points.

use crate::buffer::{SbeReader, SbeWriter};
use crate::error::{DecodeError, EncodeError, RangeError, SbeError};
use crate::header::MessageHeader;
use binance_sbe_schema::MessageMeta;
use bytes::BufMut;
use tracing::trace;

/// A block of fixed fields followed by groups and var data.
pub trait SbeBlock: Sized {
    /// Block length this type was compiled with.
    const BLOCK_LENGTH: u16;

    /// Writes the block, its groups and its var data.
    ///
    /// # Errors
    /// Returns the first encoding failure.
    fn encode<B: BufMut>(&self, writer: &mut SbeWriter<'_, B>) -> Result<(), EncodeError>;

    /// Reads the block, skipping any extension written by a newer schema.
    ///
    /// # Arguments
    /// * `reader` - Reader positioned at the start of the block
    /// * `block_length` - Block length announced by the header or dimension
    ///
    /// # Errors
    /// Returns the first decoding failure.
    fn decode(reader: &mut SbeReader<'_>, block_length: u16) -> Result<Self, DecodeError>;

    /// Validates every field against its schema bounds.
    ///
    /// # Errors
    /// Returns the first field found out of range.
    fn range_check(&self, acting_version: u16, schema_version: u16) -> Result<(), RangeError>;
}

/// A top-level message identified by its template id.
pub trait SbeMessage: SbeBlock {
    /// Template id written in the header.
    const TEMPLATE_ID: u16;
    /// Schema id written in the header.
    const SCHEMA_ID: u16;
    /// Schema version written in the header.
    const SCHEMA_VERSION: u16;
    /// Semantic version of the schema.
    const SEMANTIC_VERSION: &'static str;
    /// Field metadata of the message.
    const META: &'static MessageMeta;

    /// Returns the header written in front of this message.
    #[must_use]
    fn header() -> MessageHeader {
        MessageHeader::new(
            Self::BLOCK_LENGTH,
            Self::TEMPLATE_ID,
            Self::SCHEMA_ID,
            Self::SCHEMA_VERSION,
        )
    }

    /// Encodes header and body into `buf`.
    ///
    /// # Arguments
    /// * `buf` - Destination buffer
    /// * `range_check` - Validate fields against the schema before writing
    ///
    /// # Returns
    /// The number of bytes written.
    ///
    /// # Errors
    /// Returns `SbeError::Range` if validation fails, otherwise the first
    /// encoding failure.
    fn encode_message<B: BufMut>(&self, buf: &mut B, range_check: bool) -> Result<usize, SbeError> {
        if range_check {
            self.range_check(Self::SCHEMA_VERSION, Self::SCHEMA_VERSION)?;
        }
        Self::header().encode(buf)?;
        let mut writer = SbeWriter::new(buf);
        self.encode(&mut writer)?;
        let written = MessageHeader::ENCODED_LENGTH + writer.written();
        trace!(template_id = Self::TEMPLATE_ID, written, "encoded message");
        Ok(written)
    }

    /// Encodes header and body into a new vector, with range checking.
    ///
    /// # Errors
    /// Returns the first validation or encoding failure.
    fn encode_to_vec(&self) -> Result<Vec<u8>, SbeError> {
        let mut buf = Vec::with_capacity(MessageHeader::ENCODED_LENGTH + usize::from(Self::BLOCK_LENGTH));
        self.encode_message(&mut buf, true)?;
        Ok(buf)
    }

    /// Decodes a message starting with its header.
    ///
    /// # Errors
    /// Returns `DecodeError::SchemaMismatch` or `DecodeError::TemplateMismatch`
    /// if the header belongs to another message, otherwise the first decoding
    /// or validation failure.
    fn decode_message(buf: &[u8], range_check: bool) -> Result<Self, SbeError> {
        let header = MessageHeader::decode(buf)?;
        Self::decode_body(&buf[MessageHeader::ENCODED_LENGTH..], &header, range_check)
    }

    /// Decodes a message body using an already decoded header.
    ///
    /// # Errors
    /// Returns the first decoding or validation failure.
    fn decode_body(body: &[u8], header: &MessageHeader, range_check: bool) -> Result<Self, SbeError> {
        if header.schema_id != Self::SCHEMA_ID {
            return Err(DecodeError::SchemaMismatch {
                expected: Self::SCHEMA_ID,
                actual: header.schema_id,
            }
            .into());
        }
        if header.template_id != Self::TEMPLATE_ID {
            return Err(DecodeError::TemplateMismatch {
                expected: Self::TEMPLATE_ID,
                actual: header.template_id,
            }
            .into());
        }
        let mut reader = SbeReader::new(body, header.version, Self::SCHEMA_VERSION);
        let message = Self::decode(&mut reader, header.block_length)?;
        if range_check {
            message.range_check(header.version, Self::SCHEMA_VERSION)?;
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::check_optional;
    use binance_sbe_schema::{Encoding, FieldMeta};

    const PRICE: FieldMeta = FieldMeta::new("price", 1, Encoding::INT64).optional();
    const FIELDS: &[FieldMeta] = &[PRICE];
    const META: MessageMeta = MessageMeta {
        name: "Quote",
        template_id: 9,
        schema_id: 3,
        schema_version: 2,
        semantic_version: "5.2",
        block_length: 8,
        fields: FIELDS,
        groups: &[],
        var_data: &[],
    };

    #[derive(Debug, PartialEq)]
    struct Quote {
        price: Option<i64>,
    }

    impl SbeBlock for Quote {
        const BLOCK_LENGTH: u16 = 8;

        fn encode<B: BufMut>(&self, writer: &mut SbeWriter<'_, B>) -> Result<(), EncodeError> {
            writer.optional(self.price)
        }

        fn decode(reader: &mut SbeReader<'_>, block_length: u16) -> Result<Self, DecodeError> {
            let price = reader.optional(&PRICE)?;
            reader.skip_block_extension(block_length, Self::BLOCK_LENGTH)?;
            Ok(Self { price })
        }

        fn range_check(&self, acting_version: u16, _schema_version: u16) -> Result<(), RangeError> {
            check_optional(self.price, &PRICE, acting_version)
        }
    }

    impl SbeMessage for Quote {
        const TEMPLATE_ID: u16 = 9;
        const SCHEMA_ID: u16 = 3;
        const SCHEMA_VERSION: u16 = 2;
        const SEMANTIC_VERSION: &'static str = "5.2";
        const META: &'static MessageMeta = &META;
    }

    #[test]
    fn test_encode_writes_header_and_body() {
        let bytes = Quote { price: Some(42) }.encode_to_vec().unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..8], &[8, 0, 9, 0, 3, 0, 2, 0]);
        assert_eq!(
            Quote::decode_message(&bytes, true).unwrap(),
            Quote { price: Some(42) }
        );
    }

    #[test]
    fn test_null_optional_round_trips_as_none() {
        let bytes = Quote { price: None }.encode_to_vec().unwrap();
        assert_eq!(&bytes[8..], &i64::MIN.to_le_bytes());
        assert_eq!(Quote::decode_message(&bytes, true).unwrap().price, None);
    }

    #[test]
    fn test_template_and_schema_mismatch() {
        let mut bytes = Quote { price: Some(1) }.encode_to_vec().unwrap();
        bytes[2] = 10;
        assert_eq!(
            Quote::decode_message(&bytes, true),
            Err(SbeError::Decode(DecodeError::TemplateMismatch {
                expected: 9,
                actual: 10,
            }))
        );
        bytes[2] = 9;
        bytes[4] = 1;
        assert!(matches!(
            Quote::decode_message(&bytes, true),
            Err(SbeError::Decode(DecodeError::SchemaMismatch { actual: 1, .. }))
        ));
    }

    #[test]
    fn test_newer_block_is_skipped() {
        let mut bytes = vec![12, 0, 9, 0, 3, 0, 3, 0];
        bytes.extend_from_slice(&7i64.to_le_bytes());
        bytes.extend_from_slice(&[0xaa; 4]);
        let quote = Quote::decode_message(&bytes, true).unwrap();
        assert_eq!(quote.price, Some(7));
    }
}
