/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema-driven decoder.
//!
//! This module decodes any message registered in a [`Schema`] into a
//! [`Record`] without generated types.

use crate::validate::range_check;
use crate::value::{Record, Value};
use binance_sbe_core::{CodecConfig, DecodeError, MessageHeader, SbeError, SbeReader};
use binance_sbe_schema::{Encoding, FieldMeta, GroupMeta, Schema, VarDataMeta};
use bytes::Bytes;
use tracing::{debug, trace};

/// A decoded message.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMessage {
    /// Header preceding the body.
    pub header: MessageHeader,
    /// Message name from the schema.
    pub name: &'static str,
    /// Decoded fields, groups and var data.
    pub record: Record,
    /// Bytes consumed including the header.
    pub encoded_length: usize,
}

/// Decoder for messages of a registered schema.
#[derive(Debug, Clone)]
pub struct SbeDecoder<'s> {
    schema: &'s Schema,
    config: CodecConfig,
}

impl<'s> SbeDecoder<'s> {
    /// Creates a decoder with the default configuration.
    #[must_use]
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_config(schema, CodecConfig::default())
    }

    /// Creates a decoder with the given configuration.
    #[must_use]
    pub fn with_config(schema: &'s Schema, config: CodecConfig) -> Self {
        Self { schema, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes one message starting with its header.
    ///
    /// # Arguments
    /// * `buf` - Header followed by the message body
    ///
    /// # Errors
    /// Returns `DecodeError::MessageTooLarge`, `DecodeError::SchemaMismatch`
    /// or `DecodeError::UnknownTemplate` for messages this decoder does not
    /// accept, otherwise the first decoding or range check failure.
    pub fn decode(&self, buf: &[u8]) -> Result<DecodedMessage, SbeError> {
        if buf.len() > self.config.max_message_size {
            return Err(DecodeError::MessageTooLarge {
                size: buf.len(),
                max_size: self.config.max_message_size,
            }
            .into());
        }

        let header = MessageHeader::decode(buf)?;
        if header.schema_id != self.schema.id {
            return Err(DecodeError::SchemaMismatch {
                expected: self.schema.id,
                actual: header.schema_id,
            }
            .into());
        }

        let Some(meta) = self.schema.get_message(header.template_id) else {
            debug!(template_id = header.template_id, "unknown template");
            return Err(DecodeError::UnknownTemplate(header.template_id).into());
        };

        let body = &buf[MessageHeader::ENCODED_LENGTH..];
        let mut reader = SbeReader::new(body, header.version, meta.schema_version);
        let record = decode_block(
            &mut reader,
            Block {
                known_length: meta.block_length,
                fields: meta.fields,
                groups: meta.groups,
                var_data: meta.var_data,
            },
            header.block_length,
        )?;

        if self.config.range_check_on_decode {
            range_check(meta, &record, header.version, meta.schema_version)?;
        }

        let encoded_length = MessageHeader::ENCODED_LENGTH + reader.position();
        trace!(
            name = meta.name,
            version = header.version,
            encoded_length,
            "decoded message"
        );
        Ok(DecodedMessage {
            header,
            name: meta.name,
            record,
            encoded_length,
        })
    }
}

/// Layout of a message root or a group entry.
#[derive(Clone, Copy)]
pub(crate) struct Block {
    pub(crate) known_length: u16,
    pub(crate) fields: &'static [FieldMeta],
    pub(crate) groups: &'static [GroupMeta],
    pub(crate) var_data: &'static [VarDataMeta],
}

impl Block {
    pub(crate) const fn of_group(group: &GroupMeta) -> Self {
        Self {
            known_length: group.block_length,
            fields: group.fields,
            groups: group.groups,
            var_data: group.var_data,
        }
    }
}

fn decode_block(
    reader: &mut SbeReader<'_>,
    block: Block,
    block_length: u16,
) -> Result<Record, DecodeError> {
    let mut record =
        Record::with_capacity(block.fields.len() + block.groups.len() + block.var_data.len());

    for field in block.fields {
        record.insert(field.name, decode_field(reader, field)?);
    }
    reader.skip_block_extension(block_length, block.known_length)?;

    for group in block.groups {
        let mut entries = Vec::new();
        if group.in_acting_version(reader.acting_version()) {
            let dimension = reader.group_dimension(group.dimension)?;
            for _ in 0..dimension.num_in_group {
                entries.push(decode_block(
                    reader,
                    Block::of_group(group),
                    dimension.block_length,
                )?);
            }
        }
        record.insert(group.name, Value::Group(entries));
    }

    for var in block.var_data {
        let data = reader.var_data(var)?;
        let value = match std::str::from_utf8(data) {
            Ok(text) if var.is_string() => Value::String(text.to_string()),
            _ => Value::Bytes(Bytes::copy_from_slice(data)),
        };
        record.insert(var.name, value);
    }

    Ok(record)
}

fn decode_field(reader: &mut SbeReader<'_>, field: &FieldMeta) -> Result<Value, DecodeError> {
    if !field.in_acting_version(reader.acting_version()) {
        return Ok(Value::Null);
    }
    Ok(match field.encoding {
        Encoding::Primitive(ty) => {
            let scalar = reader.read_scalar(ty)?;
            if field.is_optional() && ty.is_null(scalar) {
                Value::Null
            } else {
                Value::from(scalar)
            }
        }
        Encoding::Enum(enumeration) => {
            let code = reader.read_scalar(enumeration.encoding)?.as_u64().unwrap_or_default();
            if code == enumeration.null_code() {
                Value::Null
            } else {
                Value::Enum {
                    code,
                    name: enumeration.name_of(code),
                }
            }
        }
        Encoding::Set(set) => {
            Value::Set(reader.read_scalar(set.encoding)?.as_u64().unwrap_or_default())
        }
        Encoding::Array { .. } => Value::Array(reader.read_bytes(field.encoded_length())?.to_vec()),
    })
}
