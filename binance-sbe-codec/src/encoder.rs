/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema-driven encoder.
//!
//! This module encodes a [`Record`] into any message registered in a
//! [`Schema`]. Messages are always written at the schema's own version.

use crate::decoder::Block;
use crate::validate::range_check;
use crate::value::{Record, Value};
use binance_sbe_core::{CodecConfig, EncodeError, MessageHeader, SbeError, SbeWriter};
use binance_sbe_schema::{Encoding, FieldMeta, ScalarValue, Schema, fields_length};
use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};

/// Encoder for messages of a registered schema.
#[derive(Debug, Clone)]
pub struct SbeEncoder<'s> {
    schema: &'s Schema,
    config: CodecConfig,
}

impl<'s> SbeEncoder<'s> {
    /// Creates an encoder with the default configuration.
    #[must_use]
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_config(schema, CodecConfig::default())
    }

    /// Creates an encoder with the given configuration.
    #[must_use]
    pub fn with_config(schema: &'s Schema, config: CodecConfig) -> Self {
        Self { schema, config }
    }

    /// Encodes `record` as the message with `template_id`.
    ///
    /// Absent optional fields and enumerations are written as null, absent
    /// sets as empty, absent groups and var data as empty.
    ///
    /// # Arguments
    /// * `template_id` - Template of the message to write
    /// * `record` - Field values keyed by schema name
    ///
    /// # Returns
    /// The header and body bytes.
    ///
    /// # Errors
    /// Returns `EncodeError::UnknownTemplate`, `EncodeError::MissingField` for
    /// an absent required field, `EncodeError::TypeMismatch` for a value that
    /// does not fit its field, or the first range check failure.
    pub fn encode(&self, template_id: u16, record: &Record) -> Result<BytesMut, SbeError> {
        let Some(meta) = self.schema.get_message(template_id) else {
            debug!(template_id, "no layout for template");
            return Err(EncodeError::UnknownTemplate(template_id).into());
        };

        if self.config.range_check_on_encode {
            range_check(meta, record, meta.schema_version, meta.schema_version)?;
        }

        let mut buf =
            BytesMut::with_capacity(MessageHeader::ENCODED_LENGTH + usize::from(meta.block_length));
        MessageHeader::new(
            meta.block_length,
            meta.template_id,
            meta.schema_id,
            meta.schema_version,
        )
        .encode(&mut buf)?;

        let mut writer = SbeWriter::new(&mut buf);
        encode_block(
            &mut writer,
            Block {
                known_length: meta.block_length,
                fields: meta.fields,
                groups: meta.groups,
                var_data: meta.var_data,
            },
            record,
        )?;

        trace!(name = meta.name, size = buf.len(), "encoded message");
        Ok(buf)
    }
}

fn encode_block<B: BufMut>(
    writer: &mut SbeWriter<'_, B>,
    block: Block,
    record: &Record,
) -> Result<(), EncodeError> {
    for field in block.fields {
        encode_field(writer, field, record.get(field.name))?;
    }
    let padding = usize::from(block.known_length).saturating_sub(fields_length(block.fields));
    writer.fill(0, padding)?;

    for group in block.groups {
        let entries = match record.get(group.name) {
            None | Some(Value::Null) => &[][..],
            Some(Value::Group(entries)) => entries.as_slice(),
            Some(_) => return Err(mismatch(group.name, "group")),
        };
        writer.group_dimension(group.dimension, group.block_length, entries.len(), group.name)?;
        for entry in entries {
            encode_block(writer, Block::of_group(group), entry)?;
        }
    }

    for var in block.var_data {
        let data: &[u8] = match record.get(var.name) {
            None | Some(Value::Null) => &[],
            Some(Value::String(text)) => text.as_bytes(),
            Some(Value::Bytes(bytes)) => bytes.as_ref(),
            Some(_) => return Err(mismatch(var.name, "var data")),
        };
        writer.var_data(var, data)?;
    }
    Ok(())
}

fn encode_field<B: BufMut>(
    writer: &mut SbeWriter<'_, B>,
    field: &FieldMeta,
    value: Option<&Value>,
) -> Result<(), EncodeError> {
    let value = value.filter(|v| !v.is_null());
    match (field.encoding, value) {
        (Encoding::Primitive(ty), None) if field.is_optional() => {
            writer.write_scalar(ty, ty.null_value(), field.name)
        }
        (Encoding::Primitive(_), None) => Err(EncodeError::MissingField {
            field: field.name.to_string(),
        }),
        (Encoding::Primitive(ty), Some(v)) => {
            let scalar = v.as_scalar().ok_or_else(|| mismatch(field.name, ty.name()))?;
            writer.write_scalar(ty, scalar, field.name)
        }
        (Encoding::Enum(enumeration), None) => {
            writer.write_scalar(enumeration.encoding, enumeration.encoding.null_value(), field.name)
        }
        (Encoding::Enum(enumeration), Some(Value::Enum { code, .. } | Value::UInt(code))) => {
            writer.write_scalar(enumeration.encoding, ScalarValue::UInt(*code), field.name)
        }
        (Encoding::Enum(enumeration), Some(_)) => Err(mismatch(field.name, enumeration.name)),
        (Encoding::Set(set), None) => writer.write_scalar(set.encoding, ScalarValue::UInt(0), field.name),
        (Encoding::Set(set), Some(Value::Set(bits) | Value::UInt(bits))) => {
            writer.write_scalar(set.encoding, ScalarValue::UInt(*bits), field.name)
        }
        (Encoding::Set(set), Some(_)) => Err(mismatch(field.name, set.name)),
        (Encoding::Array { primitive, length }, None) => {
            let null = primitive.null_value().as_u64().unwrap_or_default() as u8;
            writer.fill(null, length)
        }
        (Encoding::Array { length, .. }, Some(Value::Array(bytes))) if bytes.len() == length => {
            writer.bytes(bytes)
        }
        (Encoding::Array { .. }, Some(_)) => Err(mismatch(field.name, "fixed array")),
    }
}

fn mismatch(field: &str, expected: &str) -> EncodeError {
    EncodeError::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::SbeDecoder;
    use binance_sbe_core::{DecodeError, RangeError};
    use binance_sbe_schema::{
        DimensionEncoding, EnumMeta, GroupMeta, LengthPrefix, MessageMeta, PrimitiveType,
        ValidValue, VarDataMeta,
    };

    const STATUS: EnumMeta = EnumMeta {
        name: "OrderStatus",
        encoding: PrimitiveType::Uint8,
        values: &[ValidValue::new("New", 0), ValidValue::new("Filled", 2)],
    };
    const ENTRY_FIELDS: &[FieldMeta] = &[FieldMeta::new("orderId", 1, Encoding::INT64)];
    const ENTRY_VAR: &[VarDataMeta] = &[VarDataMeta::string("clientOrderId", 200, LengthPrefix::U8)];
    const GROUPS: &[GroupMeta] = &[GroupMeta::new("orders", 100, DimensionEncoding::GroupSize16, 8)
        .with_fields(ENTRY_FIELDS)
        .with_var_data(ENTRY_VAR)];
    const FIELDS: &[FieldMeta] = &[
        FieldMeta::new("orderListId", 1, Encoding::INT64),
        FieldMeta::new("status", 2, Encoding::Enum(&STATUS)),
        FieldMeta::new("limitPrice", 3, Encoding::INT64).optional(),
    ];
    const VAR_DATA: &[VarDataMeta] = &[
        VarDataMeta::string("listClientOrderId", 201, LengthPrefix::U8),
        VarDataMeta::binary("payload", 202, LengthPrefix::U16),
    ];
    const LIST: MessageMeta = MessageMeta {
        name: "List",
        template_id: 60,
        schema_id: 3,
        schema_version: 2,
        semantic_version: "5.2",
        block_length: 20,
        fields: FIELDS,
        groups: GROUPS,
        var_data: VAR_DATA,
    };

    fn schema() -> Schema {
        let mut schema = Schema::new(3, 2, "5.2");
        schema.add_message(&LIST).unwrap();
        schema
    }

    fn record() -> Record {
        Record::new()
            .with("orderListId", 11i64)
            .with("status", Value::Enum { code: 2, name: Some("Filled") })
            .with(
                "orders",
                vec![
                    Record::new().with("orderId", 1i64).with("clientOrderId", "a"),
                    Record::new().with("orderId", 2i64).with("clientOrderId", "b"),
                ],
            )
            .with("listClientOrderId", "list-1")
    }

    #[test]
    fn test_encode_layout() {
        let schema = schema();
        let bytes = SbeEncoder::new(&schema).encode(60, &record()).unwrap();
        assert_eq!(&bytes[..8], &[20, 0, 60, 0, 3, 0, 2, 0]);
        // optional price null, then three bytes of padding
        assert_eq!(&bytes[17..25], &i64::MIN.to_le_bytes());
        assert_eq!(&bytes[25..28], &[0, 0, 0]);
        // groupSize16 dimension
        assert_eq!(&bytes[28..32], &[8, 0, 2, 0]);
    }

    #[test]
    fn test_encode_then_decode_agrees() {
        let schema = schema();
        let bytes = SbeEncoder::new(&schema).encode(60, &record()).unwrap();
        let decoded = SbeDecoder::new(&schema).decode(&bytes).unwrap();
        let out = decoded.record;
        assert_eq!(out.get("orderListId"), Some(&Value::Int(11)));
        assert_eq!(out.get("limitPrice"), Some(&Value::Null));
        let orders = out.get("orders").and_then(Value::as_group).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].get("clientOrderId").and_then(Value::as_str), Some("b"));
        assert_eq!(out.get("payload"), Some(&Value::Bytes(bytes::Bytes::new())));
        assert_eq!(decoded.encoded_length, bytes.len());
    }

    #[test]
    fn test_missing_required_field() {
        let schema = schema();
        let encoder =
            SbeEncoder::with_config(&schema, CodecConfig::new().with_range_check_on_encode(false));
        let record = Record::new().with("status", 0u64);
        assert_eq!(
            encoder.encode(60, &record),
            Err(SbeError::Encode(EncodeError::MissingField {
                field: "orderListId".to_string(),
            }))
        );
    }

    #[test]
    fn test_type_mismatch_and_unknown_template() {
        let schema = schema();
        let encoder = SbeEncoder::new(&schema);
        let record = record().with("orderListId", "eleven");
        assert!(matches!(
            encoder.encode(60, &record),
            Err(SbeError::Encode(EncodeError::TypeMismatch { .. }))
        ));
        assert_eq!(
            encoder.encode(61, &Record::new()),
            Err(SbeError::Encode(EncodeError::UnknownTemplate(61)))
        );
    }

    #[test]
    fn test_round_trip_with_other_schema_id() {
        const OTHER: MessageMeta = MessageMeta {
            schema_id: 7,
            ..LIST
        };
        let mut other = Schema::new(7, 2, "5.2");
        other.add_message(&OTHER).unwrap();

        let bytes = SbeEncoder::new(&other).encode(60, &record()).unwrap();
        assert_eq!(&bytes[4..6], &[7, 0]);
        let decoded = SbeDecoder::new(&other).decode(&bytes).unwrap();
        assert_eq!(decoded.record.get("orderListId"), Some(&Value::Int(11)));

        assert_eq!(
            SbeDecoder::new(&schema()).decode(&bytes),
            Err(SbeError::Decode(DecodeError::SchemaMismatch {
                expected: 3,
                actual: 7,
            }))
        );
    }

    #[test]
    fn test_range_check_on_encode() {
        let schema = schema();
        let record = record().with("orderListId", i64::MIN);
        assert!(matches!(
            SbeEncoder::new(&schema).encode(60, &record),
            Err(SbeError::Range(RangeError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_var_data_too_long() {
        let schema = schema();
        let record = record().with("listClientOrderId", "x".repeat(300));
        assert!(matches!(
            SbeEncoder::new(&schema).encode(60, &record),
            Err(SbeError::Encode(EncodeError::VarDataTooLong { max_length: 255, .. }))
        ));
    }
}
