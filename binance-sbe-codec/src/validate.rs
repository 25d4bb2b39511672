/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Range checking of dynamic records.

use crate::decoder::Block;
use crate::value::{Record, Value};
use binance_sbe_core::RangeError;
use binance_sbe_core::range::{check_array, check_enum_code, check_scalar, check_utf8};
use binance_sbe_schema::{Encoding, MessageMeta};

/// Checks every value of `record` against the bounds of `meta`.
///
/// Values missing from the record are not checked; the encoder reports
/// missing required fields itself.
///
/// # Arguments
/// * `meta` - Message layout
/// * `record` - Values to check
/// * `acting_version` - Version the values were encoded with
/// * `schema_version` - Version of the layout
///
/// # Errors
/// Returns the first field found out of range.
pub fn range_check(
    meta: &MessageMeta,
    record: &Record,
    acting_version: u16,
    schema_version: u16,
) -> Result<(), RangeError> {
    check_block(
        Block {
            known_length: meta.block_length,
            fields: meta.fields,
            groups: meta.groups,
            var_data: meta.var_data,
        },
        record,
        acting_version,
        schema_version,
    )
}

fn check_block(
    block: Block,
    record: &Record,
    acting_version: u16,
    schema_version: u16,
) -> Result<(), RangeError> {
    for field in block.fields {
        match (field.encoding, record.get(field.name)) {
            (Encoding::Primitive(_), Some(value)) => {
                if let Some(scalar) = value.as_scalar() {
                    check_scalar(scalar, field, field.name, acting_version)?;
                }
            }
            (Encoding::Enum(enumeration), Some(Value::Enum { code, .. } | Value::UInt(code))) => {
                check_enum_code(*code, enumeration, field, acting_version, schema_version)?;
            }
            (Encoding::Array { .. }, Some(Value::Array(bytes))) => {
                check_array(bytes, field, acting_version)?;
            }
            _ => {}
        }
    }

    for group in block.groups {
        if !group.in_acting_version(acting_version) {
            continue;
        }
        if let Some(Value::Group(entries)) = record.get(group.name) {
            for entry in entries {
                check_block(Block::of_group(group), entry, acting_version, schema_version)?;
            }
        }
    }

    for var in block.var_data {
        if let Some(Value::Bytes(bytes)) = record.get(var.name) {
            check_utf8(bytes, var)?;
        }
    }
    Ok(())
}
