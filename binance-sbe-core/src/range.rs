/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Range checks against schema bounds.
//!
//! Required fields must lie within `min..=max` of their primitive type.
//! Optional fields holding the null sentinel are accepted. Fields newer than
//! the acting version are never checked.

use crate::enums::SbeEnum;
use crate::error::RangeError;
use crate::primitive::Primitive;
use binance_sbe_schema::{EnumMeta, FieldMeta, ScalarValue, VarDataMeta};

fn out_of_range<T: Primitive>(field: String, value: T) -> RangeError {
    RangeError::OutOfRange {
        field,
        value: value.to_string(),
        min: T::MIN.to_string(),
        max: T::MAX.to_string(),
    }
}

#[inline]
fn within<T: Primitive>(value: T) -> bool {
    !(value < T::MIN || value > T::MAX)
}

/// Checks a required field.
///
/// # Errors
/// Returns `RangeError::OutOfRange` naming the field and its bounds.
pub fn check_required<T: Primitive>(
    value: T,
    meta: &FieldMeta,
    acting_version: u16,
) -> Result<(), RangeError> {
    if !meta.in_acting_version(acting_version) || within(value) {
        return Ok(());
    }
    Err(out_of_range(meta.name.to_string(), value))
}

/// Checks an optional field. `None` and the null sentinel pass.
///
/// # Errors
/// Returns `RangeError::OutOfRange` naming the field and its bounds.
pub fn check_optional<T: Primitive>(
    value: Option<T>,
    meta: &FieldMeta,
    acting_version: u16,
) -> Result<(), RangeError> {
    match value {
        Some(v) if !v.is_null() => check_required(v, meta, acting_version),
        _ => Ok(()),
    }
}

/// Checks every element of a fixed `uint8` array.
///
/// # Errors
/// Returns `RangeError::OutOfRange` naming the field and the element index.
pub fn check_array(values: &[u8], meta: &FieldMeta, acting_version: u16) -> Result<(), RangeError> {
    if !meta.in_acting_version(acting_version) {
        return Ok(());
    }
    match values.iter().position(|v| !within(*v)) {
        Some(idx) => Err(out_of_range(format!("{}[{}]", meta.name, idx), values[idx])),
        None => Ok(()),
    }
}

/// Checks a value whose type is only known at runtime.
///
/// # Errors
/// Returns `RangeError::OutOfRange` naming the field and its bounds.
pub fn check_scalar(
    value: ScalarValue,
    meta: &FieldMeta,
    field: &str,
    acting_version: u16,
) -> Result<(), RangeError> {
    if !meta.in_acting_version(acting_version) {
        return Ok(());
    }
    let ty = meta.encoding.primitive();
    if meta.is_optional() && ty.is_null(value) {
        return Ok(());
    }
    if ty.in_range(value) {
        return Ok(());
    }
    Err(RangeError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        min: ty.min_value().to_string(),
        max: ty.max_value().to_string(),
    })
}

/// Checks an enumeration code against its value table.
///
/// Any code passes when the data comes from a newer schema version.
///
/// # Errors
/// Returns `RangeError::UnknownEnumValue` for a code outside the table.
pub fn check_enum_code(
    code: u64,
    enumeration: &EnumMeta,
    meta: &FieldMeta,
    acting_version: u16,
    schema_version: u16,
) -> Result<(), RangeError> {
    if acting_version > schema_version
        || !meta.in_acting_version(acting_version)
        || enumeration.is_valid(code)
    {
        return Ok(());
    }
    Err(RangeError::UnknownEnumValue {
        field: meta.name.to_string(),
        value: code,
    })
}

/// Checks a typed enumeration field.
///
/// A non-representable value stands for a code the reader did not know, so it
/// only passes when the data comes from a newer schema version.
///
/// # Errors
/// Returns `RangeError::UnknownEnumValue` for a code outside the table.
pub fn check_enum<E: SbeEnum>(
    value: E,
    meta: &FieldMeta,
    acting_version: u16,
    schema_version: u16,
) -> Result<(), RangeError> {
    let code = value.code();
    if code == E::NON_REPRESENTABLE.code()
        && acting_version <= schema_version
        && meta.in_acting_version(acting_version)
    {
        return Err(RangeError::UnknownEnumValue {
            field: meta.name.to_string(),
            value: u64::from(code),
        });
    }
    check_enum_code(
        u64::from(code),
        E::META,
        meta,
        acting_version,
        schema_version,
    )
}

/// Checks that a UTF-8 var data field holds valid UTF-8.
///
/// # Errors
/// Returns `RangeError::InvalidUtf8` naming the field.
pub fn check_utf8(data: &[u8], meta: &VarDataMeta) -> Result<(), RangeError> {
    if !meta.is_string() || std::str::from_utf8(data).is_ok() {
        return Ok(());
    }
    Err(RangeError::InvalidUtf8 {
        field: meta.name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_sbe_schema::{Encoding, LengthPrefix, PrimitiveType, ValidValue};

    const ORDER_ID: FieldMeta = FieldMeta::new("orderId", 1, Encoding::INT64);
    const STOP_PRICE: FieldMeta = FieldMeta::new("stopPrice", 2, Encoding::INT64).optional();
    const PEG_LEVEL: FieldMeta = FieldMeta::new("pegPriceLevel", 3, Encoding::UINT8)
        .optional()
        .since(1);
    const LAST_QTY: FieldMeta = FieldMeta::new(
        "lastQty",
        4,
        Encoding::Array {
            primitive: PrimitiveType::Uint8,
            length: 16,
        },
    );
    const SIDE: EnumMeta = EnumMeta {
        name: "OrderSide",
        encoding: PrimitiveType::Uint8,
        values: &[ValidValue::new("Buy", 0), ValidValue::new("Sell", 1)],
    };
    const SIDE_FIELD: FieldMeta = FieldMeta::new("side", 5, Encoding::Enum(&SIDE));

    #[test]
    fn test_required_null_is_out_of_range() {
        let err = check_required(i64::MIN, &ORDER_ID, 2).unwrap_err();
        assert_eq!(
            err,
            RangeError::OutOfRange {
                field: "orderId".to_string(),
                value: i64::MIN.to_string(),
                min: (i64::MIN + 1).to_string(),
                max: i64::MAX.to_string(),
            }
        );
        assert!(check_required(0i64, &ORDER_ID, 2).is_ok());
    }

    #[test]
    fn test_optional_null_passes() {
        assert!(check_optional::<i64>(None, &STOP_PRICE, 2).is_ok());
        assert!(check_optional(Some(i64::MIN), &STOP_PRICE, 2).is_ok());
        assert!(check_optional(Some(-5i64), &STOP_PRICE, 2).is_ok());
    }

    #[test]
    fn test_field_newer_than_acting_version_not_checked() {
        assert!(check_required(255u8, &PEG_LEVEL, 0).is_ok());
    }

    #[test]
    fn test_array_reports_element_index() {
        let mut qty = [0u8; 16];
        qty[3] = 255;
        let err = check_array(&qty, &LAST_QTY, 2).unwrap_err();
        assert!(err.to_string().starts_with("range check failed on lastQty[3]"));
        assert!(check_array(&[1u8; 16], &LAST_QTY, 2).is_ok());
    }

    #[test]
    fn test_scalar_checks() {
        assert!(check_scalar(ScalarValue::Int(i64::MIN), &STOP_PRICE, "stopPrice", 2).is_ok());
        assert!(check_scalar(ScalarValue::Int(i64::MIN), &ORDER_ID, "orderId", 2).is_err());
        assert!(check_scalar(ScalarValue::UInt(1), &ORDER_ID, "orderId", 2).is_err());
    }

    #[test]
    fn test_enum_codes() {
        assert!(check_enum_code(1, &SIDE, &SIDE_FIELD, 2, 2).is_ok());
        assert!(check_enum_code(255, &SIDE, &SIDE_FIELD, 2, 2).is_ok());
        assert_eq!(
            check_enum_code(7, &SIDE, &SIDE_FIELD, 2, 2),
            Err(RangeError::UnknownEnumValue {
                field: "side".to_string(),
                value: 7,
            })
        );
        assert!(check_enum_code(7, &SIDE, &SIDE_FIELD, 3, 2).is_ok());
    }

    #[test]
    fn test_utf8() {
        let symbol = VarDataMeta::string("symbol", 200, LengthPrefix::U8);
        let filters = VarDataMeta::binary("filter", 201, LengthPrefix::U16);
        assert!(check_utf8(b"BTCUSDT", &symbol).is_ok());
        assert_eq!(
            check_utf8(&[0xc3, 0x28], &symbol).unwrap_err().to_string(),
            "symbol failed UTF-8 validation"
        );
        assert!(check_utf8(&[0xc3, 0x28], &filters).is_ok());
    }
}
