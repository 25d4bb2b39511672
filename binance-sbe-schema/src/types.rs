/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Encoding primitives shared by every schema descriptor.
//!
//! This module defines:
//! - [`PrimitiveType`]: the SBE primitive encodings with their null, min and max values
//! - [`ScalarValue`]: a type-erased numeric value used for sentinels and dynamic decoding
//! - [`Presence`]: required, optional or constant fields
//! - [`LengthPrefix`]: var data length header widths
//! - [`DimensionEncoding`]: repeating group dimension layouts

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SBE primitive encoding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Single byte character.
    Char,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// IEEE 754 single precision float.
    Float,
    /// IEEE 754 double precision float.
    Double,
}

impl PrimitiveType {
    /// Returns the encoded size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Char | Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float => 4,
            Self::Int64 | Self::Uint64 | Self::Double => 8,
        }
    }

    /// Returns the schema name of this type (e.g. `"int64"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Returns true for the signed integer types.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true for the floating point types.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Returns the null sentinel for this type.
    #[must_use]
    pub const fn null_value(&self) -> ScalarValue {
        match self {
            Self::Char => ScalarValue::UInt(0),
            Self::Int8 => ScalarValue::Int(i8::MIN as i64),
            Self::Int16 => ScalarValue::Int(i16::MIN as i64),
            Self::Int32 => ScalarValue::Int(i32::MIN as i64),
            Self::Int64 => ScalarValue::Int(i64::MIN),
            Self::Uint8 => ScalarValue::UInt(u8::MAX as u64),
            Self::Uint16 => ScalarValue::UInt(u16::MAX as u64),
            Self::Uint32 => ScalarValue::UInt(u32::MAX as u64),
            Self::Uint64 => ScalarValue::UInt(u64::MAX),
            Self::Float | Self::Double => ScalarValue::Float(f64::NAN),
        }
    }

    /// Returns the smallest valid (non-null) value.
    #[must_use]
    pub const fn min_value(&self) -> ScalarValue {
        match self {
            Self::Char => ScalarValue::UInt(0x20),
            Self::Int8 => ScalarValue::Int(i8::MIN as i64 + 1),
            Self::Int16 => ScalarValue::Int(i16::MIN as i64 + 1),
            Self::Int32 => ScalarValue::Int(i32::MIN as i64 + 1),
            Self::Int64 => ScalarValue::Int(i64::MIN + 1),
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 => ScalarValue::UInt(0),
            Self::Float => ScalarValue::Float(-(f32::MAX as f64)),
            Self::Double => ScalarValue::Float(-f64::MAX),
        }
    }

    /// Returns the largest valid (non-null) value.
    #[must_use]
    pub const fn max_value(&self) -> ScalarValue {
        match self {
            Self::Char => ScalarValue::UInt(0x7e),
            Self::Int8 => ScalarValue::Int(i8::MAX as i64),
            Self::Int16 => ScalarValue::Int(i16::MAX as i64),
            Self::Int32 => ScalarValue::Int(i32::MAX as i64),
            Self::Int64 => ScalarValue::Int(i64::MAX),
            Self::Uint8 => ScalarValue::UInt(u8::MAX as u64 - 1),
            Self::Uint16 => ScalarValue::UInt(u16::MAX as u64 - 1),
            Self::Uint32 => ScalarValue::UInt(u32::MAX as u64 - 1),
            Self::Uint64 => ScalarValue::UInt(u64::MAX - 1),
            Self::Float => ScalarValue::Float(f32::MAX as f64),
            Self::Double => ScalarValue::Float(f64::MAX),
        }
    }

    /// Returns true if `value` is the null sentinel of this type.
    #[must_use]
    pub fn is_null(&self, value: ScalarValue) -> bool {
        match (self.null_value(), value) {
            (ScalarValue::Float(_), ScalarValue::Float(v)) => v.is_nan(),
            (null, v) => null == v,
        }
    }

    /// Returns true if `value` lies within `min_value()..=max_value()`.
    #[must_use]
    pub fn in_range(&self, value: ScalarValue) -> bool {
        match (self.min_value(), value, self.max_value()) {
            (ScalarValue::Int(min), ScalarValue::Int(v), ScalarValue::Int(max)) => {
                (min..=max).contains(&v)
            }
            (ScalarValue::UInt(min), ScalarValue::UInt(v), ScalarValue::UInt(max)) => {
                (min..=max).contains(&v)
            }
            // NaN compares false on both sides and passes.
            (ScalarValue::Float(min), ScalarValue::Float(v), ScalarValue::Float(max)) => {
                !(v < min || v > max)
            }
            _ => false,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PrimitiveType {
    type Err = SchemaError;

    /// Parses a schema primitive type name.
    ///
    /// # Arguments
    /// * `s` - The type name as it appears in an SBE schema
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "char" => Self::Char,
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint8" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "float" => Self::Float,
            "double" => Self::Double,
            other => return Err(SchemaError::UnknownPrimitiveType(other.to_string())),
        })
    }
}

/// A numeric value detached from its wire width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
}

impl ScalarValue {
    /// Returns the value as `i64` if it is a signed integer.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is an unsigned integer.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `f64` if it is a float.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Field presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    /// The field always carries a value.
    Required,
    /// The field may carry the null sentinel.
    Optional,
    /// The field is a schema constant and is not on the wire.
    Constant,
}

impl Presence {
    /// Returns the schema spelling of this presence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Constant => "constant",
        }
    }
}

/// Width of the length header in front of var data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthPrefix {
    /// `uint8` length.
    U8,
    /// `uint16` length.
    U16,
    /// `uint32` length.
    U32,
}

impl LengthPrefix {
    /// Returns the header size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Returns the largest payload length the header can express.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        match self {
            Self::U8 => u8::MAX as usize,
            Self::U16 => u16::MAX as usize,
            Self::U32 => u32::MAX as usize,
        }
    }
}

/// Repeating group dimension layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionEncoding {
    /// `groupSizeEncoding`: `uint16` block length, `uint32` count.
    GroupSize,
    /// `groupSize16Encoding`: `uint16` block length, `uint16` count.
    GroupSize16,
}

impl DimensionEncoding {
    /// Returns the encoded size of the dimension header.
    #[must_use]
    pub const fn encoded_length(&self) -> usize {
        match self {
            Self::GroupSize => 6,
            Self::GroupSize16 => 4,
        }
    }

    /// Returns the largest entry count the header can express.
    #[must_use]
    pub const fn max_count(&self) -> usize {
        match self {
            Self::GroupSize => u32::MAX as usize,
            Self::GroupSize16 => u16::MAX as usize,
        }
    }

    /// Returns the composite type name used by the schema.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GroupSize => "groupSizeEncoding",
            Self::GroupSize16 => "groupSize16Encoding",
        }
    }
}

/// Field meta attributes, in the order generated accessors expose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetaAttribute {
    /// Epoch of a time field.
    Epoch,
    /// Unit of a time field.
    TimeUnit,
    /// Semantic type annotation.
    SemanticType,
    /// Field presence.
    Presence,
}
