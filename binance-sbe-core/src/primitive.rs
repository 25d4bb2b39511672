/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Little-endian primitive encodings.
//!
//! [`Primitive`] ties each Rust numeric type to its SBE encoding and its
//! null, min and max sentinels.

use binance_sbe_schema::{PrimitiveType, ScalarValue};
use bytes::{Buf, BufMut};
use std::fmt;

/// A numeric type with a fixed-width SBE encoding.
pub trait Primitive: Copy + PartialOrd + fmt::Display + fmt::Debug {
    /// Schema type of the encoding.
    const TYPE: PrimitiveType;
    /// Encoded size in bytes.
    const SIZE: usize;
    /// Null sentinel.
    const NULL: Self;
    /// Smallest valid value.
    const MIN: Self;
    /// Largest valid value.
    const MAX: Self;

    /// Reads the value from `buf`. The caller guarantees `SIZE` bytes remain.
    fn get<B: Buf>(buf: &mut B) -> Self;

    /// Writes the value to `buf`. The caller guarantees `SIZE` bytes of room.
    fn put<B: BufMut>(self, buf: &mut B);

    /// Returns true if the value is the null sentinel.
    fn is_null(self) -> bool;

    /// Converts the value to a width-independent scalar.
    fn to_scalar(self) -> ScalarValue;
}

macro_rules! impl_int_primitive {
    ($ty:ty, $schema:ident, $variant:ident, $cast:ty, $null:expr, $min:expr, $max:expr, $get:ident, $put:ident) => {
        impl Primitive for $ty {
            const TYPE: PrimitiveType = PrimitiveType::$schema;
            const SIZE: usize = std::mem::size_of::<$ty>();
            const NULL: Self = $null;
            const MIN: Self = $min;
            const MAX: Self = $max;

            #[inline]
            fn get<B: Buf>(buf: &mut B) -> Self {
                buf.$get()
            }

            #[inline]
            fn put<B: BufMut>(self, buf: &mut B) {
                buf.$put(self);
            }

            #[inline]
            fn is_null(self) -> bool {
                self == Self::NULL
            }

            #[inline]
            fn to_scalar(self) -> ScalarValue {
                ScalarValue::$variant(self as $cast)
            }
        }
    };
}

impl_int_primitive!(i8, Int8, Int, i64, i8::MIN, i8::MIN + 1, i8::MAX, get_i8, put_i8);
impl_int_primitive!(i16, Int16, Int, i64, i16::MIN, i16::MIN + 1, i16::MAX, get_i16_le, put_i16_le);
impl_int_primitive!(i32, Int32, Int, i64, i32::MIN, i32::MIN + 1, i32::MAX, get_i32_le, put_i32_le);
impl_int_primitive!(i64, Int64, Int, i64, i64::MIN, i64::MIN + 1, i64::MAX, get_i64_le, put_i64_le);
impl_int_primitive!(u8, Uint8, UInt, u64, u8::MAX, 0, u8::MAX - 1, get_u8, put_u8);
impl_int_primitive!(u16, Uint16, UInt, u64, u16::MAX, 0, u16::MAX - 1, get_u16_le, put_u16_le);
impl_int_primitive!(u32, Uint32, UInt, u64, u32::MAX, 0, u32::MAX - 1, get_u32_le, put_u32_le);
impl_int_primitive!(u64, Uint64, UInt, u64, u64::MAX, 0, u64::MAX - 1, get_u64_le, put_u64_le);

impl Primitive for f32 {
    const TYPE: PrimitiveType = PrimitiveType::Float;
    const SIZE: usize = 4;
    const NULL: Self = f32::NAN;
    const MIN: Self = -f32::MAX;
    const MAX: Self = f32::MAX;

    #[inline]
    fn get<B: Buf>(buf: &mut B) -> Self {
        buf.get_f32_le()
    }

    #[inline]
    fn put<B: BufMut>(self, buf: &mut B) {
        buf.put_f32_le(self);
    }

    #[inline]
    fn is_null(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn to_scalar(self) -> ScalarValue {
        ScalarValue::Float(f64::from(self))
    }
}

impl Primitive for f64 {
    const TYPE: PrimitiveType = PrimitiveType::Double;
    const SIZE: usize = 8;
    const NULL: Self = f64::NAN;
    const MIN: Self = -f64::MAX;
    const MAX: Self = f64::MAX;

    #[inline]
    fn get<B: Buf>(buf: &mut B) -> Self {
        buf.get_f64_le()
    }

    #[inline]
    fn put<B: BufMut>(self, buf: &mut B) {
        buf.put_f64_le(self);
    }

    #[inline]
    fn is_null(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn to_scalar(self) -> ScalarValue {
        ScalarValue::Float(self)
    }
}
