/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Traits for enumerations and choice sets carried in fixed fields.

use crate::primitive::Primitive;
use binance_sbe_schema::{EnumMeta, SetMeta};
use std::fmt;

/// A single-byte SBE enumeration.
///
/// Implementors carry a null variant and a non-representable variant in
/// addition to the schema values, so every code a decoder accepts maps to a
/// variant.
pub trait SbeEnum: Copy + Eq + fmt::Debug + 'static {
    /// Value table of the enumeration.
    const META: &'static EnumMeta;
    /// Variant carrying the null code.
    const NULL: Self;
    /// Variant for values a newer schema added.
    const NON_REPRESENTABLE: Self;

    /// Maps a wire code to a variant.
    fn from_code(code: u8) -> Option<Self>;

    /// Returns the wire code of the variant.
    fn code(self) -> u8;

    /// Returns true for the null variant.
    fn is_null(self) -> bool {
        self == Self::NULL
    }
}

/// An SBE choice set stored as a bitmask.
pub trait SbeSet: Copy + Eq + Default + fmt::Debug {
    /// Underlying encoding.
    type Raw: Primitive;
    /// Choice table of the set.
    const META: &'static SetMeta;

    /// Wraps raw bits.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Returns the raw bits.
    fn raw(self) -> Self::Raw;
}
