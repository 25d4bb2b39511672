/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema-aware buffer reader and writer.
//!
//! [`SbeReader`] walks a borrowed byte slice and applies the acting-version
//! rules of the wire format: fields newer than the acting version decode to
//! their null value, and block extensions written by a newer schema are
//! skipped. [`SbeWriter`] writes through any [`BufMut`] and checks capacity
//! before every write.

use crate::enums::{SbeEnum, SbeSet};
use crate::error::{DecodeError, EncodeError};
use crate::header::GroupDimension;
use crate::message::SbeBlock;
use crate::primitive::Primitive;
use binance_sbe_schema::{
    DimensionEncoding, FieldMeta, GroupMeta, LengthPrefix, PrimitiveType, ScalarValue,
    VarDataMeta,
};
use bytes::{BufMut, Bytes};
use tracing::{debug, trace};

/// Cursor over an encoded message body.
#[derive(Debug, Clone)]
pub struct SbeReader<'a> {
    buf: &'a [u8],
    pos: usize,
    acting_version: u16,
    schema_version: u16,
}

impl<'a> SbeReader<'a> {
    /// Creates a reader over `buf`.
    ///
    /// # Arguments
    /// * `buf` - The encoded bytes, starting after the message header
    /// * `acting_version` - The schema version the data was encoded with
    /// * `schema_version` - The schema version the decoder was compiled against
    #[must_use]
    pub const fn new(buf: &'a [u8], acting_version: u16, schema_version: u16) -> Self {
        Self {
            buf,
            pos: 0,
            acting_version,
            schema_version,
        }
    }

    /// Returns the number of bytes consumed.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes left.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the acting version.
    #[must_use]
    pub const fn acting_version(&self) -> u16 {
        self.acting_version
    }

    /// Returns the compiled schema version.
    #[must_use]
    pub const fn schema_version(&self) -> u16 {
        self.schema_version
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), DecodeError> {
        if self.remaining() < needed {
            return Err(DecodeError::UnexpectedEof {
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Reads one primitive value.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    #[inline]
    pub fn read<T: Primitive>(&mut self) -> Result<T, DecodeError> {
        self.ensure(T::SIZE)?;
        let mut cursor = &self.buf[self.pos..self.pos + T::SIZE];
        self.pos += T::SIZE;
        Ok(T::get(&mut cursor))
    }

    /// Reads one primitive value of a type known only at runtime.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn read_scalar(&mut self, ty: PrimitiveType) -> Result<ScalarValue, DecodeError> {
        Ok(match ty {
            PrimitiveType::Char | PrimitiveType::Uint8 => self.read::<u8>()?.to_scalar(),
            PrimitiveType::Int8 => self.read::<i8>()?.to_scalar(),
            PrimitiveType::Int16 => self.read::<i16>()?.to_scalar(),
            PrimitiveType::Int32 => self.read::<i32>()?.to_scalar(),
            PrimitiveType::Int64 => self.read::<i64>()?.to_scalar(),
            PrimitiveType::Uint16 => self.read::<u16>()?.to_scalar(),
            PrimitiveType::Uint32 => self.read::<u32>()?.to_scalar(),
            PrimitiveType::Uint64 => self.read::<u64>()?.to_scalar(),
            PrimitiveType::Float => self.read::<f32>()?.to_scalar(),
            PrimitiveType::Double => self.read::<f64>()?.to_scalar(),
        })
    }

    /// Reads `len` raw bytes.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(len)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Skips `len` bytes.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn skip(&mut self, len: usize) -> Result<(), DecodeError> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    /// Reads a fixed field, or returns its null value when the acting version
    /// predates the field.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    #[inline]
    pub fn field<T: Primitive>(&mut self, meta: &FieldMeta) -> Result<T, DecodeError> {
        if !meta.in_acting_version(self.acting_version) {
            return Ok(T::NULL);
        }
        self.read()
    }

    /// Reads an optional fixed field, mapping the null value to `None`.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    #[inline]
    pub fn optional<T: Primitive>(&mut self, meta: &FieldMeta) -> Result<Option<T>, DecodeError> {
        let value: T = self.field(meta)?;
        Ok((!value.is_null()).then_some(value))
    }

    /// Reads an enumeration field.
    ///
    /// Fields absent from the acting version decode to the null variant. Codes
    /// unknown to this schema decode to the non-representable variant; the
    /// range check decides whether that is acceptable for the acting version.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn enumeration<E: SbeEnum>(&mut self, meta: &FieldMeta) -> Result<E, DecodeError> {
        if !meta.in_acting_version(self.acting_version) {
            return Ok(E::NULL);
        }
        let code: u8 = self.read()?;
        Ok(E::from_code(code).unwrap_or_else(|| {
            debug!(
                field = meta.name,
                code,
                acting_version = self.acting_version,
                "unknown enum code mapped to NonRepresentable"
            );
            E::NON_REPRESENTABLE
        }))
    }

    /// Reads a choice set field; absent fields decode to the empty set.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn set<S: SbeSet>(&mut self, meta: &FieldMeta) -> Result<S, DecodeError> {
        if !meta.in_acting_version(self.acting_version) {
            return Ok(S::default());
        }
        Ok(S::from_raw(self.read()?))
    }

    /// Reads a fixed-length `uint8` array; absent fields fill with the null value.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn array<const N: usize>(&mut self, meta: &FieldMeta) -> Result<[u8; N], DecodeError> {
        if !meta.in_acting_version(self.acting_version) {
            return Ok([u8::NULL; N]);
        }
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Skips the trailing bytes of a block written by a newer schema version.
    ///
    /// Applies only when the acting version is newer than the compiled schema
    /// and `block_length` exceeds the known block length.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn skip_block_extension(&mut self, block_length: u16, known: u16) -> Result<(), DecodeError> {
        if self.acting_version > self.schema_version && block_length > known {
            let extra = usize::from(block_length - known);
            trace!(
                block_length,
                known,
                acting_version = self.acting_version,
                "skipping {} unknown block bytes",
                extra
            );
            self.skip(extra)?;
        }
        Ok(())
    }

    /// Reads a group dimension header.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn group_dimension(
        &mut self,
        encoding: DimensionEncoding,
    ) -> Result<GroupDimension, DecodeError> {
        let block_length: u16 = self.read()?;
        let num_in_group = match encoding {
            DimensionEncoding::GroupSize => self.read::<u32>()?,
            DimensionEncoding::GroupSize16 => u32::from(self.read::<u16>()?),
        };
        Ok(GroupDimension {
            block_length,
            num_in_group,
        })
    }

    /// Reads a repeating group of typed entries.
    ///
    /// Groups absent from the acting version decode as empty.
    ///
    /// # Errors
    /// Returns the first error raised while decoding an entry.
    pub fn group<T: SbeBlock>(&mut self, meta: &GroupMeta) -> Result<Vec<T>, DecodeError> {
        if !meta.in_acting_version(self.acting_version) {
            return Ok(Vec::new());
        }
        let dimension = self.group_dimension(meta.dimension)?;
        let count = dimension.num_in_group as usize;
        // Bound the allocation by what the buffer could possibly hold.
        let per_entry = usize::from(dimension.block_length).max(1);
        let mut entries = Vec::with_capacity(count.min(self.remaining() / per_entry));
        for _ in 0..count {
            entries.push(T::decode(self, dimension.block_length)?);
        }
        Ok(entries)
    }

    /// Reads a var data field as raw bytes borrowed from the buffer.
    ///
    /// Fields absent from the acting version decode as empty.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn var_data(&mut self, meta: &VarDataMeta) -> Result<&'a [u8], DecodeError> {
        if !meta.in_acting_version(self.acting_version) {
            return Ok(&[]);
        }
        let len = match meta.length_prefix {
            LengthPrefix::U8 => usize::from(self.read::<u8>()?),
            LengthPrefix::U16 => usize::from(self.read::<u16>()?),
            LengthPrefix::U32 => self.read::<u32>()? as usize,
        };
        self.read_bytes(len)
    }

    /// Reads a UTF-8 var data field.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidUtf8` if the bytes are not UTF-8, or
    /// `DecodeError::UnexpectedEof`.
    pub fn var_string(&mut self, meta: &VarDataMeta) -> Result<String, DecodeError> {
        let bytes = self.var_data(meta)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8 {
                field: meta.name.to_string(),
            })
    }

    /// Reads a binary var data field into owned bytes.
    ///
    /// # Errors
    /// Returns `DecodeError::UnexpectedEof` if the buffer is too short.
    pub fn var_bytes(&mut self, meta: &VarDataMeta) -> Result<Bytes, DecodeError> {
        self.var_data(meta).map(Bytes::copy_from_slice)
    }
}

/// Schema-aware writer over a [`BufMut`].
#[derive(Debug)]
pub struct SbeWriter<'a, B: BufMut> {
    buf: &'a mut B,
    written: usize,
}

impl<'a, B: BufMut> SbeWriter<'a, B> {
    /// Creates a writer appending to `buf`.
    pub fn new(buf: &'a mut B) -> Self {
        Self { buf, written: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), EncodeError> {
        let available = self.buf.remaining_mut();
        if available < needed {
            return Err(EncodeError::BufferOverflow { needed, available });
        }
        Ok(())
    }

    /// Writes one primitive value.
    ///
    /// # Errors
    /// Returns `EncodeError::BufferOverflow` if the buffer is full.
    #[inline]
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<(), EncodeError> {
        self.ensure(T::SIZE)?;
        value.put(&mut *self.buf);
        self.written += T::SIZE;
        Ok(())
    }

    /// Writes an optional value, `None` as the null sentinel.
    ///
    /// # Errors
    /// Returns `EncodeError::BufferOverflow` if the buffer is full.
    #[inline]
    pub fn optional<T: Primitive>(&mut self, value: Option<T>) -> Result<(), EncodeError> {
        self.write(value.unwrap_or(T::NULL))
    }

    /// Writes an enumeration code.
    ///
    /// # Errors
    /// Returns `EncodeError::BufferOverflow` if the buffer is full.
    #[inline]
    pub fn enumeration<E: SbeEnum>(&mut self, value: E) -> Result<(), EncodeError> {
        self.write(value.code())
    }

    /// Writes a choice set.
    ///
    /// # Errors
    /// Returns `EncodeError::BufferOverflow` if the buffer is full.
    #[inline]
    pub fn set<S: SbeSet>(&mut self, value: S) -> Result<(), EncodeError> {
        self.write(value.raw())
    }

    /// Writes a scalar as the given primitive type.
    ///
    /// # Errors
    /// Returns `EncodeError::TypeMismatch` if the value does not fit the type,
    /// or `EncodeError::BufferOverflow`.
    pub fn write_scalar(
        &mut self,
        ty: PrimitiveType,
        value: ScalarValue,
        field: &str,
    ) -> Result<(), EncodeError> {
        let mismatch = || EncodeError::TypeMismatch {
            field: field.to_string(),
            expected: ty.name().to_string(),
        };
        match (ty, value) {
            (PrimitiveType::Int8, ScalarValue::Int(v)) => {
                self.write(i8::try_from(v).map_err(|_| mismatch())?)
            }
            (PrimitiveType::Int16, ScalarValue::Int(v)) => {
                self.write(i16::try_from(v).map_err(|_| mismatch())?)
            }
            (PrimitiveType::Int32, ScalarValue::Int(v)) => {
                self.write(i32::try_from(v).map_err(|_| mismatch())?)
            }
            (PrimitiveType::Int64, ScalarValue::Int(v)) => self.write(v),
            (PrimitiveType::Char | PrimitiveType::Uint8, ScalarValue::UInt(v)) => {
                self.write(u8::try_from(v).map_err(|_| mismatch())?)
            }
            (PrimitiveType::Uint16, ScalarValue::UInt(v)) => {
                self.write(u16::try_from(v).map_err(|_| mismatch())?)
            }
            (PrimitiveType::Uint32, ScalarValue::UInt(v)) => {
                self.write(u32::try_from(v).map_err(|_| mismatch())?)
            }
            (PrimitiveType::Uint64, ScalarValue::UInt(v)) => self.write(v),
            (PrimitiveType::Float, ScalarValue::Float(v)) => self.write(v as f32),
            (PrimitiveType::Double, ScalarValue::Float(v)) => self.write(v),
            _ => Err(mismatch()),
        }
    }

    /// Writes raw bytes.
    ///
    /// # Errors
    /// Returns `EncodeError::BufferOverflow` if the buffer is full.
    pub fn bytes(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        self.ensure(data.len())?;
        self.buf.put_slice(data);
        self.written += data.len();
        Ok(())
    }

    /// Writes `len` bytes of `value`.
    ///
    /// # Errors
    /// Returns `EncodeError::BufferOverflow` if the buffer is full.
    pub fn fill(&mut self, value: u8, len: usize) -> Result<(), EncodeError> {
        self.ensure(len)?;
        self.buf.put_bytes(value, len);
        self.written += len;
        Ok(())
    }

    /// Writes a group dimension header.
    ///
    /// # Errors
    /// Returns `EncodeError::GroupTooLarge` if `count` does not fit the
    /// dimension, or `EncodeError::BufferOverflow`.
    pub fn group_dimension(
        &mut self,
        encoding: DimensionEncoding,
        block_length: u16,
        count: usize,
        group: &str,
    ) -> Result<(), EncodeError> {
        if count > encoding.max_count() {
            return Err(EncodeError::GroupTooLarge {
                group: group.to_string(),
                count,
                max_count: encoding.max_count(),
            });
        }
        self.write(block_length)?;
        match encoding {
            DimensionEncoding::GroupSize => self.write(count as u32),
            DimensionEncoding::GroupSize16 => self.write(count as u16),
        }
    }

    /// Writes a repeating group of typed entries.
    ///
    /// # Errors
    /// Returns the first error raised while encoding an entry.
    pub fn group<T: SbeBlock>(&mut self, meta: &GroupMeta, entries: &[T]) -> Result<(), EncodeError> {
        self.group_dimension(meta.dimension, meta.block_length, entries.len(), meta.name)?;
        for entry in entries {
            entry.encode(self)?;
        }
        Ok(())
    }

    /// Writes a var data field with its length prefix.
    ///
    /// # Errors
    /// Returns `EncodeError::VarDataTooLong` if the data does not fit the
    /// prefix, or `EncodeError::BufferOverflow`.
    pub fn var_data(&mut self, meta: &VarDataMeta, data: &[u8]) -> Result<(), EncodeError> {
        let max_length = meta.length_prefix.max_length();
        if data.len() > max_length {
            return Err(EncodeError::VarDataTooLong {
                field: meta.name.to_string(),
                length: data.len(),
                max_length,
            });
        }
        match meta.length_prefix {
            LengthPrefix::U8 => self.write(data.len() as u8)?,
            LengthPrefix::U16 => self.write(data.len() as u16)?,
            LengthPrefix::U32 => self.write(data.len() as u32)?,
        }
        self.bytes(data)
    }
}
