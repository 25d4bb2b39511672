/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Declarative generators for schema types.
//!
//! `sbe_enum!` and `sbe_set!` declare the single-byte enumerations and choice
//! sets of the schema. `sbe_block!` declares a block (message root or group
//! entry): the struct, its field metadata and its [`SbeBlock`] codec.
//! `sbe_message!` adds the header identity of a top-level message.
//!
//! Field kinds accepted by `sbe_block!`:
//! - `req T`: required primitive, stored as `T`
//! - `opt T`: optional primitive, stored as `Option<T>`
//! - `enum_req E` / `enum_opt E`: enumeration, stored as `E`
//! - `set S`: choice set, stored as `S`
//! - `array N`: fixed `uint8` array, stored as `[u8; N]`
//!
//! Var data kinds are `string` (UTF-8, stored as `String`) and `binary`
//! (stored as `Bytes`).
//!
//! [`SbeBlock`]: binance_sbe_core::SbeBlock

macro_rules! sbe_wire_name {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $wire:literal) => {
        $wire
    };
}

macro_rules! sbe_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident $(($wire:literal))? = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::num_derive::FromPrimitive,
            ::num_derive::ToPrimitive,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
            /// Value introduced by a newer schema version.
            NonRepresentable = 254,
            /// Null value.
            #[default]
            NullVal = 255,
        }

        impl $name {
            /// Returns the schema name of the value.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => sbe_wire_name!($variant $(, $wire)?), )+
                    Self::NonRepresentable => "NonRepresentable",
                    Self::NullVal => "NullVal",
                }
            }
        }

        impl ::binance_sbe_core::SbeEnum for $name {
            const META: &'static ::binance_sbe_schema::EnumMeta = &::binance_sbe_schema::EnumMeta {
                name: stringify!($name),
                encoding: ::binance_sbe_schema::PrimitiveType::Uint8,
                values: &[
                    $( ::binance_sbe_schema::ValidValue::new(sbe_wire_name!($variant $(, $wire)?), $code), )+
                    ::binance_sbe_schema::ValidValue::new("NonRepresentable", 254),
                ],
            };
            const NULL: Self = Self::NullVal;
            const NON_REPRESENTABLE: Self = Self::NonRepresentable;

            #[inline]
            fn from_code(code: u8) -> Option<Self> {
                ::num_traits::FromPrimitive::from_u8(code)
            }

            #[inline]
            fn code(self) -> u8 {
                self as u8
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

macro_rules! sbe_set {
    (
        $(#[$meta:meta])*
        $name:ident($raw:ty, $encoding:ident) {
            $( $(#[$cmeta:meta])* $choice:ident($wire:literal) = $bit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name($raw);

        impl $name {
            $( $(#[$cmeta])* pub const $choice: Self = Self(1 << $bit); )+

            /// Wraps raw bits.
            #[must_use]
            pub const fn from_bits(bits: $raw) -> Self {
                Self(bits)
            }

            /// Returns the raw bits.
            #[must_use]
            pub const fn bits(self) -> $raw {
                self.0
            }

            /// Returns true if every choice of `other` is set.
            #[must_use]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns true if no choice is set.
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Sets every choice of `other`.
            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            /// Clears every choice of `other`.
            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            /// Returns the names of the set choices.
            #[must_use]
            pub fn names(self) -> Vec<&'static str> {
                <Self as ::binance_sbe_core::SbeSet>::META.names_of(u64::from(self.0))
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::binance_sbe_core::SbeSet for $name {
            type Raw = $raw;
            const META: &'static ::binance_sbe_schema::SetMeta = &::binance_sbe_schema::SetMeta {
                name: stringify!($name),
                encoding: ::binance_sbe_schema::PrimitiveType::$encoding,
                choices: &[ $( ::binance_sbe_schema::Choice::new($wire, $bit), )+ ],
            };

            #[inline]
            fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            #[inline]
            fn raw(self) -> $raw {
                self.0
            }
        }
    };
}

macro_rules! sbe_field_type {
    (req $t:ty) => { $t };
    (opt $t:ty) => { Option<$t> };
    (enum_req $t:ty) => { $t };
    (enum_opt $t:ty) => { $t };
    (set $t:ty) => { $t };
    (array $n:literal) => { [u8; $n] };
}

macro_rules! sbe_field_meta {
    (req $t:ty, $name:literal, $id:literal) => {
        ::binance_sbe_schema::FieldMeta::new(
            $name,
            $id,
            ::binance_sbe_schema::Encoding::Primitive(<$t as ::binance_sbe_core::Primitive>::TYPE),
        )
    };
    (opt $t:ty, $name:literal, $id:literal) => {
        sbe_field_meta!(req $t, $name, $id).optional()
    };
    (enum_req $t:ty, $name:literal, $id:literal) => {
        ::binance_sbe_schema::FieldMeta::new(
            $name,
            $id,
            ::binance_sbe_schema::Encoding::Enum(<$t as ::binance_sbe_core::SbeEnum>::META),
        )
    };
    (enum_opt $t:ty, $name:literal, $id:literal) => {
        sbe_field_meta!(enum_req $t, $name, $id).optional()
    };
    (set $t:ty, $name:literal, $id:literal) => {
        ::binance_sbe_schema::FieldMeta::new(
            $name,
            $id,
            ::binance_sbe_schema::Encoding::Set(<$t as ::binance_sbe_core::SbeSet>::META),
        )
    };
    (array $n:literal, $name:literal, $id:literal) => {
        ::binance_sbe_schema::FieldMeta::new(
            $name,
            $id,
            ::binance_sbe_schema::Encoding::Array {
                primitive: ::binance_sbe_schema::PrimitiveType::Uint8,
                length: $n,
            },
        )
    };
}

macro_rules! sbe_read {
    (req $t:ty, $reader:ident, $meta:expr) => { $reader.field::<$t>($meta) };
    (opt $t:ty, $reader:ident, $meta:expr) => { $reader.optional::<$t>($meta) };
    (enum_req $t:ty, $reader:ident, $meta:expr) => { $reader.enumeration::<$t>($meta) };
    (enum_opt $t:ty, $reader:ident, $meta:expr) => { $reader.enumeration::<$t>($meta) };
    (set $t:ty, $reader:ident, $meta:expr) => { $reader.set::<$t>($meta) };
    (array $n:literal, $reader:ident, $meta:expr) => { $reader.array::<$n>($meta) };
}

macro_rules! sbe_write {
    (req, $writer:ident, $value:expr) => { $writer.write(*$value) };
    (opt, $writer:ident, $value:expr) => { $writer.optional(*$value) };
    (enum_req, $writer:ident, $value:expr) => { $writer.enumeration(*$value) };
    (enum_opt, $writer:ident, $value:expr) => { $writer.enumeration(*$value) };
    (set, $writer:ident, $value:expr) => { $writer.set(*$value) };
    (array, $writer:ident, $value:expr) => { $writer.bytes($value) };
}

macro_rules! sbe_check {
    (req, $value:expr, $meta:expr, $acting:ident, $schema:ident) => {
        ::binance_sbe_core::range::check_required(*$value, $meta, $acting)
    };
    (opt, $value:expr, $meta:expr, $acting:ident, $schema:ident) => {
        ::binance_sbe_core::range::check_optional(*$value, $meta, $acting)
    };
    (enum_req, $value:expr, $meta:expr, $acting:ident, $schema:ident) => {
        ::binance_sbe_core::range::check_enum(*$value, $meta, $acting, $schema)
    };
    (enum_opt, $value:expr, $meta:expr, $acting:ident, $schema:ident) => {
        ::binance_sbe_core::range::check_enum(*$value, $meta, $acting, $schema)
    };
    (set, $value:expr, $meta:expr, $acting:ident, $schema:ident) => {
        // Every bit pattern is a valid choice set; unknown bits stay in the raw value.
        Ok::<(), ::binance_sbe_core::RangeError>(())
    };
    (array, $value:expr, $meta:expr, $acting:ident, $schema:ident) => {
        ::binance_sbe_core::range::check_array($value, $meta, $acting)
    };
}

macro_rules! sbe_group_meta {
    ($t:ty, $name:literal, $id:literal, $dimension:ident) => {
        ::binance_sbe_schema::GroupMeta::new(
            $name,
            $id,
            ::binance_sbe_schema::DimensionEncoding::$dimension,
            <$t as ::binance_sbe_core::SbeBlock>::BLOCK_LENGTH,
        )
        .with_fields(<$t>::FIELDS)
        .with_groups(<$t>::GROUPS)
        .with_var_data(<$t>::VAR_DATA)
    };
}

macro_rules! sbe_var_type {
    (string) => { String };
    (binary) => { ::bytes::Bytes };
}

macro_rules! sbe_var_meta {
    (string, $name:literal, $id:literal, $prefix:ident) => {
        ::binance_sbe_schema::VarDataMeta::string(
            $name,
            $id,
            ::binance_sbe_schema::LengthPrefix::$prefix,
        )
    };
    (binary, $name:literal, $id:literal, $prefix:ident) => {
        ::binance_sbe_schema::VarDataMeta::binary(
            $name,
            $id,
            ::binance_sbe_schema::LengthPrefix::$prefix,
        )
    };
}

macro_rules! sbe_read_var {
    (string, $reader:ident, $meta:expr) => { $reader.var_string($meta) };
    (binary, $reader:ident, $meta:expr) => { $reader.var_bytes($meta) };
}

macro_rules! sbe_var_bytes {
    (string, $value:expr) => { $value.as_bytes() };
    (binary, $value:expr) => { $value.as_ref() };
}

macro_rules! sbe_block {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            block_length: $block_length:literal,
            fields: {
                $(
                    $(#[$fmeta:meta])*
                    $field:ident: $kind:ident $ty:tt = ($fname:literal, $fid:literal $(, since $since:literal)?)
                ),* $(,)?
            },
            groups: {
                $(
                    $(#[$gmeta:meta])*
                    $group:ident: $gty:ty = ($gname:literal, $gid:literal, $dimension:ident)
                ),* $(,)?
            },
            var_data: {
                $(
                    $(#[$vmeta:meta])*
                    $var:ident: $vkind:ident = ($vname:literal, $vid:literal, $prefix:ident)
                ),* $(,)?
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: sbe_field_type!($kind $ty), )*
            $( $(#[$gmeta])* pub $group: Vec<$gty>, )*
            $( $(#[$vmeta])* pub $var: sbe_var_type!($vkind), )*
        }

        impl $name {
            /// Fixed fields in wire order.
            pub const FIELDS: &'static [::binance_sbe_schema::FieldMeta] = &[
                $( sbe_field_meta!($kind $ty, $fname, $fid)$(.since($since))?, )*
            ];
            /// Repeating groups in wire order.
            pub const GROUPS: &'static [::binance_sbe_schema::GroupMeta] = &[
                $( sbe_group_meta!($gty, $gname, $gid, $dimension), )*
            ];
            /// Var data fields in wire order.
            pub const VAR_DATA: &'static [::binance_sbe_schema::VarDataMeta] = &[
                $( sbe_var_meta!($vkind, $vname, $vid, $prefix), )*
            ];

            /// Looks up the metadata of a fixed field by schema name.
            #[must_use]
            pub fn field_meta(name: &str) -> Option<&'static ::binance_sbe_schema::FieldMeta> {
                Self::FIELDS.iter().find(|f| f.name == name)
            }
        }

        impl ::binance_sbe_core::SbeBlock for $name {
            const BLOCK_LENGTH: u16 = $block_length;

            fn encode<B: ::bytes::BufMut>(
                &self,
                writer: &mut ::binance_sbe_core::SbeWriter<'_, B>,
            ) -> Result<(), ::binance_sbe_core::EncodeError> {
                $( sbe_write!($kind, writer, &self.$field)?; )*
                $({
                    const META: ::binance_sbe_schema::GroupMeta =
                        sbe_group_meta!($gty, $gname, $gid, $dimension);
                    writer.group(&META, &self.$group)?;
                })*
                $({
                    const META: ::binance_sbe_schema::VarDataMeta =
                        sbe_var_meta!($vkind, $vname, $vid, $prefix);
                    writer.var_data(&META, sbe_var_bytes!($vkind, self.$var))?;
                })*
                Ok(())
            }

            fn decode(
                reader: &mut ::binance_sbe_core::SbeReader<'_>,
                block_length: u16,
            ) -> Result<Self, ::binance_sbe_core::DecodeError> {
                $(
                    let $field = {
                        const META: ::binance_sbe_schema::FieldMeta =
                            sbe_field_meta!($kind $ty, $fname, $fid)$(.since($since))?;
                        sbe_read!($kind $ty, reader, &META)?
                    };
                )*
                reader.skip_block_extension(block_length, Self::BLOCK_LENGTH)?;
                $(
                    let $group = {
                        const META: ::binance_sbe_schema::GroupMeta =
                            sbe_group_meta!($gty, $gname, $gid, $dimension);
                        reader.group::<$gty>(&META)?
                    };
                )*
                $(
                    let $var = {
                        const META: ::binance_sbe_schema::VarDataMeta =
                            sbe_var_meta!($vkind, $vname, $vid, $prefix);
                        sbe_read_var!($vkind, reader, &META)?
                    };
                )*
                Ok(Self {
                    $( $field, )*
                    $( $group, )*
                    $( $var, )*
                })
            }

            #[allow(unused_variables)]
            fn range_check(
                &self,
                acting_version: u16,
                schema_version: u16,
            ) -> Result<(), ::binance_sbe_core::RangeError> {
                $({
                    const META: ::binance_sbe_schema::FieldMeta =
                        sbe_field_meta!($kind $ty, $fname, $fid)$(.since($since))?;
                    sbe_check!($kind, &self.$field, &META, acting_version, schema_version)?;
                })*
                $(
                    for entry in &self.$group {
                        ::binance_sbe_core::SbeBlock::range_check(entry, acting_version, schema_version)?;
                    }
                )*
                Ok(())
            }
        }
    };
}

macro_rules! sbe_message {
    ($name:ident, $wire:literal, $template_id:literal) => {
        impl ::binance_sbe_core::SbeMessage for $name {
            const TEMPLATE_ID: u16 = $template_id;
            const SCHEMA_ID: u16 = $crate::SCHEMA_ID;
            const SCHEMA_VERSION: u16 = $crate::SCHEMA_VERSION;
            const SEMANTIC_VERSION: &'static str = $crate::SEMANTIC_VERSION;
            const META: &'static ::binance_sbe_schema::MessageMeta =
                &::binance_sbe_schema::MessageMeta {
                    name: $wire,
                    template_id: $template_id,
                    schema_id: $crate::SCHEMA_ID,
                    schema_version: $crate::SCHEMA_VERSION,
                    semantic_version: $crate::SEMANTIC_VERSION,
                    block_length: <$name as ::binance_sbe_core::SbeBlock>::BLOCK_LENGTH,
                    fields: $name::FIELDS,
                    groups: $name::GROUPS,
                    var_data: $name::VAR_DATA,
                };
        }
    };
}
