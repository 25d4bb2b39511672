/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Static descriptors for SBE messages.
//!
//! Every descriptor is `const`-constructible so message layouts can be declared
//! as plain Rust constants:
//! - [`FieldMeta`]: a fixed-width field with id, version and presence
//! - [`GroupMeta`]: a repeating group and its entry layout
//! - [`VarDataMeta`]: a length-prefixed variable data field
//! - [`MessageMeta`]: a complete message template
//! - [`EnumMeta`] / [`SetMeta`]: enumeration and choice-set tables

use crate::error::SchemaError;
use crate::types::{
    DimensionEncoding, LengthPrefix, MetaAttribute, Presence, PrimitiveType, ScalarValue,
};
use serde::Serialize;

/// One named value of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidValue {
    /// Value name.
    pub name: &'static str,
    /// Wire code.
    pub value: u64,
}

impl ValidValue {
    /// Creates a new enumeration value.
    #[must_use]
    pub const fn new(name: &'static str, value: u64) -> Self {
        Self { name, value }
    }
}

/// Enumeration type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumMeta {
    /// Enumeration name.
    pub name: &'static str,
    /// Underlying encoding.
    pub encoding: PrimitiveType,
    /// Valid values, including the non-representable marker.
    pub values: &'static [ValidValue],
}

impl EnumMeta {
    /// Returns the null code of the underlying encoding.
    #[must_use]
    pub const fn null_code(&self) -> u64 {
        match self.encoding.null_value() {
            ScalarValue::UInt(v) => v,
            ScalarValue::Int(v) => v as u64,
            ScalarValue::Float(_) => 0,
        }
    }

    /// Looks up a value name by wire code.
    #[must_use]
    pub fn name_of(&self, code: u64) -> Option<&'static str> {
        self.values.iter().find(|v| v.value == code).map(|v| v.name)
    }

    /// Looks up a wire code by value name.
    #[must_use]
    pub fn code_of(&self, name: &str) -> Option<u64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Returns true if `code` is a listed value or the null code.
    #[must_use]
    pub fn is_valid(&self, code: u64) -> bool {
        code == self.null_code() || self.name_of(code).is_some()
    }
}

/// One bit of a choice set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Choice name.
    pub name: &'static str,
    /// Bit position.
    pub bit: u8,
}

impl Choice {
    /// Creates a new choice.
    #[must_use]
    pub const fn new(name: &'static str, bit: u8) -> Self {
        Self { name, bit }
    }
}

/// Choice set (bitset) descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetMeta {
    /// Set name.
    pub name: &'static str,
    /// Underlying encoding.
    pub encoding: PrimitiveType,
    /// Named bits.
    pub choices: &'static [Choice],
}

impl SetMeta {
    /// Returns the names of the bits set in `bits`.
    #[must_use]
    pub fn names_of(&self, bits: u64) -> Vec<&'static str> {
        self.choices
            .iter()
            .filter(|c| bits & (1u64 << c.bit) != 0)
            .map(|c| c.name)
            .collect()
    }
}

/// Wire encoding of a fixed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Encoding {
    /// A single primitive value.
    Primitive(PrimitiveType),
    /// An enumeration.
    Enum(&'static EnumMeta),
    /// A choice set.
    Set(&'static SetMeta),
    /// A fixed-length array of primitives.
    Array {
        /// Element type.
        primitive: PrimitiveType,
        /// Number of elements.
        length: usize,
    },
}

impl Encoding {
    /// `int8` encoding.
    pub const INT8: Self = Self::Primitive(PrimitiveType::Int8);
    /// `int16` encoding.
    pub const INT16: Self = Self::Primitive(PrimitiveType::Int16);
    /// `int32` encoding.
    pub const INT32: Self = Self::Primitive(PrimitiveType::Int32);
    /// `int64` encoding.
    pub const INT64: Self = Self::Primitive(PrimitiveType::Int64);
    /// `uint8` encoding.
    pub const UINT8: Self = Self::Primitive(PrimitiveType::Uint8);
    /// `uint16` encoding.
    pub const UINT16: Self = Self::Primitive(PrimitiveType::Uint16);
    /// `uint32` encoding.
    pub const UINT32: Self = Self::Primitive(PrimitiveType::Uint32);
    /// `uint64` encoding.
    pub const UINT64: Self = Self::Primitive(PrimitiveType::Uint64);
    /// `float` encoding.
    pub const FLOAT: Self = Self::Primitive(PrimitiveType::Float);

    /// Returns the encoded size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Primitive(p) => p.size(),
            Self::Enum(e) => e.encoding.size(),
            Self::Set(s) => s.encoding.size(),
            Self::Array { primitive, length } => primitive.size() * *length,
        }
    }

    /// Returns the primitive type carried on the wire.
    #[must_use]
    pub const fn primitive(&self) -> PrimitiveType {
        match self {
            Self::Primitive(p) => *p,
            Self::Enum(e) => e.encoding,
            Self::Set(s) => s.encoding,
            Self::Array { primitive, .. } => *primitive,
        }
    }
}

/// Fixed field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    /// Field name as it appears in the schema.
    pub name: &'static str,
    /// Field id.
    pub id: u16,
    /// First schema version carrying the field.
    pub since_version: u16,
    /// Version in which the field was deprecated, `0` if never.
    pub deprecated: u16,
    /// Field presence.
    pub presence: Presence,
    /// Wire encoding.
    pub encoding: Encoding,
    /// `epoch` meta attribute.
    pub epoch: &'static str,
    /// `timeUnit` meta attribute.
    pub time_unit: &'static str,
    /// `semanticType` meta attribute.
    pub semantic_type: &'static str,
}

impl FieldMeta {
    /// Creates a required field present since version 0.
    ///
    /// # Arguments
    /// * `name` - The schema field name
    /// * `id` - The field id
    /// * `encoding` - The wire encoding
    #[must_use]
    pub const fn new(name: &'static str, id: u16, encoding: Encoding) -> Self {
        Self {
            name,
            id,
            since_version: 0,
            deprecated: 0,
            presence: Presence::Required,
            encoding,
            epoch: "",
            time_unit: "",
            semantic_type: "",
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// Sets the first schema version carrying the field.
    #[must_use]
    pub const fn since(mut self, version: u16) -> Self {
        self.since_version = version;
        self
    }

    /// Sets the deprecation version.
    #[must_use]
    pub const fn deprecated_in(mut self, version: u16) -> Self {
        self.deprecated = version;
        self
    }

    /// Sets the semantic type annotation.
    #[must_use]
    pub const fn with_semantic_type(mut self, semantic_type: &'static str) -> Self {
        self.semantic_type = semantic_type;
        self
    }

    /// Returns true if the field is on the wire at `acting_version`.
    #[must_use]
    pub const fn in_acting_version(&self, acting_version: u16) -> bool {
        acting_version >= self.since_version
    }

    /// Returns true if the field is optional.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.presence, Presence::Optional)
    }

    /// Returns the encoded size in bytes.
    #[must_use]
    pub const fn encoded_length(&self) -> usize {
        match self.presence {
            Presence::Constant => 0,
            _ => self.encoding.size(),
        }
    }

    /// Returns the minimum valid value for numeric fields.
    #[must_use]
    pub const fn min_value(&self) -> Option<ScalarValue> {
        match self.encoding {
            Encoding::Primitive(p) | Encoding::Array { primitive: p, .. } => Some(p.min_value()),
            _ => None,
        }
    }

    /// Returns the maximum valid value for numeric fields.
    #[must_use]
    pub const fn max_value(&self) -> Option<ScalarValue> {
        match self.encoding {
            Encoding::Primitive(p) | Encoding::Array { primitive: p, .. } => Some(p.max_value()),
            _ => None,
        }
    }

    /// Returns the null sentinel for numeric and enumeration fields.
    #[must_use]
    pub const fn null_value(&self) -> Option<ScalarValue> {
        match self.encoding {
            Encoding::Primitive(p) | Encoding::Array { primitive: p, .. } => Some(p.null_value()),
            Encoding::Enum(e) => Some(e.encoding.null_value()),
            Encoding::Set(_) => None,
        }
    }

    /// Returns a meta attribute value; empty when unset.
    #[must_use]
    pub const fn meta_attribute(&self, attribute: MetaAttribute) -> &'static str {
        match attribute {
            MetaAttribute::Epoch => self.epoch,
            MetaAttribute::TimeUnit => self.time_unit,
            MetaAttribute::SemanticType => self.semantic_type,
            MetaAttribute::Presence => self.presence.as_str(),
        }
    }
}

/// Variable length data descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VarDataMeta {
    /// Field name.
    pub name: &'static str,
    /// Field id.
    pub id: u16,
    /// First schema version carrying the field.
    pub since_version: u16,
    /// Version in which the field was deprecated, `0` if never.
    pub deprecated: u16,
    /// Length header width.
    pub length_prefix: LengthPrefix,
    /// Character encoding, `None` for raw bytes.
    pub character_encoding: Option<&'static str>,
}

impl VarDataMeta {
    /// Creates a UTF-8 string field with the given length prefix.
    #[must_use]
    pub const fn string(name: &'static str, id: u16, length_prefix: LengthPrefix) -> Self {
        Self {
            name,
            id,
            since_version: 0,
            deprecated: 0,
            length_prefix,
            character_encoding: Some("UTF-8"),
        }
    }

    /// Creates a raw binary field with the given length prefix.
    #[must_use]
    pub const fn binary(name: &'static str, id: u16, length_prefix: LengthPrefix) -> Self {
        Self {
            name,
            id,
            since_version: 0,
            deprecated: 0,
            length_prefix,
            character_encoding: None,
        }
    }

    /// Sets the first schema version carrying the field.
    #[must_use]
    pub const fn since(mut self, version: u16) -> Self {
        self.since_version = version;
        self
    }

    /// Returns true if the field is on the wire at `acting_version`.
    #[must_use]
    pub const fn in_acting_version(&self, acting_version: u16) -> bool {
        acting_version >= self.since_version
    }

    /// Returns true if the data carries UTF-8 text.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        self.character_encoding.is_some()
    }

    /// Returns a meta attribute value; only presence is ever set.
    #[must_use]
    pub const fn meta_attribute(&self, attribute: MetaAttribute) -> &'static str {
        match attribute {
            MetaAttribute::Presence => "required",
            _ => "",
        }
    }
}

/// Repeating group descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupMeta {
    /// Group name.
    pub name: &'static str,
    /// Group id.
    pub id: u16,
    /// First schema version carrying the group.
    pub since_version: u16,
    /// Version in which the group was deprecated, `0` if never.
    pub deprecated: u16,
    /// Dimension header layout.
    pub dimension: DimensionEncoding,
    /// Block length of one entry.
    pub block_length: u16,
    /// Fixed fields of one entry.
    pub fields: &'static [FieldMeta],
    /// Nested groups of one entry.
    pub groups: &'static [GroupMeta],
    /// Var data of one entry.
    pub var_data: &'static [VarDataMeta],
}

impl GroupMeta {
    /// Creates an empty group descriptor.
    ///
    /// # Arguments
    /// * `name` - The group name
    /// * `id` - The group id
    /// * `dimension` - The dimension header layout
    /// * `block_length` - The block length of one entry
    #[must_use]
    pub const fn new(
        name: &'static str,
        id: u16,
        dimension: DimensionEncoding,
        block_length: u16,
    ) -> Self {
        Self {
            name,
            id,
            since_version: 0,
            deprecated: 0,
            dimension,
            block_length,
            fields: &[],
            groups: &[],
            var_data: &[],
        }
    }

    /// Sets the entry fields.
    #[must_use]
    pub const fn with_fields(mut self, fields: &'static [FieldMeta]) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the nested groups.
    #[must_use]
    pub const fn with_groups(mut self, groups: &'static [GroupMeta]) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the entry var data.
    #[must_use]
    pub const fn with_var_data(mut self, var_data: &'static [VarDataMeta]) -> Self {
        self.var_data = var_data;
        self
    }

    /// Returns true if the group is on the wire at `acting_version`.
    #[must_use]
    pub const fn in_acting_version(&self, acting_version: u16) -> bool {
        acting_version >= self.since_version
    }

    /// Looks up an entry field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldMeta> {
        let fields: &'static [FieldMeta] = self.fields;
        fields.iter().find(|f| f.name == name)
    }

    /// Looks up a nested group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&'static GroupMeta> {
        let groups: &'static [GroupMeta] = self.groups;
        groups.iter().find(|g| g.name == name)
    }
}

/// Message template descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageMeta {
    /// Message name.
    pub name: &'static str,
    /// Template id.
    pub template_id: u16,
    /// Schema id.
    pub schema_id: u16,
    /// Schema version the layout was compiled against.
    pub schema_version: u16,
    /// Semantic version of the schema.
    pub semantic_version: &'static str,
    /// Block length of the fixed part.
    pub block_length: u16,
    /// Fixed fields.
    pub fields: &'static [FieldMeta],
    /// Repeating groups.
    pub groups: &'static [GroupMeta],
    /// Var data.
    pub var_data: &'static [VarDataMeta],
}

impl MessageMeta {
    /// Looks up a fixed field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldMeta> {
        let fields: &'static [FieldMeta] = self.fields;
        fields.iter().find(|f| f.name == name)
    }

    /// Looks up a fixed field by id.
    #[must_use]
    pub fn field_by_id(&self, id: u16) -> Option<&'static FieldMeta> {
        let fields: &'static [FieldMeta] = self.fields;
        fields.iter().find(|f| f.id == id)
    }

    /// Looks up a group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&'static GroupMeta> {
        let groups: &'static [GroupMeta] = self.groups;
        groups.iter().find(|g| g.name == name)
    }

    /// Looks up a var data field by name.
    #[must_use]
    pub fn var_data(&self, name: &str) -> Option<&'static VarDataMeta> {
        let var_data: &'static [VarDataMeta] = self.var_data;
        var_data.iter().find(|v| v.name == name)
    }

    /// Checks that fixed field lengths fit the declared block lengths,
    /// recursively through every group.
    ///
    /// # Errors
    /// Returns `SchemaError::BlockLengthMismatch` on the first offending block.
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_block(self.name, self.block_length, self.fields)?;
        self.groups.iter().try_for_each(validate_group)
    }
}

/// Sums the encoded lengths of a field list.
#[must_use]
pub const fn fields_length(fields: &[FieldMeta]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].encoded_length();
        i += 1;
    }
    total
}

fn check_block(
    name: &'static str,
    declared: u16,
    fields: &[FieldMeta],
) -> Result<(), SchemaError> {
    let computed = fields_length(fields);
    if computed > declared as usize {
        return Err(SchemaError::BlockLengthMismatch {
            name,
            declared,
            computed,
        });
    }
    Ok(())
}

fn validate_group(group: &GroupMeta) -> Result<(), SchemaError> {
    check_block(group.name, group.block_length, group.fields)?;
    group.groups.iter().try_for_each(validate_group)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDE: EnumMeta = EnumMeta {
        name: "OrderSide",
        encoding: PrimitiveType::Uint8,
        values: &[
            ValidValue::new("Buy", 0),
            ValidValue::new("Sell", 1),
            ValidValue::new("NonRepresentable", 254),
        ],
    };

    const FIELDS: &[FieldMeta] = &[
        FieldMeta::new("orderId", 1, Encoding::INT64),
        FieldMeta::new("side", 2, Encoding::Enum(&SIDE)),
        FieldMeta::new("stopPrice", 3, Encoding::INT64).optional(),
        FieldMeta::new("pegOffsetValue", 4, Encoding::UINT8)
            .optional()
            .since(1),
    ];

    const ENTRY: &[FieldMeta] = &[FieldMeta::new("tradeId", 1, Encoding::INT64)];

    const GROUPS: &[GroupMeta] =
        &[GroupMeta::new("fills", 100, DimensionEncoding::GroupSize, 8).with_fields(ENTRY)];

    const VAR_DATA: &[VarDataMeta] = &[VarDataMeta::string("symbol", 200, LengthPrefix::U8)];

    const MESSAGE: MessageMeta = MessageMeta {
        name: "TestMessage",
        template_id: 1,
        schema_id: 3,
        schema_version: 2,
        semantic_version: "5.2",
        block_length: 18,
        fields: FIELDS,
        groups: GROUPS,
        var_data: VAR_DATA,
    };

    #[test]
    fn test_field_lookup_and_versions() {
        let peg = MESSAGE.field("pegOffsetValue").unwrap();
        assert_eq!(peg.id, 4);
        assert!(!peg.in_acting_version(0));
        assert!(peg.in_acting_version(1));
        assert_eq!(peg.null_value(), Some(ScalarValue::UInt(255)));
        assert_eq!(peg.max_value(), Some(ScalarValue::UInt(254)));
        assert!(MESSAGE.field("missing").is_none());
        assert_eq!(MESSAGE.field_by_id(2).unwrap().name, "side");
    }

    #[test]
    fn test_meta_attributes() {
        let order_id = MESSAGE.field("orderId").unwrap();
        assert_eq!(order_id.meta_attribute(MetaAttribute::Presence), "required");
        assert_eq!(order_id.meta_attribute(MetaAttribute::Epoch), "");
        let stop = MESSAGE.field("stopPrice").unwrap();
        assert_eq!(stop.meta_attribute(MetaAttribute::Presence), "optional");
    }

    #[test]
    fn test_block_length_validation() {
        assert_eq!(fields_length(FIELDS), 18);
        assert!(MESSAGE.validate().is_ok());

        let short = MessageMeta {
            block_length: 10,
            ..MESSAGE
        };
        assert_eq!(
            short.validate(),
            Err(SchemaError::BlockLengthMismatch {
                name: "TestMessage",
                declared: 10,
                computed: 18,
            })
        );
    }

    #[test]
    fn test_enum_meta() {
        assert_eq!(SIDE.null_code(), 255);
        assert_eq!(SIDE.name_of(1), Some("Sell"));
        assert_eq!(SIDE.code_of("Buy"), Some(0));
        assert!(SIDE.is_valid(255));
        assert!(SIDE.is_valid(254));
        assert!(!SIDE.is_valid(7));
    }

    #[test]
    fn test_set_meta_names() {
        const MODES: SetMeta = SetMeta {
            name: "Modes",
            encoding: PrimitiveType::Uint8,
            choices: &[Choice::new("None", 0), Choice::new("ExpireTaker", 1)],
        };
        assert_eq!(MODES.names_of(0b11), vec!["None", "ExpireTaker"]);
        assert!(MODES.names_of(0b100).is_empty());
    }
}
