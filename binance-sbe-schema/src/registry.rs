/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema registry.
//!
//! A [`Schema`] indexes every [`MessageMeta`] of one SBE schema by template id
//! and by name, the way a decoder looks up the layout named by a message header.

use crate::error::SchemaError;
use crate::meta::MessageMeta;
use serde::Serialize;
use std::collections::HashMap;

/// Registry of the message templates of one schema.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Schema id carried in every message header.
    pub id: u16,
    /// Current schema version.
    pub version: u16,
    /// Semantic version string.
    pub semantic_version: &'static str,
    /// Message templates indexed by template id.
    messages: HashMap<u16, &'static MessageMeta>,
    /// Template ids indexed by message name.
    by_name: HashMap<&'static str, u16>,
}

impl Schema {
    /// Creates an empty schema registry.
    ///
    /// # Arguments
    /// * `id` - The schema id
    /// * `version` - The schema version
    /// * `semantic_version` - The semantic version string
    #[must_use]
    pub fn new(id: u16, version: u16, semantic_version: &'static str) -> Self {
        Self {
            id,
            version,
            semantic_version,
            messages: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registers a message template.
    ///
    /// # Errors
    /// Returns `SchemaError::ForeignMessage` if the template belongs to another
    /// schema, `SchemaError::DuplicateTemplate` if its id is already registered,
    /// or `SchemaError::BlockLengthMismatch` if its layout is inconsistent.
    pub fn add_message(&mut self, message: &'static MessageMeta) -> Result<(), SchemaError> {
        if message.schema_id != self.id {
            return Err(SchemaError::ForeignMessage {
                name: message.name,
                expected: self.id,
                actual: message.schema_id,
            });
        }
        if let Some(existing) = self.messages.get(&message.template_id) {
            return Err(SchemaError::DuplicateTemplate {
                template_id: message.template_id,
                name: existing.name,
            });
        }
        message.validate()?;
        self.by_name.insert(message.name, message.template_id);
        self.messages.insert(message.template_id, message);
        Ok(())
    }

    /// Gets a message template by id.
    #[must_use]
    pub fn get_message(&self, template_id: u16) -> Option<&'static MessageMeta> {
        self.messages.get(&template_id).copied()
    }

    /// Gets a message template by name.
    #[must_use]
    pub fn get_message_by_name(&self, name: &str) -> Option<&'static MessageMeta> {
        self.by_name
            .get(name)
            .and_then(|id| self.get_message(*id))
    }

    /// Returns the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no template is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns an iterator over all templates, in no particular order.
    pub fn messages(&self) -> impl Iterator<Item = &'static MessageMeta> + '_ {
        self.messages.values().copied()
    }
}
