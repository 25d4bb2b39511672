/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Codec configuration.
//!
//! This module provides the options shared by the generic engine and the
//! framed transport codecs.

use serde::{Deserialize, Serialize};

/// Spot API schema id.
pub const SPOT_SCHEMA_ID: u16 = 3;

/// Configuration for encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Whether to range check messages before encoding.
    pub range_check_on_encode: bool,
    /// Whether to range check messages after decoding.
    pub range_check_on_decode: bool,
    /// Maximum message size in bytes.
    pub max_message_size: usize,
}

impl CodecConfig {
    /// Creates a configuration with range checking enabled both ways.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            range_check_on_encode: true,
            range_check_on_decode: true,
            max_message_size: 1024 * 1024, // 1MB
        }
    }

    /// Sets whether to range check before encoding.
    #[must_use]
    pub const fn with_range_check_on_encode(mut self, enabled: bool) -> Self {
        self.range_check_on_encode = enabled;
        self
    }

    /// Sets whether to range check after decoding.
    #[must_use]
    pub const fn with_range_check_on_decode(mut self, enabled: bool) -> Self {
        self.range_check_on_decode = enabled;
        self
    }

    /// Sets the maximum message size.
    #[must_use]
    pub const fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert!(config.range_check_on_encode);
        assert!(config.range_check_on_decode);
        assert_eq!(config.max_message_size, 1024 * 1024);
    }

    #[test]
    fn test_builder_methods() {
        let config = CodecConfig::new()
            .with_range_check_on_decode(false)
            .with_max_message_size(4096);
        assert!(config.range_check_on_encode);
        assert!(!config.range_check_on_decode);
        assert_eq!(config.max_message_size, 4096);
    }
}
