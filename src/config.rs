// In: src/config.rs

//! The single source of truth for all numshuffle codec configuration.
//!
//! `NumshuffleConfig` is created once at the application boundary (from code or
//! from a JSON document) and handed to the `Codec` facade, which reads it on
//! every call. Every field has a serde default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::NumshuffleError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Defines the trade-off between compression speed and final size.
///
/// Each profile maps to one fixed zstd level; it is a convenience, not a
/// data-driven level search.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompressionProfile {
    /// Lowest zstd level that still compresses.
    Fast,

    /// zstd's own default level. This is the recommended default.
    #[default]
    Balanced,

    /// Prioritizes size at the cost of CPU time.
    HighCompression,
}

impl CompressionProfile {
    pub fn level(&self) -> i32 {
        match self {
            CompressionProfile::Fast => 1,
            CompressionProfile::Balanced => zstd::DEFAULT_COMPRESSION_LEVEL,
            CompressionProfile::HighCompression => 19,
        }
    }
}

/// How a decoder treats a byte layout that is not a whole number of elements.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransposeMode {
    /// **Default:** trailing bytes are a `FormatError`.
    #[default]
    Strict,

    /// The element count is floored and trailing bytes are ignored.
    Lenient,
}

//==================================================================================
// II. The Unified NumshuffleConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct NumshuffleConfig {
    /// The profile used to pick a zstd level when `level` is unset.
    #[serde(default)]
    pub profile: CompressionProfile,

    /// Explicit zstd level. Overrides `profile`.
    #[serde(default)]
    pub level: Option<i32>,

    /// Remainder-byte policy applied by every decoder.
    #[serde(default)]
    pub transpose_mode: TransposeMode,
}

impl NumshuffleConfig {
    /// Parses and validates a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, NumshuffleError> {
        let config: NumshuffleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NumshuffleError> {
        if let Some(level) = self.level {
            let range = zstd::compression_level_range();
            if !range.contains(&level) {
                return Err(NumshuffleError::ConfigError(format!(
                    "zstd level {} is outside the supported range {}..={}",
                    level,
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(())
    }

    /// The zstd level every compress call will use.
    pub fn compression_level(&self) -> i32 {
        self.level.unwrap_or_else(|| self.profile.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = NumshuffleConfig::from_json("{}").unwrap();
        assert_eq!(config, NumshuffleConfig::default());
        assert_eq!(config.transpose_mode, TransposeMode::Strict);
        assert_eq!(config.compression_level(), zstd::DEFAULT_COMPRESSION_LEVEL);
    }

    #[test]
    fn test_json_fields_are_snake_case() {
        let config = NumshuffleConfig::from_json(
            r#"{"profile": "high_compression", "transpose_mode": "lenient"}"#,
        )
        .unwrap();
        assert_eq!(config.profile, CompressionProfile::HighCompression);
        assert_eq!(config.transpose_mode, TransposeMode::Lenient);
        assert_eq!(config.compression_level(), 19);
    }

    #[test]
    fn test_explicit_level_overrides_profile() {
        let config = NumshuffleConfig::from_json(r#"{"profile": "fast", "level": 7}"#).unwrap();
        assert_eq!(config.compression_level(), 7);
    }

    #[test]
    fn test_invalid_level_and_json_are_rejected() {
        let err = NumshuffleConfig::from_json(r#"{"level": 1000}"#).unwrap_err();
        assert!(matches!(err, NumshuffleError::ConfigError(_)));

        let err = NumshuffleConfig::from_json(r#"{"profile": "turbo"}"#).unwrap_err();
        assert!(matches!(err, NumshuffleError::SerdeJson(_)));
    }
}
