//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Knobs that change how SQL text is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum nesting of expressions, sub-queries and data types.
    pub max_depth: usize,
    /// Treat `||` as string concatenation instead of logical OR
    /// (MySQL `PIPES_AS_CONCAT`).
    pub pipes_as_concat: bool,
    /// Capture statements without a dedicated grammar rule as
    /// `Statement::Unsupported` instead of failing.
    pub capture_unsupported: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 100,
            pipes_as_concat: false,
            capture_unsupported: true,
        }
    }
}

impl ParserConfig {
    /// Loads a configuration from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the JSON is malformed or a field has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_pipes_as_concat(mut self, enabled: bool) -> Self {
        self.pipes_as_concat = enabled;
        self
    }

    #[must_use]
    pub const fn with_capture_unsupported(mut self, enabled: bool) -> Self {
        self.capture_unsupported = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_depth, 100);
        assert!(!config.pipes_as_concat);
        assert!(config.capture_unsupported);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ParserConfig::from_json(r#"{"pipes_as_concat": true}"#).unwrap();
        assert!(config.pipes_as_concat);
        assert_eq!(config.max_depth, 100);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ParserConfig::default()
            .with_max_depth(16)
            .with_capture_unsupported(false);
        let json = config.to_json().unwrap();
        assert_eq!(ParserConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = ParserConfig::from_json(r#"{"max_depth": "deep"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.line(), 0);
    }
}
