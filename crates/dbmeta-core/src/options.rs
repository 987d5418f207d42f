//! Dialect configuration supplied by the host.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default string length from which character columns become large objects.
pub const DEFAULT_CLOB_LENGTH: i32 = 9_999_999;

/// Per-connection switches that change how a dialect renders column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectOptions {
    /// Render boolean columns with the native `BOOLEAN` type.
    pub supports_boolean_data_type: bool,
    /// String length at or above which a `CLOB` is generated.
    pub clob_length: i32,
}

impl Default for DialectOptions {
    fn default() -> Self {
        Self {
            supports_boolean_data_type: false,
            clob_length: DEFAULT_CLOB_LENGTH,
        }
    }
}

impl DialectOptions {
    /// Reads options from a JSON document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::InvalidOptions`](crate::DialectError::InvalidOptions)
    /// if the document is malformed or names an unknown option.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets whether boolean columns use the native `BOOLEAN` type.
    #[must_use]
    pub const fn with_boolean_data_type(mut self, enabled: bool) -> Self {
        self.supports_boolean_data_type = enabled;
        self
    }

    /// Sets the large-object threshold for string columns.
    #[must_use]
    pub const fn with_clob_length(mut self, clob_length: i32) -> Self {
        self.clob_length = clob_length;
        self
    }
}
