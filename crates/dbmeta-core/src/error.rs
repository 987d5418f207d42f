//! Error types for dialect descriptors.

use thiserror::Error;

use crate::connection::AccessMode;

/// Errors a dialect descriptor can report to its host.
#[derive(Debug, Error)]
pub enum DialectError {
    /// A connection URL was requested without a piece it needs.
    #[error("bad configuration: {access_mode} connection requires a {field}")]
    BadConfiguration {
        /// The access mode the URL was requested for.
        access_mode: AccessMode,
        /// The connection field that is missing or empty.
        field: &'static str,
    },

    /// The dialect options document could not be read.
    #[error("invalid dialect options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_configuration_message() {
        let err = DialectError::BadConfiguration {
            access_mode: AccessMode::Native,
            field: "server name",
        };
        assert_eq!(
            err.to_string(),
            "bad configuration: NATIVE connection requires a server name"
        );
    }
}
