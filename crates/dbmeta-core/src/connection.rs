//! Connection parameters handed over by the host.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Line terminator appended after generated statements.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// Line terminator appended after generated statements.
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// How the host reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessMode {
    /// The vendor driver, talking the database's own wire protocol.
    Native,
    /// A generic ODBC bridge addressing a configured data source name.
    Odbc,
}

impl AccessMode {
    /// Returns the name hosts use for this access mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "NATIVE",
            Self::Odbc => "ODBC",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings entered in the host.
///
/// Every field is optional because hosts collect them from forms and
/// variables. Empty strings are treated the same as missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    /// Host name or address of the database server.
    #[serde(default)]
    pub hostname: Option<String>,
    /// Port, passed through verbatim.
    #[serde(default)]
    pub port: Option<String>,
    /// Database name, or the data source name in ODBC mode.
    #[serde(default)]
    pub database_name: Option<String>,
    /// Server instance name.
    #[serde(default)]
    pub server_name: Option<String>,
    /// How the database is reached.
    pub access_mode: AccessMode,
}

impl ConnectionParams {
    /// Creates parameters for a native connection.
    #[must_use]
    pub fn native(
        hostname: impl Into<String>,
        port: impl Into<String>,
        database_name: impl Into<String>,
    ) -> Self {
        Self {
            hostname: Some(hostname.into()),
            port: Some(port.into()),
            database_name: Some(database_name.into()),
            server_name: None,
            access_mode: AccessMode::Native,
        }
    }

    /// Creates parameters for an ODBC connection to the given data source.
    #[must_use]
    pub fn odbc(data_source: impl Into<String>) -> Self {
        Self {
            hostname: None,
            port: None,
            database_name: Some(data_source.into()),
            server_name: None,
            access_mode: AccessMode::Odbc,
        }
    }

    /// Sets the server instance name.
    #[must_use]
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = Some(server_name.into());
        self
    }

    /// Returns the host name, if set and not empty.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        non_empty(self.hostname.as_deref())
    }

    /// Returns the port, if set and not empty.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        non_empty(self.port.as_deref())
    }

    /// Returns the database name, if set and not empty.
    #[must_use]
    pub fn database_name(&self) -> Option<&str> {
        non_empty(self.database_name.as_deref())
    }

    /// Returns the server name, if set and not empty.
    #[must_use]
    pub fn server_name(&self) -> Option<&str> {
        non_empty(self.server_name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
