//! GBase dialect implementation.

use dbmeta_core::{
    AccessMode, ColumnMeta, ConnectionParams, DatabaseDialect, DefinitionStyle, DialectError,
    DialectOptions, KeyFields, PluginInfo, Result, LINE_TERMINATOR,
};
use tracing::{debug, trace, warn};

use crate::reserved::{self, RESERVED_WORDS};
use crate::types::{self, UNKNOWN_TYPE};

/// Port the GBase listener uses unless configured otherwise.
pub const DEFAULT_PORT: u16 = 1526;
/// Driver loaded for native connections.
pub const NATIVE_DRIVER: &str = "com.informix.jdbc.IfxDriver";
/// Driver loaded for ODBC connections.
pub const ODBC_DRIVER: &str = "sun.jdbc.odbc.JdbcOdbcDriver";

/// Scheme of native connection URLs.
///
/// URLs are returned without a `jdbc:` prefix. Hosts that pass them to a JDBC
/// `DriverManager` must prepend it themselves.
pub const NATIVE_URL_SCHEME: &str = "informix-sqli://";
/// Scheme of ODBC connection URLs, followed by the data source name. Like
/// [`NATIVE_URL_SCHEME`], it carries no `jdbc:` prefix.
pub const ODBC_URL_SCHEME: &str = "odbc:";

const ACCESS_MODES: &[AccessMode] = &[AccessMode::Native, AccessMode::Odbc];
const USED_LIBRARIES: &[&str] = &["ifxjdbc.jar"];
const HELP_URL: &str = "http://www.gbase.cn/";

/// GBase dialect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GBaseDialect {
    options: DialectOptions,
}

impl GBaseDialect {
    /// Creates a GBase dialect with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GBase dialect with host-supplied options.
    #[must_use]
    pub const fn with_options(options: DialectOptions) -> Self {
        Self { options }
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> &DialectOptions {
        &self.options
    }
}

fn require<'a>(
    value: Option<&'a str>,
    access_mode: AccessMode,
    field: &'static str,
) -> Result<&'a str> {
    value.ok_or_else(|| {
        warn!(%access_mode, field, "connection URL requested without required field");
        DialectError::BadConfiguration { access_mode, field }
    })
}

impl DatabaseDialect for GBaseDialect {
    fn plugin(&self) -> PluginInfo {
        PluginInfo {
            id: "GBASE",
            description: "GBase Database",
        }
    }

    fn access_modes(&self) -> &'static [AccessMode] {
        ACCESS_MODES
    }

    fn default_port(&self, mode: AccessMode) -> Option<u16> {
        match mode {
            AccessMode::Native => Some(DEFAULT_PORT),
            AccessMode::Odbc => None,
        }
    }

    fn driver_class(&self, mode: AccessMode) -> &'static str {
        match mode {
            AccessMode::Native => NATIVE_DRIVER,
            AccessMode::Odbc => ODBC_DRIVER,
        }
    }

    fn connection_url(&self, params: &ConnectionParams) -> Result<String> {
        let mode = params.access_mode;
        let url = match mode {
            AccessMode::Odbc => {
                let dsn = require(params.database_name(), mode, "database name")?;
                format!("{ODBC_URL_SCHEME}{dsn}")
            }
            AccessMode::Native => {
                let host = require(params.hostname(), mode, "hostname")?;
                let port = require(params.port(), mode, "port")?;
                let db = require(params.database_name(), mode, "database name")?;
                let server = require(params.server_name(), mode, "server name")?;
                format!(
                    "{NATIVE_URL_SCHEME}{host}:{port}/{db}:INFORMIXSERVER={server};DELIMIDENT=Y"
                )
            }
        };
        debug!(access_mode = %mode, url = %url, "built connection URL");
        Ok(url)
    }

    fn needs_placeholder(&self) -> bool {
        true
    }

    fn needs_to_lock_all_tables(&self) -> bool {
        false
    }

    fn supports_boolean_data_type(&self) -> bool {
        self.options.supports_boolean_data_type
    }

    fn query_fields_sql(&self, table: &str) -> String {
        format!("SELECT FIRST 1 * FROM {table}")
    }

    fn query_column_fields_sql(&self, column: &str, table: &str) -> String {
        format!("SELECT FIRST 1 {column} FROM {table}")
    }

    fn lock_tables_sql(&self, tables: &[&str]) -> String {
        let mut sql = String::with_capacity(128);
        for table in tables {
            sql.push_str(&format!("LOCK TABLE {table} IN SHARE MODE;{LINE_TERMINATOR}"));
        }
        sql
    }

    fn field_definition(
        &self,
        column: &ColumnMeta,
        keys: &KeyFields<'_>,
        style: DefinitionStyle,
    ) -> String {
        let sql_type = types::column_type(
            column,
            keys,
            self.supports_boolean_data_type(),
            self.options.clob_length,
        );
        if sql_type == UNKNOWN_TYPE {
            warn!(
                column = %column.name,
                value_type = ?column.value_type,
                "no GBase type for column"
            );
        }
        trace!(
            column = %column.name,
            length = column.length,
            precision = column.precision,
            sql_type = %sql_type,
            "mapped column type"
        );

        let mut sql = String::new();
        if style.include_name {
            sql.push_str(&column.name);
            sql.push(' ');
        }
        sql.push_str(&sql_type);
        if style.line_terminator {
            sql.push_str(LINE_TERMINATOR);
        }
        sql
    }

    fn add_column_sql(&self, table: &str, column: &ColumnMeta, keys: &KeyFields<'_>) -> String {
        format!(
            "ALTER TABLE {table} ADD {}",
            self.field_definition(column, keys, DefinitionStyle::NAMED)
        )
    }

    fn modify_column_sql(
        &self,
        table: &str,
        column: &ColumnMeta,
        keys: &KeyFields<'_>,
    ) -> String {
        format!(
            "ALTER TABLE {table} MODIFY {}",
            self.field_definition(column, keys, DefinitionStyle::NAMED)
        )
    }

    fn drop_column_sql(&self, table: &str, column: &ColumnMeta) -> String {
        format!("ALTER TABLE {table} DROP COLUMN {}{LINE_TERMINATOR}", column.name)
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        RESERVED_WORDS
    }

    fn is_reserved_word(&self, word: &str) -> bool {
        reserved::is_reserved(word)
    }

    fn used_libraries(&self) -> &'static [&'static str] {
        USED_LIBRARIES
    }

    fn extra_options_help_url(&self) -> Option<&'static str> {
        Some(HELP_URL)
    }
}
