//! The dialect descriptor contract.
//!
//! An ETL host asks a descriptor how one database product spells a handful
//! of things: its connection URL, driver, probe queries, column types and
//! reserved words. Each product implements [`DatabaseDialect`] once; the
//! provided methods carry the behavior most products share.

mod quoting;

pub use quoting::needs_quoting;

use crate::connection::{AccessMode, ConnectionParams};
use crate::error::Result;
use crate::value::{ColumnMeta, DefinitionStyle, KeyFields};

/// Identifies a dialect to the host that loads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    /// Stable identifier, e.g. `GBASE`.
    pub id: &'static str,
    /// Name shown to users.
    pub description: &'static str,
}

/// Trait for database-specific connection facts and SQL fragments.
pub trait DatabaseDialect: Send + Sync {
    /// Returns the plugin identity.
    fn plugin(&self) -> PluginInfo;

    /// Returns the supported access modes, preferred first.
    fn access_modes(&self) -> &'static [AccessMode];

    /// Returns the default port for an access mode, `None` when a port does
    /// not apply.
    fn default_port(&self, mode: AccessMode) -> Option<u16>;

    /// Returns the driver the host loads for an access mode.
    fn driver_class(&self, mode: AccessMode) -> &'static str;

    /// Builds the connection URL.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::BadConfiguration`](crate::DialectError::BadConfiguration)
    /// when a piece the access mode needs is missing.
    fn connection_url(&self, params: &ConnectionParams) -> Result<String>;

    /// Whether statements must use bind placeholders instead of literals.
    fn needs_placeholder(&self) -> bool {
        false
    }

    /// Whether all tables must be locked before batch operations.
    fn needs_to_lock_all_tables(&self) -> bool {
        true
    }

    /// Whether the product has a native boolean column type.
    fn supports_boolean_data_type(&self) -> bool {
        false
    }

    /// Returns a query that yields the fields of a table cheaply.
    fn query_fields_sql(&self, table: &str) -> String;

    /// Returns a query that yields one column of a table cheaply.
    fn query_column_fields_sql(&self, column: &str, table: &str) -> String;

    /// Returns SQL that fails when the table does not exist.
    fn table_exists_sql(&self, table: &str) -> String {
        self.query_fields_sql(table)
    }

    /// Returns SQL that fails when the column does not exist.
    fn column_exists_sql(&self, column: &str, table: &str) -> String {
        self.query_column_fields_sql(column, table)
    }

    /// Generates the statements locking `tables`, in order.
    fn lock_tables_sql(&self, tables: &[&str]) -> String;

    /// Renders the type of `column`, optionally prefixed by its name.
    fn field_definition(
        &self,
        column: &ColumnMeta,
        keys: &KeyFields<'_>,
        style: DefinitionStyle,
    ) -> String;

    /// Generates SQL for ADD COLUMN.
    fn add_column_sql(&self, table: &str, column: &ColumnMeta, keys: &KeyFields<'_>) -> String;

    /// Generates SQL for changing the type of an existing column.
    fn modify_column_sql(
        &self,
        table: &str,
        column: &ColumnMeta,
        keys: &KeyFields<'_>,
    ) -> String;

    /// Generates SQL for DROP COLUMN.
    fn drop_column_sql(&self, table: &str, column: &ColumnMeta) -> String;

    /// Returns the words that must be quoted when used as identifiers.
    fn reserved_words(&self) -> &'static [&'static str];

    /// Returns true if `word` is reserved, ignoring case.
    fn is_reserved_word(&self, word: &str) -> bool {
        self.reserved_words()
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(word))
    }

    /// Returns the client libraries the host must have on its path.
    fn used_libraries(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns a link documenting extra connection options.
    fn extra_options_help_url(&self) -> Option<&'static str> {
        None
    }

    /// Returns the opening identifier quote.
    fn start_quote(&self) -> &'static str {
        "\""
    }

    /// Returns the closing identifier quote.
    fn end_quote(&self) -> &'static str {
        "\""
    }

    /// Quotes an identifier unconditionally.
    fn quote_identifier(&self, name: &str) -> String {
        let start = self.start_quote();
        let end = self.end_quote();
        let doubled = format!("{end}{end}");
        format!("{start}{}{end}", name.replace(end, &doubled))
    }

    /// Quotes an identifier only if the product would misread it bare.
    fn quote_field(&self, name: &str) -> String {
        let already_quoted = name.len() > 1
            && name.starts_with(self.start_quote())
            && name.ends_with(self.end_quote());
        if already_quoted || !needs_quoting(name, |word| self.is_reserved_word(word)) {
            name.to_string()
        } else {
            self.quote_identifier(name)
        }
    }
}
