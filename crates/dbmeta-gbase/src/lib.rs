//! # dbmeta-gbase
//!
//! GBase dialect descriptor for `dbmeta-core`.
//!
//! # How GBase differs from other dialects
//!
//! - **Informix heritage**: GBase 8s speaks the Informix SQLI protocol, so
//!   native connections go through the Informix driver and a
//!   `informix-sqli://` URL naming the server instance (`INFORMIXSERVER`).
//! - **Delimited identifiers**: the URL always sets `DELIMIDENT=Y`, which
//!   makes double-quoted identifiers legal. Reserved words can then be used
//!   as column names once quoted.
//! - **Row limiting**: `SELECT FIRST n` instead of `LIMIT n`; probe queries
//!   use `FIRST 1`.
//! - **Locking**: `LOCK TABLE t IN SHARE MODE`, one statement per table.
//! - **Column types**: `DATETIME YEAR to FRACTION` for dates, `SERIAL8` for
//!   generated keys, and a `VARCHAR` / `LVARCHAR` / `TEXT` / `CLOB` ladder for
//!   strings by declared length.
//!
//! ## Example
//!
//! ```rust
//! use dbmeta_core::{ColumnMeta, ConnectionParams, DatabaseDialect, KeyFields, ValueType};
//! use dbmeta_gbase::GBaseDialect;
//!
//! let dialect = GBaseDialect::new();
//!
//! let params = ConnectionParams::native("db1", "9088", "stores").with_server_name("gbase01");
//! assert_eq!(
//!     dialect.connection_url(&params).unwrap(),
//!     "informix-sqli://db1:9088/stores:INFORMIXSERVER=gbase01;DELIMIDENT=Y"
//! );
//!
//! let column = ColumnMeta::new("notes", ValueType::String).with_length(300);
//! assert_eq!(
//!     dialect.add_column_sql("orders", &column, &KeyFields::none()),
//!     "ALTER TABLE orders ADD notes LVARCHAR"
//! );
//! ```

mod dialect;
pub mod reserved;
pub mod types;

pub use dialect::{
    GBaseDialect, DEFAULT_PORT, NATIVE_DRIVER, NATIVE_URL_SCHEME, ODBC_DRIVER, ODBC_URL_SCHEME,
};
pub use reserved::RESERVED_WORDS;
