//! # dbmeta-core
//!
//! The contract between an ETL host and the database dialect plugins it
//! loads.
//!
//! A host knows how to move rows around; it does not know how each database
//! product spells a connection URL, which column type stores a 300 character
//! string, or which identifiers need quoting. A dialect crate answers those
//! questions by implementing [`DatabaseDialect`]. Every answer is a pure
//! function of its arguments, so one descriptor can serve any number of
//! threads.
//!
//! This crate provides:
//! - [`DatabaseDialect`], the descriptor trait, with the defaults most
//!   products share
//! - [`ColumnMeta`], [`KeyFields`] and [`DefinitionStyle`], the inputs of
//!   column DDL generation
//! - [`ConnectionParams`] and [`AccessMode`], the inputs of URL construction
//! - [`DialectOptions`], host configuration that changes type mapping
//!
//! ## Example
//!
//! ```rust
//! use dbmeta_core::{ColumnMeta, ValueType, DialectOptions};
//!
//! let column = ColumnMeta::new("comment", ValueType::String).with_length(300);
//! assert_eq!(column.length, 300);
//!
//! let options = DialectOptions::from_json(r#"{"clob_length": 4000}"#).unwrap();
//! assert_eq!(options.clob_length, 4000);
//! ```

pub mod connection;
pub mod dialect;
pub mod error;
pub mod options;
pub mod value;

pub use connection::{AccessMode, ConnectionParams, LINE_TERMINATOR};
pub use dialect::{DatabaseDialect, PluginInfo};
pub use error::{DialectError, Result};
pub use options::{DialectOptions, DEFAULT_CLOB_LENGTH};
pub use value::{ColumnMeta, DefinitionStyle, KeyFields, ValueType, UNSPECIFIED};
