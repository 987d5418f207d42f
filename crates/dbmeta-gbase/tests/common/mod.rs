#![allow(dead_code)]

use dbmeta_core::{ColumnMeta, DefinitionStyle, DialectOptions, KeyFields, ValueType};
use dbmeta_gbase::GBaseDialect;

pub use dbmeta_core::DatabaseDialect;

pub fn dialect() -> GBaseDialect {
    GBaseDialect::new()
}

pub fn dialect_with(options: DialectOptions) -> GBaseDialect {
    GBaseDialect::with_options(options)
}

pub fn string(name: &str, length: i32) -> ColumnMeta {
    ColumnMeta::new(name, ValueType::String).with_length(length)
}

pub fn number(name: &str, length: i32, precision: i32) -> ColumnMeta {
    ColumnMeta::new(name, ValueType::Number)
        .with_length(length)
        .with_precision(precision)
}

/// Renders the bare type of `column` with no key columns.
pub fn type_of(column: &ColumnMeta) -> String {
    dialect().field_definition(column, &KeyFields::none(), DefinitionStyle::TYPE_ONLY)
}
