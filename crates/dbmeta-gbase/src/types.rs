//! Column type mapping for GBase.

use dbmeta_core::{ColumnMeta, KeyFields, ValueType};

/// Largest declared length still stored as a plain `INTEGER`.
pub const INTEGER_MAX_LENGTH: i32 = 9;
/// Strings shorter than this are `VARCHAR`.
pub const VARCHAR_LIMIT: i32 = 256;
/// Strings shorter than this (and at least [`VARCHAR_LIMIT`]) are `LVARCHAR`.
pub const LVARCHAR_LIMIT: i32 = 32_768;

/// Rendered for types GBase has no mapping for. The leading space is part of
/// the output.
pub const UNKNOWN_TYPE: &str = " UNKNOWN";

/// Maps a column to its GBase type.
pub(crate) fn column_type(
    column: &ColumnMeta,
    keys: &KeyFields<'_>,
    native_boolean: bool,
    clob_length: i32,
) -> String {
    match column.value_type {
        ValueType::Timestamp => "DATETIME".to_string(),
        ValueType::Date => "DATETIME YEAR to FRACTION".to_string(),
        ValueType::Boolean if native_boolean => "BOOLEAN".to_string(),
        ValueType::Boolean => "CHAR(1)".to_string(),
        ValueType::Number | ValueType::Integer | ValueType::BigNumber => {
            numeric_type(column, keys).to_string()
        }
        ValueType::String => string_type(column.length, clob_length),
        ValueType::None
        | ValueType::Serializable
        | ValueType::Binary
        | ValueType::Internet => UNKNOWN_TYPE.to_string(),
    }
}

fn numeric_type(column: &ColumnMeta, keys: &KeyFields<'_>) -> &'static str {
    let (length, precision) = (column.length, column.precision);
    if keys.is_key(column) {
        if keys.use_autoincrement {
            "SERIAL8"
        } else {
            "INTEGER PRIMARY KEY"
        }
    } else if (length < 0 && precision < 0) || precision > 0 || length > INTEGER_MAX_LENGTH {
        "FLOAT"
    } else {
        "INTEGER"
    }
}

fn string_type(length: i32, clob_length: i32) -> String {
    if length >= clob_length {
        "CLOB".to_string()
    } else if length < VARCHAR_LIMIT {
        if length > 0 {
            format!("VARCHAR({length})")
        } else {
            "VARCHAR".to_string()
        }
    } else if length < LVARCHAR_LIMIT {
        "LVARCHAR".to_string()
    } else {
        "TEXT".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbmeta_core::DEFAULT_CLOB_LENGTH;

    fn number(length: i32, precision: i32) -> ColumnMeta {
        ColumnMeta::new("qty", ValueType::Number)
            .with_length(length)
            .with_precision(precision)
    }

    fn plain(column: &ColumnMeta) -> String {
        column_type(column, &KeyFields::none(), false, DEFAULT_CLOB_LENGTH)
    }

    #[test]
    fn test_integer_boundary() {
        assert_eq!(plain(&number(0, 0)), "INTEGER");
        assert_eq!(plain(&number(9, 0)), "INTEGER");
        assert_eq!(plain(&number(10, 0)), "FLOAT");
        assert_eq!(plain(&number(5, 1)), "FLOAT");
    }

    #[test]
    fn test_unspecified_numbers() {
        assert_eq!(plain(&number(-1, -1)), "FLOAT");
        // Only one side unspecified still counts as a whole number.
        assert_eq!(plain(&number(-1, 0)), "INTEGER");
        assert_eq!(plain(&number(5, -1)), "INTEGER");
    }

    #[test]
    fn test_string_boundaries() {
        assert_eq!(string_type(255, DEFAULT_CLOB_LENGTH), "VARCHAR(255)");
        assert_eq!(string_type(256, DEFAULT_CLOB_LENGTH), "LVARCHAR");
        assert_eq!(string_type(32_767, DEFAULT_CLOB_LENGTH), "LVARCHAR");
        assert_eq!(string_type(32_768, DEFAULT_CLOB_LENGTH), "TEXT");
        assert_eq!(string_type(0, DEFAULT_CLOB_LENGTH), "VARCHAR");
        assert_eq!(string_type(-1, DEFAULT_CLOB_LENGTH), "VARCHAR");
    }

    #[test]
    fn test_clob_threshold_wins() {
        assert_eq!(string_type(100, 100), "CLOB");
        assert_eq!(string_type(99, 100), "VARCHAR(99)");
        assert_eq!(string_type(DEFAULT_CLOB_LENGTH, DEFAULT_CLOB_LENGTH), "CLOB");
    }

    #[test]
    fn test_boolean_follows_option() {
        let flag = ColumnMeta::new("active", ValueType::Boolean);
        assert_eq!(plain(&flag), "CHAR(1)");
        assert_eq!(
            column_type(&flag, &KeyFields::none(), true, DEFAULT_CLOB_LENGTH),
            "BOOLEAN"
        );
    }

    #[test]
    fn test_unmapped_types() {
        for value_type in [
            ValueType::None,
            ValueType::Serializable,
            ValueType::Binary,
            ValueType::Internet,
        ] {
            assert_eq!(plain(&ColumnMeta::new("blob", value_type)), UNKNOWN_TYPE);
        }
    }
}
