//! Column descriptors supplied by the host.
//!
//! These mirror the value metadata an ETL host attaches to every field in a
//! row stream: a name, a logical type, and a length/precision pair where a
//! negative number means "not specified".

use serde::{Deserialize, Serialize};

/// Length or precision value meaning "not specified".
pub const UNSPECIFIED: i32 = -1;

/// Logical type of a column, as the host models it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    /// No type assigned.
    None,
    /// Floating point number.
    Number,
    /// Character data.
    String,
    /// Calendar date with time of day.
    Date,
    /// True/false flag.
    Boolean,
    /// Whole number.
    Integer,
    /// Arbitrary precision decimal.
    BigNumber,
    /// Opaque serialized object.
    Serializable,
    /// Raw bytes.
    Binary,
    /// Date and time with fractional seconds.
    Timestamp,
    /// Network address.
    Internet,
}

impl ValueType {
    /// Returns true for the number-like types.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer | Self::BigNumber)
    }
}

/// Describes one column to render DDL for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// The column name.
    pub name: String,
    /// The logical type.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Declared length; negative when not specified.
    #[serde(default = "unspecified")]
    pub length: i32,
    /// Declared precision; negative when not specified.
    #[serde(default = "unspecified")]
    pub precision: i32,
}

const fn unspecified() -> i32 {
    UNSPECIFIED
}

impl ColumnMeta {
    /// Creates a column with unspecified length and precision.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            length: UNSPECIFIED,
            precision: UNSPECIFIED,
        }
    }

    /// Sets the declared length.
    #[must_use]
    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Sets the declared precision.
    #[must_use]
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Returns true when the column name matches `other`, ignoring case.
    #[must_use]
    pub fn is_named(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }
}

/// Key columns that receive special treatment in column definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyFields<'a> {
    /// Name of the surrogate (technical) key column.
    pub technical_key: Option<&'a str>,
    /// Name of the primary key column.
    pub primary_key: Option<&'a str>,
    /// Whether key columns should be generated by the database.
    pub use_autoincrement: bool,
}

impl<'a> KeyFields<'a> {
    /// No key columns.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            technical_key: None,
            primary_key: None,
            use_autoincrement: false,
        }
    }

    /// Sets the technical key column.
    #[must_use]
    pub const fn technical_key(mut self, name: &'a str) -> Self {
        self.technical_key = Some(name);
        self
    }

    /// Sets the primary key column.
    #[must_use]
    pub const fn primary_key(mut self, name: &'a str) -> Self {
        self.primary_key = Some(name);
        self
    }

    /// Requests auto-incremented key columns.
    #[must_use]
    pub const fn autoincrement(mut self, enabled: bool) -> Self {
        self.use_autoincrement = enabled;
        self
    }

    /// Returns true when `column` is the technical or the primary key.
    #[must_use]
    pub fn is_key(&self, column: &ColumnMeta) -> bool {
        [self.technical_key, self.primary_key]
            .into_iter()
            .flatten()
            .any(|key| column.is_named(key))
    }
}

/// Shapes the text of a rendered column definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefinitionStyle {
    /// Prefix the definition with the column name.
    pub include_name: bool,
    /// Append [`LINE_TERMINATOR`](crate::LINE_TERMINATOR) to the definition.
    pub line_terminator: bool,
}

impl DefinitionStyle {
    /// Type only, no name, no terminator.
    pub const TYPE_ONLY: Self = Self {
        include_name: false,
        line_terminator: false,
    };

    /// Name followed by type, as used inside `ALTER TABLE`.
    pub const NAMED: Self = Self {
        include_name: true,
        line_terminator: false,
    };

    /// Name, type and a line terminator, as used inside `CREATE TABLE`.
    pub const NAMED_LINE: Self = Self {
        include_name: true,
        line_terminator: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults_to_unspecified() {
        let col = ColumnMeta::new("amount", ValueType::Number);
        assert_eq!(col.length, UNSPECIFIED);
        assert_eq!(col.precision, UNSPECIFIED);
    }

    #[test]
    fn test_numeric_types() {
        assert!(ValueType::Number.is_numeric());
        assert!(ValueType::Integer.is_numeric());
        assert!(ValueType::BigNumber.is_numeric());
        assert!(!ValueType::String.is_numeric());
        assert!(!ValueType::Timestamp.is_numeric());
    }

    #[test]
    fn test_key_matching_ignores_case() {
        let keys = KeyFields::none().technical_key("ID").primary_key("Code");
        assert!(keys.is_key(&ColumnMeta::new("id", ValueType::Integer)));
        assert!(keys.is_key(&ColumnMeta::new("CODE", ValueType::Integer)));
        assert!(!keys.is_key(&ColumnMeta::new("name", ValueType::String)));
        assert!(!KeyFields::none().is_key(&ColumnMeta::new("id", ValueType::Integer)));
    }

    #[test]
    fn test_deserialize_column() {
        let col: ColumnMeta =
            serde_json::from_str(r#"{"name": "total", "type": "BIGNUMBER", "length": 18}"#)
                .unwrap();
        assert_eq!(col.value_type, ValueType::BigNumber);
        assert_eq!(col.length, 18);
        assert_eq!(col.precision, UNSPECIFIED);
    }
}
