//! Tests for reserved words and identifier quoting.

mod common;
use common::*;

use dbmeta_gbase::RESERVED_WORDS;

#[test]
fn contains_core_sql_keywords() {
    for word in ["SELECT", "TABLE", "ORDER", "LVARCHAR", "DELIMITER"] {
        assert!(RESERVED_WORDS.contains(&word), "{word}");
    }
    assert!(RESERVED_WORDS.len() > 700);
}

#[test]
fn lookup_ignores_case() {
    let dialect = dialect();
    assert!(dialect.is_reserved_word("select"));
    assert!(dialect.is_reserved_word("Table"));
    assert!(dialect.is_reserved_word("oRdEr"));
}

#[test]
fn arbitrary_tokens_are_not_reserved() {
    let dialect = dialect();
    assert!(!dialect.is_reserved_word("FOOBARBAZ"));
    assert!(!dialect.is_reserved_word("customer_name"));
    assert!(!dialect.is_reserved_word(""));
}

#[test]
fn star_entries_match_only_literally() {
    let dialect = dialect();
    assert!(dialect.is_reserved_word("sys*"));
    assert!(dialect.is_reserved_word("IFX_*"));
    for name in ["system_id", "sysdate_col", "syslog", "systables", "ifx_custom"] {
        assert!(!dialect.is_reserved_word(name), "{name}");
    }
}

#[test]
fn lookup_agrees_with_word_list() {
    let dialect = dialect();
    for name in ["select", "Order", "system_id", "ifx_lock", "notequal", "customer"] {
        let listed = dialect
            .reserved_words()
            .iter()
            .any(|word| word.eq_ignore_ascii_case(name));
        assert_eq!(dialect.is_reserved_word(name), listed, "{name}");
    }
}

#[test]
fn quote_field_uses_reserved_words() {
    let dialect = dialect();
    assert_eq!(dialect.quote_field("order"), "\"order\"");
    assert_eq!(dialect.quote_field("system_id"), "system_id");
    assert_eq!(dialect.quote_field("ifx_custom"), "ifx_custom");
    assert_eq!(dialect.quote_field("customer"), "customer");
    assert_eq!(dialect.quote_field("unit price"), "\"unit price\"");
}
