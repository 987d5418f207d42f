//! Tests for generated statements: probes, locks, ALTER TABLE.

mod common;
use common::*;

use dbmeta_core::{ColumnMeta, KeyFields, ValueType, LINE_TERMINATOR};

#[test]
fn row_probe() {
    assert_eq!(dialect().query_fields_sql("foo"), "SELECT FIRST 1 * FROM foo");
    assert_eq!(dialect().table_exists_sql("foo"), "SELECT FIRST 1 * FROM foo");
}

#[test]
fn column_probe() {
    assert_eq!(
        dialect().query_column_fields_sql("bar", "foo"),
        "SELECT FIRST 1 bar FROM foo"
    );
    assert_eq!(
        dialect().column_exists_sql("bar", "foo"),
        "SELECT FIRST 1 bar FROM foo"
    );
}

#[test]
fn lock_tables_in_input_order() {
    let sql = dialect().lock_tables_sql(&["a", "b"]);
    assert_eq!(
        sql,
        format!("LOCK TABLE a IN SHARE MODE;{LINE_TERMINATOR}LOCK TABLE b IN SHARE MODE;{LINE_TERMINATOR}")
    );
    let lines: Vec<_> = sql.lines().collect();
    assert_eq!(
        lines,
        ["LOCK TABLE a IN SHARE MODE;", "LOCK TABLE b IN SHARE MODE;"]
    );
}

#[test]
fn lock_no_tables() {
    assert!(dialect().lock_tables_sql(&[]).is_empty());
}

#[test]
fn add_column() {
    let sql = dialect().add_column_sql("orders", &string("note", 80), &KeyFields::none());
    assert_eq!(sql, "ALTER TABLE orders ADD note VARCHAR(80)");
}

#[test]
fn add_key_column() {
    let keys = KeyFields::none().technical_key("id").autoincrement(true);
    let sql = dialect().add_column_sql("orders", &number("id", 9, 0), &keys);
    assert_eq!(sql, "ALTER TABLE orders ADD id SERIAL8");
}

#[test]
fn modify_column() {
    let sql = dialect().modify_column_sql(
        "orders",
        &ColumnMeta::new("shipped", ValueType::Timestamp),
        &KeyFields::none(),
    );
    assert_eq!(sql, "ALTER TABLE orders MODIFY shipped DATETIME");
}

#[test]
fn drop_column() {
    let sql = dialect().drop_column_sql("orders", &string("note", 80));
    assert_eq!(sql, format!("ALTER TABLE orders DROP COLUMN note{LINE_TERMINATOR}"));
}

#[test]
fn flags_are_constant() {
    let dialect = dialect();
    for _ in 0..3 {
        assert!(dialect.needs_placeholder());
        assert!(!dialect.needs_to_lock_all_tables());
    }
}

#[test]
fn shared_across_threads() {
    let dialect = dialect();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let dialect = &dialect;
            scope.spawn(move || {
                let table = format!("t{i}");
                assert_eq!(
                    dialect.query_fields_sql(&table),
                    format!("SELECT FIRST 1 * FROM {table}")
                );
            });
        }
    });
}
