//! Mutates the process-wide registry, so it lives in its own test binary.

use rowscan::Record;

#[derive(Debug, Default, Record)]
struct First {
    #[tag(sql = "sql_name", db = "db_name")]
    pub value: i64,
}

#[derive(Debug, Default, Record)]
struct Second {
    #[tag(sql = "sql_name", db = "db_name")]
    pub value: i64,
}

#[derive(Debug, Default, Record)]
struct Third {
    #[tag(db = "db_name")]
    pub value: i64,
}

#[test]
fn config_changes_affect_uncached_types_only() {
    let registry = rowscan::default_registry();

    assert_eq!(registry.tag_name(), "sql");
    assert_eq!(rowscan::columns::<First>(), "sql_name");
    assert!(registry.is_cached::<First>());

    rowscan::set_tag_name("db");
    assert_eq!(registry.tag_name(), "db");
    assert_eq!(rowscan::columns::<First>(), "sql_name");
    assert_eq!(rowscan::columns::<Second>(), "db_name");

    rowscan::set_name_mapper(|name| name.to_uppercase());
    assert_eq!(rowscan::columns::<Second>(), "db_name");
    assert_eq!(rowscan::columns::<Third>(), "DB_NAME");

    assert_eq!(registry.len(), 3);
}
