#![cfg(feature = "postgresql")]

use rowscan::postgresql::{PgRow, PgRows};
use rowscan::{Record, Rows};
use tests::db::postgresql::{connect, temp_table};

#[derive(Debug, Default, PartialEq, Record)]
struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
    pub sku: Option<uuid::Uuid>,
    pub notes: Option<String>,
}

#[tokio::test]
async fn scans_query_results() {
    let client = connect().await.unwrap();
    temp_table(
        &client,
        "products",
        "id BIGINT, name TEXT, price DOUBLE PRECISION, in_stock BOOLEAN, sku UUID, notes VARCHAR(64)",
    )
    .await
    .unwrap();

    client
        .batch_execute(
            "INSERT INTO products VALUES \
             (1, 'lamp', 19.5, true, '67e55044-10b1-426f-9247-bb680e5fe0c8', NULL), \
             (2, 'desk', 120.0, false, NULL, 'oak')",
        )
        .await
        .unwrap();

    let sql = format!("SELECT {} FROM products ORDER BY id", rowscan::columns::<Product>());
    let mut rows = PgRows::query(&client, &sql, &[]).await.unwrap();
    assert_eq!(rows.len(), 2);

    let products: Vec<Product> = rowscan::scan_all(&mut rows).unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "lamp");
    assert_eq!(products[0].price, 19.5);
    assert!(products[0].in_stock);
    assert!(products[0].sku.is_some());
    assert_eq!(products[0].notes, None);
    assert_eq!(products[1].notes.as_deref(), Some("oak"));
    assert!(!rows.next().unwrap());
}

#[tokio::test]
async fn unsupported_column_type() {
    let client = connect().await.unwrap();

    let mut rows = PgRows::query(&client, "SELECT now() AS id", &[]).await.unwrap();
    assert!(rows.next().unwrap());

    let mut product = Product::default();
    let err = rowscan::scan(&mut product, &mut rows).unwrap_err();

    assert!(err.is_unsupported_type());
    assert_eq!(
        err.to_string(),
        "unsupported column type `timestamptz` for column `id`"
    );
}

#[tokio::test]
async fn single_row_queries() {
    let client = connect().await.unwrap();
    temp_table(&client, "widgets", "id INT4, name TEXT").await.unwrap();
    client
        .batch_execute("INSERT INTO widgets VALUES (7, 'gear')")
        .await
        .unwrap();

    #[derive(Debug, Default, Record)]
    struct Widget {
        pub id: i32,
        pub name: String,
    }

    let row = PgRow::query(&client, "SELECT id, name FROM widgets WHERE id = $1", &[&7_i32])
        .await
        .unwrap();

    let mut widget = Widget::default();
    rowscan::scan_row(&mut widget, row).unwrap();
    assert_eq!((widget.id, widget.name.as_str()), (7, "gear"));

    let row = PgRow::query(&client, "SELECT id, name FROM widgets WHERE id = $1", &[&8_i32])
        .await
        .unwrap();

    let err = rowscan::scan_row(&mut widget, row).unwrap_err();
    assert!(err.is_record_not_found());
}
