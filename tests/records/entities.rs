//! Backing file layout for the bundled entities.

use chrono::NaiveDate;
use recordstore::entities::{Order, OrderDate, Product, TaskItem};
use recordstore::{Catalog, RecordStore, StoreOptions};

#[test]
fn pen_scenario_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let products = RecordStore::<Product>::open(dir.path()).unwrap();

    products.create(Product::new("Pen", 1.5, "Stationery")).unwrap();

    let text = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
    assert_eq!(
        text,
        r#"[{"Id":1,"Name":"Pen","Price":1.5,"Category":"Stationery"}]"#
    );
}

#[test]
fn orders_embed_products_by_value() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path(), StoreOptions::default()).unwrap();
    let pen = catalog
        .products()
        .create(Product::new("Pen", 1.5, "Stationery"))
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let order = catalog
        .orders()
        .create(Order::new(1, date, vec![pen.clone()]))
        .unwrap();
    catalog.products().delete(pen.id).unwrap();

    let stored = catalog.orders().get(order.id).unwrap().unwrap();
    assert_eq!(stored.products, vec![pen]);
    assert!(catalog.products().list().unwrap().is_empty());
}

#[test]
fn orders_with_offset_dates_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("orders.json"),
        r#"[{"Id":1,"UserId":2,"OrderDate":"2024-05-17T09:00:00Z","Products":[]},
            {"Id":2,"UserId":2,"OrderDate":"2024-05-18T10:00:00","Products":[]}]"#,
    )
    .unwrap();

    let orders = RecordStore::<Order>::open(dir.path()).unwrap();
    assert_eq!(orders.list().unwrap().len(), 2);
    assert!(matches!(
        orders.get(1).unwrap().unwrap().order_date,
        OrderDate::Offset(_)
    ));

    let date = NaiveDate::from_ymd_opt(2024, 5, 19)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    orders.create(Order::new(2, date, vec![])).unwrap();
    let reopened = RecordStore::<Order>::open(dir.path()).unwrap();
    let dates: Vec<_> = reopened
        .list()
        .unwrap()
        .iter()
        .map(|order| order.order_date.naive_local().to_string())
        .collect();
    assert_eq!(
        dates,
        ["2024-05-17 09:00:00", "2024-05-18 10:00:00", "2024-05-19 08:00:00"]
    );
}

#[test]
fn task_items_live_in_camel_case_file() {
    let dir = tempfile::tempdir().unwrap();
    let items = RecordStore::<TaskItem>::open(dir.path()).unwrap();
    items.create(TaskItem::new("ship", true)).unwrap();

    let text = std::fs::read_to_string(dir.path().join("taskItems.json")).unwrap();
    assert_eq!(text, r#"[{"Id":1,"Title":"ship","IsComplete":true}]"#);
}

#[test]
fn hand_written_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("taskItems.json"),
        r#"[{"Id":4,"Title":"legacy","IsComplete":false},{"Id":9,"Title":"later"}]"#,
    )
    .unwrap();

    let items = RecordStore::<TaskItem>::open(dir.path()).unwrap();
    let listed = items.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].title, "later");
    assert!(!listed[1].is_complete);
    // size + 1, regardless of the stored identifiers
    assert_eq!(items.create(TaskItem::new("new", false)).unwrap().id, 3);
}
