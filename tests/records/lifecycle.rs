//! Store properties exercised through the bundled entity types.

use recordstore::entities::{Address, Product, TaskItem, User};
use recordstore::{IdPolicy, Record, RecordStore, StoreOptions};

#[test]
fn create_then_get_returns_created_record() {
    let dir = tempfile::tempdir().unwrap();
    let users = RecordStore::<User>::open(dir.path()).unwrap();

    let created = users
        .create(User::new("ann", "ann@example.com", "secret"))
        .unwrap();
    let fetched = users.get(created.id).unwrap().unwrap();

    let mut expected = User::new("ann", "ann@example.com", "secret");
    expected.set_id(1);
    assert_eq!(fetched, expected);
    assert_eq!(fetched, created);
}

#[test]
fn create_grows_list_by_one() {
    let dir = tempfile::tempdir().unwrap();
    let addresses = RecordStore::<Address>::open(dir.path()).unwrap();
    addresses
        .create(Address::new("Main St 1", "Springfield", "12345"))
        .unwrap();
    let before = addresses.list().unwrap().len();

    let created = addresses
        .create(Address::new("Elm St 2", "Shelbyville", "54321"))
        .unwrap();

    let after = addresses.list().unwrap();
    assert_eq!(after.len(), before + 1);
    assert!(after.contains(&created));
}

#[test]
fn missing_ids_leave_collection_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let items = RecordStore::<TaskItem>::open(dir.path()).unwrap();
    items.create(TaskItem::new("write tests", false)).unwrap();
    let before = items.list().unwrap();

    assert!(items.update(5, TaskItem::new("ghost", true)).unwrap().is_none());
    assert!(items.delete(5).unwrap().is_none());
    assert_eq!(items.list().unwrap(), before);
}

#[test]
fn deleted_record_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let products = RecordStore::<Product>::open(dir.path()).unwrap();
    let pen = products.create(Product::new("Pen", 1.5, "Stationery")).unwrap();

    assert_eq!(products.delete(pen.id).unwrap().unwrap(), Vec::new());
    assert!(products.get(pen.id).unwrap().is_none());
}

#[test]
fn reopened_store_matches_persisted_collection() {
    let dir = tempfile::tempdir().unwrap();
    let written = {
        let products = RecordStore::<Product>::open(dir.path()).unwrap();
        products.create(Product::new("Pen", 1.5, "Stationery")).unwrap();
        products.create(Product::new("Mug", 8.0, "Kitchen")).unwrap();
        products.update(1, Product::new("Fountain Pen", 12.0, "Stationery")).unwrap();
        products.list().unwrap()
    };

    let reopened = RecordStore::<Product>::open(dir.path()).unwrap();
    assert_eq!(reopened.list().unwrap(), written);
}

#[test]
fn identifier_reuse_after_deleting_the_last_record() {
    let dir = tempfile::tempdir().unwrap();
    let products = RecordStore::<Product>::open(dir.path()).unwrap();
    products.create(Product::new("A", 1.0, "x")).unwrap();
    products.create(Product::new("B", 2.0, "x")).unwrap();
    products.delete(2).unwrap();

    let again = products.create(Product::new("C", 3.0, "x")).unwrap();
    assert_eq!(again.id, 2);
}

#[test]
fn monotonic_policy_skips_deleted_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let options = StoreOptions {
        id_policy: IdPolicy::Monotonic,
        ..StoreOptions::default()
    };
    let products = RecordStore::<Product>::open_with(dir.path(), options).unwrap();
    products.create(Product::new("A", 1.0, "x")).unwrap();
    products.create(Product::new("B", 2.0, "x")).unwrap();
    products.delete(2).unwrap();

    let next = products.create(Product::new("C", 3.0, "x")).unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn two_cached_stores_on_one_file_do_not_see_each_other() {
    let dir = tempfile::tempdir().unwrap();
    let first = RecordStore::<Product>::open(dir.path()).unwrap();
    let second = RecordStore::<Product>::open(dir.path()).unwrap();

    first.create(Product::new("A", 1.0, "x")).unwrap();
    // `second` rewrites the file from its own stale cache.
    let clobbering = second.create(Product::new("B", 2.0, "x")).unwrap();

    assert_eq!(clobbering.id, 1);
    let on_disk = RecordStore::<Product>::open(dir.path()).unwrap();
    assert_eq!(on_disk.list().unwrap(), vec![clobbering]);
}

#[test]
fn reload_mode_stores_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = StoreOptions {
        reload_each_operation: true,
        ..StoreOptions::default()
    };
    let first = RecordStore::<Product>::open_with(dir.path(), options.clone()).unwrap();
    let second = RecordStore::<Product>::open_with(dir.path(), options).unwrap();

    first.create(Product::new("A", 1.0, "x")).unwrap();
    let b = second.create(Product::new("B", 2.0, "x")).unwrap();

    assert_eq!(b.id, 2);
    assert_eq!(first.list().unwrap().len(), 2);
}

#[test]
fn concurrent_creates_on_one_store_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let products = std::sync::Arc::new(RecordStore::<Product>::open(dir.path()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let products = products.clone();
            std::thread::spawn(move || {
                products
                    .create(Product::new(format!("P{}", i), i as f64, "bulk"))
                    .unwrap()
                    .id
            })
        })
        .collect();
    let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();

    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    let reopened = RecordStore::<Product>::open(dir.path()).unwrap();
    assert_eq!(reopened.list().unwrap().len(), 8);
}
