//! Catalog - the five entity stores opened against one data directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::entities::{Address, Order, Product, TaskItem, User};
use crate::error::StoreError;
use crate::store::{RecordStore, StoreOptions};

/// Every bundled entity store, sharing one data directory and one set of options.
///
/// Clone-friendly via Arc.
#[derive(Debug, Clone)]
pub struct Catalog {
    data_dir: PathBuf,
    products: Arc<RecordStore<Product>>,
    users: Arc<RecordStore<User>>,
    orders: Arc<RecordStore<Order>>,
    addresses: Arc<RecordStore<Address>>,
    task_items: Arc<RecordStore<TaskItem>>,
}

impl Catalog {
    /// Open (and create where missing) every backing file in `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>, options: StoreOptions) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        Ok(Catalog {
            data_dir: data_dir.to_path_buf(),
            products: Arc::new(RecordStore::open_with(data_dir, options.clone())?),
            users: Arc::new(RecordStore::open_with(data_dir, options.clone())?),
            orders: Arc::new(RecordStore::open_with(data_dir, options.clone())?),
            addresses: Arc::new(RecordStore::open_with(data_dir, options.clone())?),
            task_items: Arc::new(RecordStore::open_with(data_dir, options)?),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn products(&self) -> &Arc<RecordStore<Product>> {
        &self.products
    }

    pub fn users(&self) -> &Arc<RecordStore<User>> {
        &self.users
    }

    pub fn orders(&self) -> &Arc<RecordStore<Order>> {
        &self.orders
    }

    pub fn addresses(&self) -> &Arc<RecordStore<Address>> {
        &self.addresses
    }

    pub fn task_items(&self) -> &Arc<RecordStore<TaskItem>> {
        &self.task_items
    }
}
