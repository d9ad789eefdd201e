//! Record - the structural contract between an entity type and its store.

use serde::{de::DeserializeOwned, Serialize};

/// Integer identifier carried by every record.
pub type RecordId = i64;

/// What a successful delete answers with over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReply {
    /// 200 with the remaining collection.
    Remaining,
    /// 204 with no body.
    NoContent,
}

/// Trait for types that can be kept in a [`RecordStore`](crate::RecordStore).
///
/// Usually derived with `#[derive(Record)]`. Field contents are opaque to the
/// store; it only reads and assigns the identifier and overwrites the other
/// fields on update.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular name, e.g. "Product". Used in route and operation names.
    const NAME: &'static str;

    /// Plural name, e.g. "Products".
    const PLURAL: &'static str;

    /// First path segment of this entity's routes, e.g. "products".
    const ROUTE: &'static str;

    /// Backing file name inside the data directory, e.g. "products.json".
    const FILE: &'static str;

    /// Reply shape for a successful delete.
    const DELETE_REPLY: DeleteReply = DeleteReply::Remaining;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Overwrite every field except the identifier with the values in `patch`.
    fn apply(&mut self, patch: Self);
}
