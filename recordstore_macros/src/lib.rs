mod record;

use proc_macro::TokenStream;

/// Derive macro implementing `recordstore::Record` for a struct with named fields.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Default, Serialize, Deserialize, Record)]
/// #[record(file = "taskItems.json", delete = "no_content")]
/// pub struct TaskItem {
///     pub id: RecordId,
///     pub title: String,
///     pub is_complete: bool,
/// }
/// ```
///
/// Struct-level keys (all optional):
/// - `name`: singular name used in route and operation names (default: struct name)
/// - `plural`: plural name (default: `name` + "s")
/// - `route`: first path segment (default: lowercase plural)
/// - `file`: backing file name (default: lower camel plural + ".json")
/// - `delete`: `"remaining"` or `"no_content"` (default: remaining)
///
/// The identifier is the field marked `#[record(id)]`, or the field named `id`.
/// Every other field is overwritten by `Record::apply`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
