//! recordstore - JSON-file-backed record stores with CRUD over HTTP.
//!
//! A [`RecordStore<T>`] keeps one entity type's whole collection in memory
//! and rewrites its backing file on every mutation. The bundled
//! [`entities`] are served by the [`http`] router (requires the `http`
//! feature), with every store call wrapped by [`timed`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use recordstore::{Record, RecordId, RecordStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize, Record)]
//! #[serde(rename_all = "PascalCase", default)]
//! struct Note {
//!     id: RecordId,
//!     text: String,
//! }
//!
//! let notes = RecordStore::<Note>::open("./data")?; // ./data/notes.json
//! let note = notes.create(Note { id: 0, text: "hello".into() })?;
//! assert_eq!(note.id, 1);
//! ```

// Lets `#[derive(Record)]` refer to `recordstore::` from inside this crate.
extern crate self as recordstore;

mod catalog;
mod error;
mod logging;
mod record;
mod settings;
mod store;
mod timing;

pub mod entities;

#[cfg(feature = "http")]
pub mod http;

pub use catalog::Catalog;
pub use error::{SettingsError, StoreError};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use record::{DeleteReply, Record, RecordId};
pub use settings::Settings;
pub use store::{IdPolicy, RecordStore, StoreOptions};
pub use timing::{format_elapsed, timed, LogReporter, Outcome, Timing, TimingReporter};

// Re-export the derive macro alongside the trait it implements.
pub use recordstore_macros::Record;
