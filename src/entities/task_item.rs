use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

/// A to-do entry. Deleting one answers 204 with no body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(rename_all = "PascalCase", default)]
#[record(delete = "no_content")]
pub struct TaskItem {
    #[serde(alias = "id")]
    pub id: RecordId,
    #[serde(alias = "title")]
    pub title: String,
    #[serde(alias = "isComplete")]
    pub is_complete: bool,
}

impl TaskItem {
    pub fn new(title: impl Into<String>, is_complete: bool) -> Self {
        TaskItem {
            id: 0,
            title: title.into(),
            is_complete,
        }
    }
}
