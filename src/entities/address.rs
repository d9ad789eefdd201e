use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(rename_all = "PascalCase", default)]
#[record(plural = "Addresses")]
pub struct Address {
    #[serde(alias = "id")]
    pub id: RecordId,
    #[serde(alias = "street")]
    pub street: String,
    #[serde(alias = "city")]
    pub city: String,
    #[serde(alias = "zipCode")]
    pub zip_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Address {
            id: 0,
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
        }
    }
}
