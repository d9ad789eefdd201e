use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "PascalCase", default)]
pub struct Product {
    #[serde(alias = "id")]
    pub id: RecordId,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "price")]
    pub price: f64,
    #[serde(alias = "category")]
    pub category: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Product {
            id: 0,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}
