use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(rename_all = "PascalCase", default)]
pub struct User {
    #[serde(alias = "id")]
    pub id: RecordId,
    #[serde(alias = "username")]
    pub username: String,
    #[serde(alias = "email")]
    pub email: String,
    #[serde(alias = "password")]
    pub password: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        User {
            id: 0,
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
