use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Product;
use crate::{Record, RecordId};

/// An order embeds its products by value. Nothing ties `user_id` or the
/// embedded products to the user and product stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "PascalCase", default)]
pub struct Order {
    #[serde(alias = "id")]
    pub id: RecordId,
    #[serde(alias = "userId")]
    pub user_id: RecordId,
    #[serde(alias = "orderDate")]
    pub order_date: OrderDate,
    #[serde(alias = "products")]
    pub products: Vec<Product>,
}

impl Order {
    pub fn new(
        user_id: RecordId,
        order_date: impl Into<OrderDate>,
        products: Vec<Product>,
    ) -> Self {
        Order {
            id: 0,
            user_id,
            order_date: order_date.into(),
            products,
        }
    }
}

/// Timestamp of an order, kept in whichever form it arrived.
///
/// `2024-03-01T12:30:00` stays naive; `2024-03-01T12:30:00Z` and
/// `2024-03-01T12:30:00+03:00` keep their offset. Either form is written
/// back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderDate {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl OrderDate {
    /// Wall-clock time, ignoring any offset.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            OrderDate::Naive(at) => *at,
            OrderDate::Offset(at) => at.naive_local(),
        }
    }
}

impl Default for OrderDate {
    fn default() -> Self {
        OrderDate::Naive(NaiveDateTime::default())
    }
}

impl From<NaiveDateTime> for OrderDate {
    fn from(at: NaiveDateTime) -> Self {
        OrderDate::Naive(at)
    }
}

impl From<DateTime<FixedOffset>> for OrderDate {
    fn from(at: DateTime<FixedOffset>) -> Self {
        OrderDate::Offset(at)
    }
}
