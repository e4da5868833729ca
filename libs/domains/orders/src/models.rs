use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    /// Id of the product as shown in the catalog; not checked
    pub product_id: String,
    pub title: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A checkout submission, stored exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Order {
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[validate(length(min = 1))]
    pub shipping_address: String,
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItem>,
    /// Total as submitted by the client; never recomputed
    #[validate(range(min = 0.0))]
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Response to a successful order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderCreated {
    #[schema(example = "665f1c2e9b1e8a3d4c2b1a10")]
    pub id: String,
    #[schema(example = "created")]
    pub status: String,
}

impl OrderCreated {
    pub fn new(id: String) -> Self {
        Self {
            id,
            status: "created".to_string(),
        }
    }
}
