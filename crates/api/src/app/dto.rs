use serde::Deserialize;

use stockroom_inventory::ItemInput;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /items` and `PUT /items/:id`: any subset of the four item
/// fields. Which fields are required is decided by the domain validation,
/// not by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl ItemPayload {
    pub fn into_input(self) -> ItemInput {
        ItemInput {
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        }
    }
}

// -------------------------
// Query DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}
