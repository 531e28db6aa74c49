use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId};

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
}

/// A fully-validated candidate record, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
}

impl NewItem {
    /// Attach the id assigned by the store.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        }
    }
}

/// The client-supplied field mapping for creation and partial update.
///
/// Every field is optional. A JSON `null` deserializes to `None` and is
/// treated the same as an absent key: on update the prior value is retained.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemInput {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// Validate a creation request and produce the candidate record.
///
/// "Missing" means absent for the numeric fields and absent-or-empty for the
/// text fields, so an explicit `quantity: 0` is a valid out-of-stock record.
/// Checks run in a fixed order: missing fields, then quantity sign, then
/// price sign.
pub fn validate_create(input: &ItemInput) -> DomainResult<NewItem> {
    let name = match input.name.as_deref() {
        Some(n) if !n.is_empty() => n,
        _ => return Err(DomainError::MissingFields),
    };
    let category = match input.category.as_deref() {
        Some(c) if !c.is_empty() => c,
        _ => return Err(DomainError::MissingFields),
    };
    let quantity = input.quantity.ok_or(DomainError::MissingFields)?;
    let price = input.price.ok_or(DomainError::MissingFields)?;

    if quantity < 0 {
        return Err(DomainError::InvalidQuantity);
    }
    if price <= 0.0 {
        return Err(DomainError::InvalidPrice);
    }

    Ok(NewItem {
        name: name.to_owned(),
        quantity,
        price,
        category: category.to_owned(),
    })
}

/// Merge a partial update into an existing record and re-check invariants.
///
/// Per field: the supplied value wins, otherwise the existing value is
/// retained. Only the numeric invariants are re-checked after merging;
/// `name`/`category` non-emptiness is a creation-time rule and an update may
/// set either to the empty string.
///
/// The caller is responsible for persisting the merged record; nothing is
/// persisted on failure.
pub fn validate_update(existing: &Item, input: &ItemInput) -> DomainResult<Item> {
    let merged = Item {
        id: existing.id,
        name: input.name.clone().unwrap_or_else(|| existing.name.clone()),
        quantity: input.quantity.unwrap_or(existing.quantity),
        price: input.price.unwrap_or(existing.price),
        category: input
            .category
            .clone()
            .unwrap_or_else(|| existing.category.clone()),
    };

    if merged.quantity < 0 {
        return Err(DomainError::InvalidQuantity);
    }
    if merged.price <= 0.0 {
        return Err(DomainError::InvalidPrice);
    }

    Ok(merged)
}
