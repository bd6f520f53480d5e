//! Availability

use thiserror::Error;

use crate::{basket::Basket, inventory::VariantInventory};

/// A requested title the inventory cannot fully supply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortfall {
    /// The title that ran short.
    pub title: String,

    /// Units requested beyond what is in stock.
    pub missing: u32,
}

/// One or more requested titles cannot be fully supplied.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not enough inventory for {} of the requested titles", .missing.len())]
pub struct NotEnoughInventory {
    /// Every title that ran short, in basket first-occurrence order.
    pub missing: Vec<Shortfall>,
}

/// Check a basket against the inventory without touching it.
///
/// # Errors
///
/// Returns [`NotEnoughInventory`] listing every title whose requested
/// quantity exceeds its total stock, each with the exact deficit. Titles
/// that can be supplied never appear in the report.
pub fn check(basket: &Basket, inventory: &VariantInventory) -> Result<(), NotEnoughInventory> {
    let missing: Vec<Shortfall> = basket
        .iter()
        .filter_map(|(title, requested)| {
            let available = inventory.total_quantity(title);

            (available < requested).then(|| Shortfall {
                title: title.to_owned(),
                missing: requested - available,
            })
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(NotEnoughInventory { missing })
    }
}
