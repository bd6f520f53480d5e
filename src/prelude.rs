//! Folio prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    allocation::{AllocationOrder, PurchaseLine},
    availability::{NotEnoughInventory, Shortfall},
    basket::Basket,
    catalog::{Catalog, CatalogEntry, CategoryEntry, InvalidCatalog},
    inventory::{StockVariant, VariantInventory},
    pricing::DiscountTable,
    store::Store,
};
