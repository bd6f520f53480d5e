//! Allocation

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::{
    basket::Basket,
    inventory::{StockVariant, VariantInventory},
};

/// The order in which a title's variants are drawn down.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AllocationOrder {
    /// Cheapest variant first; ties keep insertion order.
    #[default]
    CheapestFirst,

    /// Variants in the order they were added to the inventory.
    Insertion,
}

impl FromStr for AllocationOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cheapest" | "cheapest-first" => Ok(AllocationOrder::CheapestFirst),
            "insertion" => Ok(AllocationOrder::Insertion),
            other => Err(format!("unknown allocation order: {other}")),
        }
    }
}

impl fmt::Display for AllocationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationOrder::CheapestFirst => write!(f, "cheapest-first"),
            AllocationOrder::Insertion => write!(f, "insertion"),
        }
    }
}

/// Units drawn from one stock variant during a purchase.
#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseLine {
    /// Purchased title.
    pub title: String,

    /// Category of the variant the units came from.
    pub category: String,

    /// Unit price of that variant.
    pub unit_price: Decimal,

    /// Units taken from that variant. Zero when the title was already
    /// satisfied exactly at the previous variant's boundary.
    pub quantity: u32,
}

/// Draw the basket's units out of the inventory.
///
/// The caller must have checked availability first; every title is taken
/// to be fully satisfiable. Titles are processed in basket order, each
/// consuming its variants in `order` until the requested quantity is met.
/// Returns one line per variant drawn on, in consumption order.
pub fn allocate(
    inventory: &mut VariantInventory,
    basket: &Basket,
    order: AllocationOrder,
) -> Vec<PurchaseLine> {
    let mut lines = Vec::new();

    for (title, requested) in basket.iter() {
        let mut variants: Vec<StockVariant> = inventory.variants_of(title).to_vec();

        if order == AllocationOrder::CheapestFirst {
            variants.sort_by_key(StockVariant::unit_price);
        }

        let mut need = requested;

        for variant in variants {
            let taken = variant.remaining().min(need);

            let consumed =
                inventory.try_decrease(title, variant.category(), variant.unit_price(), taken);
            debug_assert!(consumed, "validated stock vanished for {title}");

            lines.push(PurchaseLine {
                title: title.to_owned(),
                category: variant.category().to_owned(),
                unit_price: variant.unit_price(),
                quantity: taken,
            });

            need -= taken;

            // A variant that still has units left was only partially
            // needed, so this title is done.
            if taken < variant.remaining() {
                break;
            }
        }

        debug_assert_eq!(need, 0, "basket entry for {title} was not fully allocated");
    }

    lines
}
