//! Inventory

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// One priced, categorised batch of a title's stock.
#[derive(Clone, Debug, PartialEq)]
pub struct StockVariant {
    category: String,
    unit_price: Decimal,
    remaining: u32,
}

impl StockVariant {
    /// Category the batch belongs to.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Price of a single unit from this batch.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Units left in this batch. Always at least one while the variant is
    /// stored; drained variants are removed rather than kept at zero.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Stock keyed by title, with one entry per `(category, price)` batch.
///
/// A title may hold several variants (say, a paperback and a special
/// edition at different prices); they keep the order they were added in.
#[derive(Debug, Default)]
pub struct VariantInventory {
    titles: FxHashMap<String, SmallVec<[StockVariant; 2]>>,
}

impl VariantInventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        VariantInventory {
            titles: FxHashMap::default(),
        }
    }

    /// Add stock for a title.
    ///
    /// A batch matching an existing variant's category and price merges
    /// into it by summing quantities; anything else is appended as a new
    /// variant. Adding zero units stores nothing.
    pub fn add(&mut self, title: &str, category: &str, unit_price: Decimal, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let variants = self.titles.entry(title.to_owned()).or_default();

        if let Some(variant) = variants
            .iter_mut()
            .find(|variant| variant.category == category && variant.unit_price == unit_price)
        {
            variant.remaining += quantity;
        } else {
            variants.push(StockVariant {
                category: category.to_owned(),
                unit_price,
                remaining: quantity,
            });
        }
    }

    /// Total units of a title across all of its variants; 0 if unknown.
    #[must_use]
    pub fn total_quantity(&self, title: &str) -> u32 {
        self.titles
            .get(title)
            .map_or(0, |variants| variants.iter().map(StockVariant::remaining).sum())
    }

    /// The variants of a title in insertion order; empty if unknown.
    #[must_use]
    pub fn variants_of(&self, title: &str) -> &[StockVariant] {
        self.titles
            .get(title)
            .map_or(&[], |variants| variants.as_slice())
    }

    /// Take `amount` units out of the exact variant identified by category
    /// and price.
    ///
    /// Fails (returning `false`, with nothing changed) when no such variant
    /// exists or it holds fewer than `amount` units. A variant drained to
    /// zero is removed, and the title's entry with it once no variants are
    /// left.
    pub fn try_decrease(
        &mut self,
        title: &str,
        category: &str,
        unit_price: Decimal,
        amount: u32,
    ) -> bool {
        let Some(variants) = self.titles.get_mut(title) else {
            return false;
        };

        let Some((index, variant)) = variants
            .iter_mut()
            .enumerate()
            .find(|(_, variant)| variant.category == category && variant.unit_price == unit_price)
        else {
            return false;
        };

        if amount > variant.remaining {
            return false;
        }

        variant.remaining -= amount;

        if variant.remaining == 0 {
            variants.remove(index);

            if variants.is_empty() {
                self.titles.remove(title);
            }
        }

        true
    }

    /// Iterate over all known titles, in no particular order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.keys().map(String::as_str)
    }

    /// Number of titles with stock left.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check whether any stock is left at all.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
