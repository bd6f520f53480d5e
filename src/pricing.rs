//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::allocation::PurchaseLine;

/// Discount multipliers keyed by category.
///
/// A multiplier is the fraction of the unit price actually paid for a
/// discounted unit: 0.1 means the first copy sells for 10% of its price.
/// Categories without an entry pay full price.
#[derive(Debug, Default)]
pub struct DiscountTable {
    multipliers: FxHashMap<String, Percentage>,
}

impl DiscountTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        DiscountTable {
            multipliers: FxHashMap::default(),
        }
    }

    /// Set a category's multiplier, replacing any earlier value.
    pub fn set(&mut self, category: &str, multiplier: Percentage) {
        self.multipliers.insert(category.to_owned(), multiplier);
    }

    /// The multiplier for a category's discountable unit; 1 when the
    /// category carries no discount.
    #[must_use]
    pub fn multiplier_for(&self, category: &str) -> Percentage {
        self.multipliers
            .get(category)
            .copied()
            .unwrap_or_else(|| Percentage::from(Decimal::ONE))
    }

    /// Number of categories with a discount.
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Check whether any category is discounted.
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

/// Total price of one purchase's lines under the category discount rules.
///
/// Lines are grouped by category, groups ordered by first appearance. A
/// category reached by a single line charges every unit at full price. In
/// a group with several lines, the chronologically first line of each
/// distinct title sells its first unit at the category's multiplier and
/// everything else sells at full price. A title can therefore get at most
/// one discounted unit per purchase, however many variant lines it spans.
///
/// The result carries the full precision of the unit prices; nothing is
/// rounded.
#[must_use]
pub fn total(lines: &[PurchaseLine], discounts: &DiscountTable) -> Decimal {
    // A title's first line is the only one allowed to carry its
    // discountable unit; it always holds at least one unit.
    let mut first_line_of: FxHashMap<&str, usize> = FxHashMap::default();

    for (index, line) in lines.iter().enumerate() {
        first_line_of.entry(line.title.as_str()).or_insert(index);
    }

    let mut groups: Vec<(&str, Vec<(usize, &PurchaseLine)>)> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let category = line.category.as_str();

        match groups.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, members)) => members.push((index, line)),
            None => groups.push((category, vec![(index, line)])),
        }
    }

    let mut total = Decimal::ZERO;

    for (category, members) in &groups {
        let single_line = members.len() == 1;
        let multiplier = discounts.multiplier_for(category);

        for &(index, line) in members {
            let quantity = Decimal::from(line.quantity);

            let takes_discount =
                !single_line && first_line_of.get(line.title.as_str()) == Some(&index);

            total += if takes_discount {
                multiplier * line.unit_price + (quantity - Decimal::ONE) * line.unit_price
            } else {
                quantity * line.unit_price
            };
        }
    }

    total
}
