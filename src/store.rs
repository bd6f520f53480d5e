//! Store

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    allocation::{self, AllocationOrder},
    availability::{self, NotEnoughInventory},
    basket::Basket,
    catalog::{Catalog, InvalidCatalog},
    inventory::{StockVariant, VariantInventory},
    pricing::{self, DiscountTable},
};

/// An in-memory bookstore: stock, category discounts and checkout.
#[derive(Debug, Default)]
pub struct Store {
    inventory: VariantInventory,
    discounts: DiscountTable,
    order: AllocationOrder,
}

impl Store {
    /// Create an empty store drawing variants down cheapest-first.
    #[must_use]
    pub fn new() -> Self {
        Store::default()
    }

    /// Create an empty store with an explicit allocation order.
    #[must_use]
    pub fn with_allocation_order(order: AllocationOrder) -> Self {
        Store {
            inventory: VariantInventory::new(),
            discounts: DiscountTable::new(),
            order,
        }
    }

    /// Load a catalog document into the store.
    ///
    /// The whole document validates before anything applies, so a failed
    /// import leaves the store untouched. Importing into a populated store
    /// merges stock batches and overwrites duplicate category discounts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCatalog`] carrying the document's full violation
    /// list.
    pub fn import(&mut self, document: &str) -> Result<(), InvalidCatalog> {
        let catalog = Catalog::from_json(document)?;

        for category in catalog.categories {
            self.discounts
                .set(&category.name, Percentage::from(category.discount));
        }

        for entry in catalog.entries {
            self.inventory
                .add(&entry.name, &entry.category, entry.price, entry.quantity);
        }

        Ok(())
    }

    /// Total units of a title left in stock; 0 for an unknown title.
    #[must_use]
    pub fn quantity(&self, title: &str) -> u32 {
        self.inventory.total_quantity(title)
    }

    /// The stock variants of a title, in insertion order.
    #[must_use]
    pub fn variants_of(&self, title: &str) -> &[StockVariant] {
        self.inventory.variants_of(title)
    }

    /// Buy one unit per occurrence of each title, returning the total
    /// price.
    ///
    /// # Errors
    ///
    /// Returns [`NotEnoughInventory`] listing every title short of stock;
    /// nothing is consumed in that case.
    pub fn buy<I, S>(&mut self, titles: I) -> Result<Decimal, NotEnoughInventory>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buy_basket(&Basket::from_titles(titles))
    }

    /// Buy everything in the basket, returning the total price.
    ///
    /// Validation, allocation and pricing run as one atomic step: either
    /// the whole basket is fulfilled, or the error reports every shortfall
    /// and the stock stays as it was.
    ///
    /// # Errors
    ///
    /// Returns [`NotEnoughInventory`] listing every title short of stock.
    pub fn buy_basket(&mut self, basket: &Basket) -> Result<Decimal, NotEnoughInventory> {
        availability::check(basket, &self.inventory)?;

        let lines = allocation::allocate(&mut self.inventory, basket, self.order);

        Ok(pricing::total(&lines, &self.discounts))
    }

    /// The discounts loaded from imported catalogs.
    pub fn discounts(&self) -> &DiscountTable {
        &self.discounts
    }

    /// Read access to the underlying inventory.
    pub fn inventory(&self) -> &VariantInventory {
        &self.inventory
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::availability::Shortfall;

    use super::*;

    const SMALL_CATALOG: &str = r#"{
        "Category": [
            { "Name": "Fantasy", "Discount": 0.5 }
        ],
        "Catalog": [
            { "Name": "Piranesi", "Category": "Fantasy", "Price": 8.0, "Quantity": 2 },
            { "Name": "Circe", "Category": "Fantasy", "Price": 10.0, "Quantity": 1 }
        ]
    }"#;

    #[test]
    fn import_populates_stock() -> TestResult {
        let mut store = Store::new();
        store.import(SMALL_CATALOG)?;

        assert_eq!(store.quantity("Piranesi"), 2);
        assert_eq!(store.quantity("Circe"), 1);

        Ok(())
    }

    #[test]
    fn quantity_of_unknown_title_is_zero() {
        assert_eq!(Store::new().quantity("Orlando"), 0);
    }

    #[test]
    fn buy_charges_the_discounted_total_and_consumes_stock() -> TestResult {
        let mut store = Store::new();
        store.import(SMALL_CATALOG)?;

        // Two Fantasy lines: each title's first copy at half price.
        let total = store.buy(["Piranesi", "Circe"])?;

        assert_eq!(total, dec!(9.00));
        assert_eq!(store.quantity("Piranesi"), 1);
        assert_eq!(store.quantity("Circe"), 0);

        Ok(())
    }

    #[test]
    fn failed_buy_reports_all_shortfalls_and_keeps_stock() -> TestResult {
        let mut store = Store::new();
        store.import(SMALL_CATALOG)?;

        let result = store.buy(["Piranesi", "Circe", "Circe", "Orlando"]);

        match result {
            Err(NotEnoughInventory { missing }) => {
                assert_eq!(
                    missing,
                    [
                        Shortfall {
                            title: "Circe".to_owned(),
                            missing: 1,
                        },
                        Shortfall {
                            title: "Orlando".to_owned(),
                            missing: 1,
                        },
                    ]
                );
            }
            Ok(total) => panic!("expected a shortfall report, got total {total}"),
        }

        assert_eq!(store.quantity("Piranesi"), 2);
        assert_eq!(store.quantity("Circe"), 1);

        Ok(())
    }

    #[test]
    fn empty_purchase_costs_nothing() -> TestResult {
        let mut store = Store::new();
        store.import(SMALL_CATALOG)?;

        let titles: [&str; 0] = [];

        assert_eq!(store.buy(titles)?, Decimal::ZERO);
        assert_eq!(store.quantity("Piranesi"), 2);

        Ok(())
    }

    #[test]
    fn reimport_merges_stock_and_overwrites_discounts() -> TestResult {
        let mut store = Store::new();
        store.import(SMALL_CATALOG)?;

        store.import(
            r#"{
                "Category": [
                    { "Name": "Fantasy", "Discount": 0.25 }
                ],
                "Catalog": [
                    { "Name": "Piranesi", "Category": "Fantasy", "Price": 8.0, "Quantity": 3 },
                    { "Name": "Piranesi", "Category": "Fantasy", "Price": 11.0, "Quantity": 1 }
                ]
            }"#,
        )?;

        assert_eq!(store.quantity("Piranesi"), 6);
        assert_eq!(store.variants_of("Piranesi").len(), 2);
        assert_eq!(
            store.discounts().multiplier_for("Fantasy") * dec!(8.00),
            dec!(2.00)
        );

        Ok(())
    }

    #[test]
    fn buy_basket_accepts_a_prebuilt_basket() -> TestResult {
        let mut store = Store::new();
        store.import(SMALL_CATALOG)?;

        let mut basket = Basket::new();
        basket.add_copies("Piranesi", 2);

        // A single Fantasy line pays full price.
        assert_eq!(store.buy_basket(&basket)?, dec!(16.00));
        assert_eq!(store.quantity("Piranesi"), 0);

        Ok(())
    }
}
