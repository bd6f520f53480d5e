//! Checkout Example
//!
//! Imports a catalog document, buys the given titles as one basket and
//! prints the total alongside the remaining stock.
//!
//! Use `-c` to point at a catalog JSON file
//! Use `-o` to pick the allocation order (`cheapest-first` or `insertion`)

use std::fs;

use anyhow::Result;
use clap::Parser;

use folio::{allocation::AllocationOrder, store::Store, utils::CheckoutArgs};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = CheckoutArgs::parse();

    let order: AllocationOrder = args.order.parse().map_err(anyhow::Error::msg)?;

    let document = fs::read_to_string(&args.catalog)?;

    let mut store = Store::with_allocation_order(order);
    store.import(&document)?;

    let total = match store.buy(&args.titles) {
        Ok(total) => total,
        Err(report) => {
            for shortfall in &report.missing {
                println!("missing {} x {}", shortfall.missing, shortfall.title);
            }

            return Err(report.into());
        }
    };

    println!("Total: {total}");

    let mut seen: Vec<&String> = Vec::new();

    for title in &args.titles {
        if !seen.contains(&title) {
            seen.push(title);
            println!("{title}: {} left in stock", store.quantity(title));
        }
    }

    Ok(())
}
