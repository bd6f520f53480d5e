//! Utils

use clap::Parser;

/// Arguments for the checkout example
#[derive(Debug, Parser)]
pub struct CheckoutArgs {
    /// Path to the catalog JSON document to import
    #[clap(short, long)]
    pub catalog: String,

    /// Order in which a title's variants are drawn down
    #[clap(short, long, default_value = "cheapest-first")]
    pub order: String,

    /// Titles to buy, one basket entry per occurrence
    pub titles: Vec<String>,
}
