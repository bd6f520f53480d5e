//! Catalog documents

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A catalog document failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid catalog: {}", .violations.join("; "))]
pub struct InvalidCatalog {
    /// Every violation found in the document, in document order.
    pub violations: Vec<String>,
}

/// A category and its discount multiplier.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryEntry {
    /// Category name.
    pub name: String,

    /// Fraction of the unit price paid for a discounted unit. Must be
    /// above 0 and at most 1.
    pub discount: Decimal,
}

/// One stock batch of the catalog.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogEntry {
    /// Book title.
    pub name: String,

    /// Category the batch belongs to.
    pub category: String,

    /// Unit price.
    pub price: Decimal,

    /// Units in stock.
    pub quantity: u32,
}

/// A parsed catalog import document.
///
/// The wire format is a JSON object with two lists:
///
/// ```json
/// {
///   "Category": [{ "Name": "Fantasy", "Discount": 0.1 }],
///   "Catalog": [
///     { "Name": "Piranesi", "Category": "Fantasy", "Price": 8.0, "Quantity": 2 }
///   ]
/// }
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct Catalog {
    /// Category discounts, in document order.
    pub categories: Vec<CategoryEntry>,

    /// Stock batches, in document order.
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// Validation covers the whole document before anything is returned:
    /// every offending element contributes one message, prefixed with its
    /// position in the document.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCatalog`] when the document is not valid JSON, the
    /// root is not an object with `Category` and `Catalog` lists, or any
    /// element is missing fields, carries wrong types or holds values out
    /// of range.
    pub fn from_json(document: &str) -> Result<Self, InvalidCatalog> {
        let root: Value = serde_json::from_str(document).map_err(|err| InvalidCatalog {
            violations: vec![format!("document is not valid JSON: {err}")],
        })?;

        let Value::Object(fields) = root else {
            return Err(InvalidCatalog {
                violations: vec!["document root must be an object".to_owned()],
            });
        };

        let mut violations = Vec::new();
        let mut categories = Vec::new();
        let mut entries = Vec::new();

        match fields.get("Category") {
            Some(Value::Array(list)) => {
                for (index, element) in list.iter().enumerate() {
                    match CategoryEntry::deserialize(element) {
                        Ok(category) if discount_in_range(category.discount) => {
                            categories.push(category);
                        }
                        Ok(category) => violations.push(format!(
                            "Category[{index}]: discount must be above 0 and at most 1, got {}",
                            category.discount
                        )),
                        Err(err) => violations.push(format!("Category[{index}]: {err}")),
                    }
                }
            }
            Some(_) => violations.push("Category must be a list".to_owned()),
            None => violations.push("Category list is missing".to_owned()),
        }

        match fields.get("Catalog") {
            Some(Value::Array(list)) => {
                for (index, element) in list.iter().enumerate() {
                    match CatalogEntry::deserialize(element) {
                        Ok(entry) => entries.push(entry),
                        Err(err) => violations.push(format!("Catalog[{index}]: {err}")),
                    }
                }
            }
            Some(_) => violations.push("Catalog must be a list".to_owned()),
            None => violations.push("Catalog list is missing".to_owned()),
        }

        if violations.is_empty() {
            Ok(Catalog { categories, entries })
        } else {
            Err(InvalidCatalog { violations })
        }
    }
}

/// Discount multipliers must sit in the half-open interval (0, 1].
fn discount_in_range(discount: Decimal) -> bool {
    discount > Decimal::ZERO && discount <= Decimal::ONE
}
