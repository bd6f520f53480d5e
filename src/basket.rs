//! Basket

/// An ordered multiset of titles to buy in one transaction.
///
/// Repeating a title raises its count; distinct titles keep the order of
/// their first occurrence, which is also the order availability problems
/// are reported in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Basket {
    lines: Vec<(String, u32)>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Basket { lines: Vec::new() }
    }

    /// Build a basket from one title per requested unit.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut basket = Basket::new();

        for title in titles {
            basket.add(title.as_ref());
        }

        basket
    }

    /// Request one more unit of a title.
    pub fn add(&mut self, title: &str) {
        self.add_copies(title, 1);
    }

    /// Request `copies` more units of a title. Zero copies change nothing.
    pub fn add_copies(&mut self, title: &str, copies: u32) {
        if copies == 0 {
            return;
        }

        if let Some((_, quantity)) = self
            .lines
            .iter_mut()
            .find(|(existing, _)| existing.as_str() == title)
        {
            *quantity += copies;
        } else {
            self.lines.push((title.to_owned(), copies));
        }
    }

    /// Units requested for a title; 0 if the basket does not hold it.
    #[must_use]
    pub fn quantity_of(&self, title: &str) -> u32 {
        self.lines
            .iter()
            .find(|(existing, _)| existing.as_str() == title)
            .map_or(0, |(_, quantity)| *quantity)
    }

    /// Iterate over `(title, requested units)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.lines
            .iter()
            .map(|(title, quantity)| (title.as_str(), *quantity))
    }

    /// Number of distinct titles in the basket.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the basket holds anything.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units requested across all titles.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|(_, quantity)| quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_titles_collapses_duplicates_in_first_occurrence_order() {
        let basket = Basket::from_titles(["b", "a", "b", "c", "a", "b"]);

        let lines: Vec<(&str, u32)> = basket.iter().collect();

        assert_eq!(lines, [("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn add_copies_accumulates() {
        let mut basket = Basket::new();

        basket.add("a");
        basket.add_copies("a", 2);

        assert_eq!(basket.quantity_of("a"), 3);
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn add_zero_copies_creates_no_entry() {
        let mut basket = Basket::new();

        basket.add_copies("a", 0);

        assert!(basket.is_empty());
        assert_eq!(basket.quantity_of("a"), 0);
    }

    #[test]
    fn quantity_of_unknown_title_is_zero() {
        let basket = Basket::from_titles(["a"]);

        assert_eq!(basket.quantity_of("b"), 0);
    }

    #[test]
    fn total_units_counts_every_occurrence() {
        let basket = Basket::from_titles(["a", "b", "a"]);

        assert_eq!(basket.total_units(), 3);
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn is_empty() {
        assert!(Basket::new().is_empty());
        assert!(!Basket::from_titles(["a"]).is_empty());
    }
}
