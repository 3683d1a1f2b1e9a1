//! Expense categories
//!
//! The planner works with a closed set of four categories. Their declaration
//! order is the order they are listed in menus and in every totals table.

use std::fmt;

use super::money::Money;

/// Classification of a trip expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Flights, trains, car hire and other transport
    FlightsTransport,
    /// Hotels, hostels, rentals
    Accommodation,
    /// Tours, tickets and activities
    Excursions,
    /// Anything else
    Miscellaneous,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::FlightsTransport,
        Category::Accommodation,
        Category::Excursions,
        Category::Miscellaneous,
    ];

    /// Position of this category in [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::FlightsTransport => 0,
            Self::Accommodation => 1,
            Self::Excursions => 2,
            Self::Miscellaneous => 3,
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::FlightsTransport => "Flights/Transport",
            Self::Accommodation => "Accommodation",
            Self::Excursions => "Excursions",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated spend for every category
///
/// Every category is present from creation, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    amounts: [Money; 4],
}

impl CategoryTotals {
    /// Create totals with every category at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Total recorded against one category
    pub fn get(&self, category: Category) -> Money {
        self.amounts[category.index()]
    }

    /// Add an amount to a category, saturating instead of overflowing
    pub fn add(&mut self, category: Category, amount: Money) {
        let slot = &mut self.amounts[category.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Iterate over `(category, total)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }

    /// Sum across all categories
    pub fn sum(&self) -> Money {
        self.amounts
            .iter()
            .fold(Money::zero(), |acc, amount| acc.saturating_add(*amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::FlightsTransport.to_string(), "Flights/Transport");
        assert_eq!(Category::Miscellaneous.to_string(), "Miscellaneous");
    }

    #[test]
    fn test_totals_start_at_zero_in_order() {
        let totals = CategoryTotals::new();
        let listed: Vec<Category> = totals.iter().map(|(c, _)| c).collect();
        assert_eq!(listed, Category::ALL.to_vec());
        assert!(totals.iter().all(|(_, amount)| amount.is_zero()));
    }

    #[test]
    fn test_totals_add() {
        let mut totals = CategoryTotals::new();
        totals.add(Category::Excursions, Money::from_cents(5_000));
        totals.add(Category::Excursions, Money::from_cents(7_500));
        totals.add(Category::Accommodation, Money::from_cents(100));

        assert_eq!(totals.get(Category::Excursions).cents(), 12_500);
        assert_eq!(totals.get(Category::FlightsTransport), Money::zero());
        assert_eq!(totals.sum().cents(), 12_600);
    }

    #[test]
    fn test_totals_saturate() {
        let mut totals = CategoryTotals::new();
        let max = Money::from_cents(i64::MAX);
        totals.add(Category::Miscellaneous, max);
        totals.add(Category::Miscellaneous, max);
        totals.add(Category::Excursions, max);

        assert_eq!(totals.get(Category::Miscellaneous), max);
        assert_eq!(totals.sum(), max);
    }
}
