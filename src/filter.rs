// src/filter.rs
//
// Filter engine: a FilterSelection is a plain value describing what the user
// picked. Matching is a pure function of (row, selection).
//
// Per dimension: empty set = no constraint, otherwise the row value must be in
// the set. Dimensions combine with AND. Grapes and price buckets are ORs inside.

use std::collections::BTreeSet;
use std::fmt;

use crate::wine::WineRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceBucket {
    Under600,
    From600To799,
    From800To999,
    From1000,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 4] = [
        PriceBucket::Under600,
        PriceBucket::From600To799,
        PriceBucket::From800To999,
        PriceBucket::From1000,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::Under600 => "<600",
            PriceBucket::From600To799 => "600-799",
            PriceBucket::From800To999 => "800-999",
            PriceBucket::From1000 => ">1000",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label.trim())
    }

    /// Literal thresholds: prices in (799, 800) and (999, 1000) fall in no bucket.
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBucket::Under600 => price < 600.0,
            PriceBucket::From600To799 => (600.0..=799.0).contains(&price),
            PriceBucket::From800To999 => (800.0..=999.0).contains(&price),
            PriceBucket::From1000 => price >= 1000.0,
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the user picked in the filter panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub countries: BTreeSet<String>,
    pub regions: BTreeSet<String>,
    pub producers: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    pub grapes: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub prices: BTreeSet<PriceBucket>,
}

fn set_of<I, T>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

fn allows(set: &BTreeSet<String>, value: &str) -> bool {
    set.is_empty() || set.contains(value)
}

impl FilterSelection {
    pub fn new() -> Self { Self::default() }

    pub fn with_countries<I: IntoIterator<Item = T>, T: Into<String>>(mut self, v: I) -> Self {
        self.countries = set_of(v);
        self
    }
    pub fn with_regions<I: IntoIterator<Item = T>, T: Into<String>>(mut self, v: I) -> Self {
        self.regions = set_of(v);
        self
    }
    pub fn with_producers<I: IntoIterator<Item = T>, T: Into<String>>(mut self, v: I) -> Self {
        self.producers = set_of(v);
        self
    }
    pub fn with_years<I: IntoIterator<Item = i32>>(mut self, v: I) -> Self {
        self.years = v.into_iter().collect();
        self
    }
    pub fn with_grapes<I: IntoIterator<Item = T>, T: Into<String>>(mut self, v: I) -> Self {
        self.grapes = set_of(v);
        self
    }
    pub fn with_sizes<I: IntoIterator<Item = T>, T: Into<String>>(mut self, v: I) -> Self {
        self.sizes = set_of(v);
        self
    }
    pub fn with_types<I: IntoIterator<Item = T>, T: Into<String>>(mut self, v: I) -> Self {
        self.types = set_of(v);
        self
    }
    pub fn with_prices<I: IntoIterator<Item = PriceBucket>>(mut self, v: I) -> Self {
        self.prices = v.into_iter().collect();
        self
    }

    /// No constraint on any dimension.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.regions.is_empty()
            && self.producers.is_empty()
            && self.years.is_empty()
            && self.grapes.is_empty()
            && self.sizes.is_empty()
            && self.types.is_empty()
            && self.prices.is_empty()
    }

    /// Number of dimensions with an active constraint.
    pub fn active_count(&self) -> usize {
        [
            self.countries.is_empty(),
            self.regions.is_empty(),
            self.producers.is_empty(),
            self.years.is_empty(),
            self.grapes.is_empty(),
            self.sizes.is_empty(),
            self.types.is_empty(),
            self.prices.is_empty(),
        ]
        .iter()
        .filter(|empty| !**empty)
        .count()
    }

    pub fn matches(&self, row: &WineRow) -> bool {
        allows(&self.countries, &row.country)
            && allows(&self.regions, &row.region)
            && allows(&self.producers, &row.producer)
            && self.matches_year(row)
            && self.matches_size(row)
            && allows(&self.types, &row.wine_type)
            && self.matches_grapes(row)
            && self.matches_price(row)
    }

    fn matches_year(&self, row: &WineRow) -> bool {
        if self.years.is_empty() { return true; }
        row.vintage.is_some_and(|y| self.years.contains(&y))
    }

    fn matches_size(&self, row: &WineRow) -> bool {
        if self.sizes.is_empty() { return true; }
        row.size.as_deref().is_some_and(|s| self.sizes.contains(s))
    }

    /// A row without grapes never matches an active grape filter.
    fn matches_grapes(&self, row: &WineRow) -> bool {
        if self.grapes.is_empty() { return true; }
        row.grapes.iter().any(|g| self.grapes.contains(g))
    }

    /// Unknown price never matches an active price filter.
    fn matches_price(&self, row: &WineRow) -> bool {
        if self.prices.is_empty() { return true; }
        match row.price {
            Some(p) => self.prices.iter().any(|b| b.contains(p)),
            None => false,
        }
    }
}

/// Positions of matching rows, in source order.
pub fn filter_indices(rows: &[WineRow], sel: &FilterSelection) -> Vec<usize> {
    if sel.is_empty() {
        return (0..rows.len()).collect();
    }
    rows.iter()
        .enumerate()
        .filter(|(_, row)| sel.matches(row))
        .map(|(i, _)| i)
        .collect()
}

/// Matching rows, in source order.
pub fn apply<'a>(rows: &'a [WineRow], sel: &FilterSelection) -> Vec<&'a WineRow> {
    rows.iter().filter(|row| sel.matches(row)).collect()
}
