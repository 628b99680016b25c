// src/facets.rs
//! Facet extraction: the distinct values offered for each filter dimension.
//!
//! Region and producer are cascading facets. Their candidates are computed
//! from the rows still reachable through the parent selections:
//!
//! ```text
//! region   ← rows in selected countries (all rows if none)
//! producer ← rows in selected regions, else selected countries, else all rows
//! ```
//!
//! Vintage sorts newest first; every other facet sorts ascending.

use std::collections::BTreeSet;
use std::fmt;

use crate::filter::FilterSelection;
use crate::wine::WineRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Country,
    Region,
    Producer,
    Vintage,
    Grape,
    Size,
    Type,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Country,
        Dimension::Region,
        Dimension::Producer,
        Dimension::Vintage,
        Dimension::Grape,
        Dimension::Size,
        Dimension::Type,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Country => "Country",
            Dimension::Region => "Region",
            Dimension::Producer => "Producer",
            Dimension::Vintage => "Vintage",
            Dimension::Grape => "Grape",
            Dimension::Size => "Size",
            Dimension::Type => "Type",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn distinct<'a, I, F>(rows: I, pick: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a WineRow>,
    F: Fn(&'a WineRow) -> Option<&'a str>,
{
    let set: BTreeSet<&str> = rows
        .into_iter()
        .filter_map(pick)
        .filter(|v| !v.is_empty())
        .collect();
    set.into_iter().map(String::from).collect()
}

/// Distinct known vintages, newest first.
pub fn vintage_years<'a, I>(rows: I) -> Vec<i32>
where
    I: IntoIterator<Item = &'a WineRow>,
{
    let set: BTreeSet<i32> = rows.into_iter().filter_map(|r| r.vintage).collect();
    set.into_iter().rev().collect()
}

/// Distinct grape names across all rows (rows may carry several).
pub fn grape_names<'a, I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a WineRow>,
{
    let set: BTreeSet<&str> = rows
        .into_iter()
        .flat_map(|r| r.grapes.iter().map(String::as_str))
        .collect();
    set.into_iter().map(String::from).collect()
}

/// Sorted distinct non-missing values of one dimension.
pub fn facet_values<'a, I>(rows: I, dim: Dimension) -> Vec<String>
where
    I: IntoIterator<Item = &'a WineRow>,
{
    match dim {
        Dimension::Country => distinct(rows, |r| Some(r.country.as_str())),
        Dimension::Region => distinct(rows, |r| Some(r.region.as_str())),
        Dimension::Producer => distinct(rows, |r| Some(r.producer.as_str())),
        Dimension::Size => distinct(rows, |r| r.size.as_deref()),
        Dimension::Type => distinct(rows, |r| Some(r.wine_type.as_str())),
        Dimension::Grape => grape_names(rows),
        Dimension::Vintage => vintage_years(rows).into_iter().map(|y| y.to_string()).collect(),
    }
}

/// Regions reachable from the selected countries.
pub fn region_candidates(rows: &[WineRow], sel: &FilterSelection) -> Vec<String> {
    let scoped = rows
        .iter()
        .filter(|r| sel.countries.is_empty() || sel.countries.contains(&r.country));
    facet_values(scoped, Dimension::Region)
}

/// Producers reachable from the selected regions, or failing that the selected countries.
pub fn producer_candidates(rows: &[WineRow], sel: &FilterSelection) -> Vec<String> {
    let scoped = rows.iter().filter(|r| {
        if !sel.regions.is_empty() {
            sel.regions.contains(&r.region)
        } else if !sel.countries.is_empty() {
            sel.countries.contains(&r.country)
        } else {
            true
        }
    });
    facet_values(scoped, Dimension::Producer)
}

/// Every candidate list the filter panel shows, for one selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub countries: Vec<String>,
    pub regions: Vec<String>,
    pub producers: Vec<String>,
    pub years: Vec<i32>,
    pub grapes: Vec<String>,
    pub sizes: Vec<String>,
    pub types: Vec<String>,
}

impl FacetOptions {
    pub fn cascade(rows: &[WineRow], sel: &FilterSelection) -> Self {
        Self {
            countries: facet_values(rows, Dimension::Country),
            regions: region_candidates(rows, sel),
            producers: producer_candidates(rows, sel),
            years: vintage_years(rows),
            grapes: grape_names(rows),
            sizes: facet_values(rows, Dimension::Size),
            types: facet_values(rows, Dimension::Type),
        }
    }

    /// Candidate values of one dimension, as text.
    pub fn values(&self, dim: Dimension) -> Vec<String> {
        match dim {
            Dimension::Country => self.countries.clone(),
            Dimension::Region => self.regions.clone(),
            Dimension::Producer => self.producers.clone(),
            Dimension::Vintage => self.years.iter().map(|y| y.to_string()).collect(),
            Dimension::Grape => self.grapes.clone(),
            Dimension::Size => self.sizes.clone(),
            Dimension::Type => self.types.clone(),
        }
    }

    /// Cascade with stale picks removed (e.g. a region of a country that was
    /// just deselected). Top down: regions are checked against the selected
    /// countries first, then producers against what is left.
    pub fn settle(rows: &[WineRow], sel: &FilterSelection) -> (Self, FilterSelection) {
        let mut sel = sel.clone();

        let regions = region_candidates(rows, &sel);
        sel.regions.retain(|r| regions.contains(r));

        let producers = producer_candidates(rows, &sel);
        sel.producers.retain(|p| producers.contains(p));

        (Self::cascade(rows, &sel), sel)
    }
}
