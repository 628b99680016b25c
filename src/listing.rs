// src/listing.rs
//! Grouping & rendering of filtered wines.
//!
//! Rows are grouped country → region → producer. Each level keeps the order in
//! which its keys first appear among the filtered rows; nothing is sorted and
//! no row is dropped. Every row becomes one [`WineEntry`] display record.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use crate::config::consts::{DEFAULT_SIZE_LABEL, NO_MATCHES, UNKNOWN_GROUP_LABEL};
use crate::wine::WineRow;

/// Display record for one wine. All fields are ready-to-print text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WineEntry {
    /// Year, or blank if unknown
    pub vintage: String,
    pub name: String,
    /// Grapes joined with ", ", or blank
    pub grapes: String,
    /// Bottle size, falling back to the standard label
    pub size: String,
    /// Whole-number price (truncated), or blank if unknown
    pub price: String,
}

impl WineEntry {
    pub fn from_row(row: &WineRow) -> Self {
        Self {
            vintage: row.vintage.map(|y| y.to_string()).unwrap_or_default(),
            name: row.name.clone(),
            grapes: row.grapes.join(", "),
            size: row.size.clone().unwrap_or_else(|| s!(DEFAULT_SIZE_LABEL)),
            price: row.price.map(format_price).unwrap_or_default(),
        }
    }
}

/// Truncate toward zero; no rounding.
fn format_price(price: f64) -> String {
    format!("{}", price.trunc() as i64)
}

impl fmt::Display for WineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {} — {}",
            self.vintage, self.name, self.grapes, self.size, self.price
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProducerGroup {
    pub producer: String,
    pub wines: Vec<WineEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionGroup {
    pub region: String,
    pub producers: Vec<ProducerGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryGroup {
    pub country: String,
    pub regions: Vec<RegionGroup>,
}

/// Header text for a group key; empty sheet cells get a placeholder.
pub fn group_label(key: &str) -> &str {
    if key.is_empty() { UNKNOWN_GROUP_LABEL } else { key }
}

/// Position of `key` in `groups`, appending a fresh group on first sight.
fn slot<G>(
    index: &mut HashMap<String, usize>,
    groups: &mut Vec<G>,
    key: &str,
    make: impl FnOnce() -> G,
) -> usize {
    if let Some(&i) = index.get(key) {
        return i;
    }
    groups.push(make());
    let i = groups.len() - 1;
    index.insert(s!(key), i);
    i
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub countries: Vec<CountryGroup>,
}

impl Listing {
    pub fn build<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a WineRow>,
    {
        let mut countries: Vec<CountryGroup> = Vec::new();
        let mut country_ix: HashMap<String, usize> = HashMap::new();
        // Nested indices, keyed by the parent group's position
        let mut region_ix: HashMap<usize, HashMap<String, usize>> = HashMap::new();
        let mut producer_ix: HashMap<(usize, usize), HashMap<String, usize>> = HashMap::new();

        for row in rows {
            let ci = slot(&mut country_ix, &mut countries, &row.country, || CountryGroup {
                country: row.country.clone(),
                regions: Vec::new(),
            });
            let country = &mut countries[ci];

            let ri = slot(region_ix.entry(ci).or_default(), &mut country.regions, &row.region, || {
                RegionGroup { region: row.region.clone(), producers: Vec::new() }
            });
            let region = &mut country.regions[ri];

            let pi = slot(
                producer_ix.entry((ci, ri)).or_default(),
                &mut region.producers,
                &row.producer,
                || ProducerGroup { producer: row.producer.clone(), wines: Vec::new() },
            );
            region.producers[pi].wines.push(WineEntry::from_row(row));
        }

        Self { countries }
    }

    pub fn is_empty(&self) -> bool { self.countries.is_empty() }

    pub fn wine_count(&self) -> usize {
        self.entries().count()
    }

    /// Every entry in display order.
    pub fn entries(&self) -> impl Iterator<Item = &WineEntry> {
        self.countries
            .iter()
            .flat_map(|c| c.regions.iter())
            .flat_map(|r| r.producers.iter())
            .flat_map(|p| p.wines.iter())
    }

    /// Plain-text rendering: one header line per group level, one line per wine.
    pub fn render_text(&self) -> String {
        if self.is_empty() {
            return join!(NO_MATCHES, "\n");
        }

        let mut out = s!();
        for c in &self.countries {
            let _ = writeln!(out, "{}", group_label(&c.country));
            for r in &c.regions {
                let _ = writeln!(out, "  {}", group_label(&r.region));
                for p in &r.producers {
                    let _ = writeln!(out, "    {}", group_label(&p.producer));
                    for w in &p.wines {
                        let _ = writeln!(out, "      {}", w);
                    }
                }
            }
        }
        out
    }
}
