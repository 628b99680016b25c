// src/data.rs
//
// Light wrappers around the canonical catalog and its filtered views.
//
// - Catalog:     read-only holder for one loaded sheet. Never mutated after
//                load; shared between passes through Arc by the cache.
// - CatalogView: derived view produced from a Catalog by applying a
//                FilterSelection. Holds row positions, not copies.

use crate::filter::{FilterSelection, filter_indices};
use crate::listing::Listing;
use crate::wine::WineRow;

/// Authoritative, normalized wine list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    rows: Vec<WineRow>,
}

impl Catalog {
    pub fn new(rows: Vec<WineRow>) -> Self { Self { rows } }

    /// Read-only view of the rows, in sheet order.
    pub fn rows(&self) -> &[WineRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn view(&self, sel: &FilterSelection) -> CatalogView<'_> {
        CatalogView::from_selection(self, sel)
    }
}

/// Zero-copy filtered view for display.
#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    /// Positions of kept rows in the catalog
    pub row_ix: Vec<usize>,
    catalog: &'a Catalog,
}

impl<'a> CatalogView<'a> {
    pub fn from_selection(catalog: &'a Catalog, sel: &FilterSelection) -> Self {
        Self { row_ix: filter_indices(catalog.rows(), sel), catalog }
    }

    /// Number of rows in the projection.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index.
    pub fn row(&self, i: usize) -> Option<&'a WineRow> {
        self.row_ix.get(i).and_then(|&ix| self.catalog.rows().get(ix))
    }

    /// Kept rows in catalog order.
    pub fn rows(&self) -> impl Iterator<Item = &'a WineRow> + '_ {
        let rows = self.catalog.rows();
        self.row_ix.iter().map(move |&ix| &rows[ix])
    }

    /// Group the kept rows for display.
    pub fn listing(&self) -> Listing {
        Listing::build(self.rows())
    }
}
