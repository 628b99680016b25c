// src/wine.rs
//
// Row types for the wine catalog.
//
// - RawWineRecord: one CSV record as it sits in the sheet (text cells).
// - WineRow: the normalized row every other module works on.
//
// Column labels are fixed by the sheet and stay Danish at this boundary only.

use serde::Deserialize;

pub const COL_NAME: &str = "Navn";
pub const COL_NAME_ALIASES: &[&str] = &["Navn", "Name", "Vin"];
pub const COL_COUNTRY: &str = "Land";
pub const COL_REGION: &str = "Region";
pub const COL_PRODUCER: &str = "Producent";
pub const COL_VINTAGE: &str = "Årgang";
pub const COL_GRAPES: &str = "Drue(r)";
pub const COL_SIZE: &str = "Størrelse";
pub const COL_TYPE: &str = "Type";
pub const COL_PRICE: &str = "Salgspris";

/// Columns that must be present in the header row (besides one name alias).
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_COUNTRY, COL_REGION, COL_PRODUCER, COL_VINTAGE,
    COL_GRAPES, COL_SIZE, COL_TYPE, COL_PRICE,
];

/// A sheet record before normalization. Every cell is optional text.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawWineRecord {
    #[serde(rename = "Navn", alias = "Name", alias = "Vin", default)]
    pub name: Option<String>,
    #[serde(rename = "Land", default)]
    pub country: Option<String>,
    #[serde(rename = "Region", default)]
    pub region: Option<String>,
    #[serde(rename = "Producent", default)]
    pub producer: Option<String>,
    #[serde(rename = "Årgang", default)]
    pub vintage: Option<String>,
    #[serde(rename = "Drue(r)", default)]
    pub grapes: Option<String>,
    #[serde(rename = "Størrelse", default)]
    pub size: Option<String>,
    #[serde(rename = "Type", default)]
    pub wine_type: Option<String>,
    #[serde(rename = "Salgspris", default)]
    pub price: Option<String>,
}

/// One wine in the catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WineRow {
    pub name: String,
    pub country: String,
    pub region: String,
    pub producer: String,
    /// `None` when the sheet cell is empty or not a year.
    pub vintage: Option<i32>,
    /// Split and trimmed once at load time.
    pub grapes: Vec<String>,
    /// Bottle format label; `None` renders as the standard label.
    pub size: Option<String>,
    pub wine_type: String,
    /// `None` when the sheet cell is not a number.
    pub price: Option<f64>,
}
