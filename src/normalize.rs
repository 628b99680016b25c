// src/normalize.rs
//
// Turns raw sheet records into WineRow values.
// Coercion never fails the load: bad cells become "unknown" (None).

use crate::wine::{RawWineRecord, WineRow};

/// Coerce a price cell to a number.
/// Accepts `650`, `650.5`, `650,5` and surrounding whitespace. Anything else is unknown.
/// A comma is a decimal comma only with one or two digits after it, so
/// thousands separators (`1,200`) stay unknown.
pub fn coerce_price(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() { return None; }

    let parsed = match t.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => decimal_comma(t),
    };
    parsed.filter(|v| v.is_finite())
}

fn decimal_comma(t: &str) -> Option<f64> {
    let (whole, frac) = t.split_once(',')?;
    let frac_ok = (1..=2).contains(&frac.len()) && frac.bytes().all(|b| b.is_ascii_digit());
    if !frac_ok || whole.is_empty() || whole.contains(['.', ',']) {
        return None;
    }
    format!("{whole}.{frac}").parse::<f64>().ok()
}

/// Coerce a vintage cell to a year. Integral floats (`2018.0`) count as years.
pub fn coerce_year(cell: &str) -> Option<i32> {
    let t = cell.trim();
    if t.is_empty() { return None; }
    if let Ok(y) = t.parse::<i32>() {
        return Some(y);
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Some(f as i32),
        _ => None,
    }
}

/// Split a comma separated grape cell into trimmed, non-empty names.
pub fn split_grapes(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

fn text(cell: Option<String>) -> String {
    cell.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn opt_text(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub fn normalize_record(raw: RawWineRecord) -> WineRow {
    WineRow {
        name: text(raw.name),
        country: text(raw.country),
        region: text(raw.region),
        producer: text(raw.producer),
        vintage: raw.vintage.as_deref().and_then(coerce_year),
        grapes: raw.grapes.as_deref().map(split_grapes).unwrap_or_default(),
        size: opt_text(raw.size),
        wine_type: text(raw.wine_type),
        price: raw.price.as_deref().and_then(coerce_price),
    }
}

/// Normalize a whole sheet. Row count and order are preserved.
pub fn normalize(records: Vec<RawWineRecord>) -> Vec<WineRow> {
    let rows: Vec<WineRow> = records.into_iter().map(normalize_record).collect();
    let unknown_prices = rows.iter().filter(|r| r.price.is_none()).count();
    if unknown_prices > 0 {
        log::debug!("Normalize: {} of {} rows have no usable price", unknown_prices, rows.len());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_plain_and_decimal_comma() {
        assert_eq!(coerce_price("650"), Some(650.0));
        assert_eq!(coerce_price(" 799.5 "), Some(799.5));
        assert_eq!(coerce_price("1200,50"), Some(1200.5));
        assert_eq!(coerce_price("649,5"), Some(649.5));
    }

    #[test]
    fn price_with_thousands_separator_is_unknown() {
        assert_eq!(coerce_price("1,200"), None);
        assert_eq!(coerce_price("12,000"), None);
        assert_eq!(coerce_price("1,200,50"), None);
        assert_eq!(coerce_price(",50"), None);

        let row = normalize_record(RawWineRecord {
            name: Some(s!("Grand Cru")),
            price: Some(s!("1,200")),
            ..RawWineRecord::default()
        });
        assert_eq!(row.price, None);
    }

    #[test]
    fn price_rejects_garbage() {
        assert_eq!(coerce_price(""), None);
        assert_eq!(coerce_price("kr. 650"), None);
        assert_eq!(coerce_price("Ring"), None);
        assert_eq!(coerce_price("1.200,00"), None);
        assert_eq!(coerce_price("NaN"), None);
        assert_eq!(coerce_price("inf"), None);
    }

    #[test]
    fn year_accepts_integral_floats_only() {
        assert_eq!(coerce_year("2018"), Some(2018));
        assert_eq!(coerce_year("2018.0"), Some(2018));
        assert_eq!(coerce_year("2018.5"), None);
        assert_eq!(coerce_year("NV"), None);
        assert_eq!(coerce_year("  "), None);
    }

    #[test]
    fn grapes_split_and_trim() {
        assert_eq!(split_grapes("Pinot Noir, Chardonnay"), vec!["Pinot Noir", "Chardonnay"]);
        assert_eq!(split_grapes(" Nebbiolo ,, "), vec!["Nebbiolo"]);
        assert!(split_grapes("").is_empty());
    }

    #[test]
    fn record_with_bad_cells_is_kept() {
        let raw = RawWineRecord {
            name: Some(s!(" Clos X ")),
            country: Some(s!("France")),
            region: None,
            producer: Some(s!("Domaine X")),
            vintage: Some(s!("NV")),
            grapes: None,
            size: Some(s!("  ")),
            wine_type: Some(s!("Rød")),
            price: Some(s!("?")),
        };
        let row = normalize_record(raw);
        assert_eq!(row.name, "Clos X");
        assert_eq!(row.region, "");
        assert_eq!(row.vintage, None);
        assert!(row.grapes.is_empty());
        assert_eq!(row.size, None);
        assert_eq!(row.price, None);
    }
}
