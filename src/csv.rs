// src/csv.rs
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::SourceError;
use crate::wine::{COL_NAME, COL_NAME_ALIASES, REQUIRED_COLUMNS, RawWineRecord};

/* ---------------- Header checks ---------------- */

/// Verify the sheet exposes every column we rely on.
/// Extra columns are fine; the sheet carries purchase notes etc.
pub fn check_headers(headers: &StringRecord) -> Result<(), SourceError> {
    let has = |label: &str| headers.iter().any(|h| h.trim() == label);

    if name_column(headers).is_none() {
        return Err(SourceError::MissingColumn(s!(COL_NAME)));
    }
    for col in REQUIRED_COLUMNS {
        if !has(col) {
            return Err(SourceError::MissingColumn(s!(*col)));
        }
    }
    Ok(())
}

/// The wine name column: the first alias present, in alias order.
pub fn name_column(headers: &StringRecord) -> Option<&'static str> {
    COL_NAME_ALIASES
        .iter()
        .copied()
        .find(|alias| headers.iter().any(|h| h.trim() == *alias))
}

/// Headers with every name alias except `keep` renamed out of the way,
/// so a sheet carrying both `Navn` and `Name` reads only one of them.
fn single_name_column(headers: &StringRecord, keep: &str) -> StringRecord {
    headers
        .iter()
        .map(|h| {
            if h != keep && COL_NAME_ALIASES.iter().any(|a| *a == h) {
                format!("{h} (unused)")
            } else {
                s!(h)
            }
        })
        .collect()
}

/* ---------------- Parsing ---------------- */

/// Parse the CSV export of the sheet into raw records.
/// Quotes, CRLF and ragged rows are tolerated; fully blank rows are skipped.
pub fn parse_records(text: &str) -> Result<Vec<RawWineRecord>, SourceError> {
    // Sheets exports may lead with a UTF-8 BOM
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;
    let headers = match name_column(&headers) {
        Some(keep) => single_name_column(&headers, keep),
        None => headers,
    };

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) { continue; }
        let raw: RawWineRecord = record.deserialize(Some(&headers))?;
        out.push(raw);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Navn,Land,Region,Producent,Årgang,Drue(r),Størrelse,Type,Salgspris\n";

    #[test]
    fn parses_quoted_grape_lists() {
        let text = join!(
            HEADER,
            "Clos X,France,Burgundy,Domaine X,2018,\"Pinot Noir, Chardonnay\",,Rød,650\r\n"
        );
        let rows = parse_records(&text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].grapes.as_deref(), Some("Pinot Noir, Chardonnay"));
        assert_eq!(rows[0].size, None);
        assert_eq!(rows[0].price.as_deref(), Some("650"));
    }

    #[test]
    fn skips_blank_lines_and_short_rows() {
        let text = join!(HEADER, ",,,,,,,,\n", "Barolo,Italy,Piedmont\n");
        let rows = parse_records(&text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region.as_deref(), Some("Piedmont"));
        assert_eq!(rows[0].price, None);
    }

    #[test]
    fn english_name_alias_and_bom() {
        let text = "\u{feff}Name,Land,Region,Producent,Årgang,Drue(r),Størrelse,Type,Salgspris\nA,B,C,D,,,,,\n";
        let rows = parse_records(text).unwrap();
        assert_eq!(rows[0].name.as_deref(), Some("A"));
    }

    #[test]
    fn first_name_alias_wins_when_several_are_present() {
        let text = "Name,Land,Region,Producent,Årgang,Drue(r),Størrelse,Type,Salgspris,Navn\nEnglish,B,C,D,,,,,,Dansk\n";
        let rows = parse_records(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("Dansk"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "Navn,Land,Region\nA,B,C\n";
        match parse_records(text) {
            Err(SourceError::MissingColumn(col)) => assert_eq!(col, "Producent"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
