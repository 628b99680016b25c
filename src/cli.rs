// src/cli.rs
//
// Headless rendering of the listing. Same pipeline as the GUI, printed as text.

use std::{io::Write, path::PathBuf, time::Duration};

use thiserror::Error;

use crate::{
    config::options::{AppOptions, ConfigError, parse_ttl},
    error::SourceError,
    facets::{Dimension, FacetOptions},
    filter::{FilterSelection, PriceBucket},
    source::{LocationSource, SheetCache, SheetLocation},
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Args(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub selection: FilterSelection,
    pub location: Option<SheetLocation>,
    pub ttl: Option<Duration>,
    /// Print the facet lists instead of the wines
    pub list_facets: bool,
    pub help: bool,
}

pub const USAGE: &str = "\
Usage: cli [filters] [source]

Filters (repeatable, values within one flag are OR'ed):
  --country <name>     --region <name>     --producer <name>
  --year <yyyy>        --grape <name>      --size <label>
  --type <name>        --price <bucket>    (<600 | 600-799 | 800-999 | >1000)

Source:
  --url <csv-url>      --file <path.csv>   --ttl <seconds>

Other:
  --facets             list filter values for the current selection
  -h, --help";

pub fn parse_args<I>(args: I) -> Result<Params, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    let value = |flag: &str, args: &mut I::IntoIter| {
        args.next().ok_or_else(|| CliError::Args(format!("Missing value for {}", flag)))
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--country" => { params.selection.countries.insert(value(&a, &mut args)?); }
            "--region" => { params.selection.regions.insert(value(&a, &mut args)?); }
            "--producer" => { params.selection.producers.insert(value(&a, &mut args)?); }
            "--grape" => { params.selection.grapes.insert(value(&a, &mut args)?); }
            "--size" => { params.selection.sizes.insert(value(&a, &mut args)?); }
            "--type" => { params.selection.types.insert(value(&a, &mut args)?); }
            "--year" => {
                let v = value(&a, &mut args)?;
                let y: i32 = v.trim().parse()
                    .map_err(|_| CliError::Args(format!("Invalid year: {}", v)))?;
                params.selection.years.insert(y);
            }
            "--price" => {
                let v = value(&a, &mut args)?;
                let b = PriceBucket::from_label(&v)
                    .ok_or_else(|| CliError::Args(format!("Unknown price bucket: {}", v)))?;
                params.selection.prices.insert(b);
            }
            "--url" => params.location = Some(SheetLocation::Url(value(&a, &mut args)?)),
            "--file" => params.location = Some(SheetLocation::File(PathBuf::from(value(&a, &mut args)?))),
            "--ttl" => {
                let v = value(&a, &mut args)?;
                let ttl = parse_ttl(&v)
                    .ok_or_else(|| CliError::Args(format!("Invalid ttl: {}", v)))?;
                params.ttl = Some(ttl);
            }
            "--facets" => params.list_facets = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(CliError::Args(format!("Unknown arg: {}", a))),
        }
    }
    Ok(params)
}

pub fn run(params: Params) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if params.help {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    }

    let mut options = AppOptions::from_env()?;
    if let Some(location) = params.location {
        options.source.location = location;
    }
    if let Some(ttl) = params.ttl {
        options.source.ttl = ttl;
    }

    let mut cache = SheetCache::new(LocationSource::new(options.source.location), options.source.ttl);
    let catalog = cache.get()?;

    if params.list_facets {
        let facets = FacetOptions::cascade(catalog.rows(), &params.selection);
        for dim in Dimension::ALL {
            writeln!(out, "{}: {}", dim, facets.values(dim).join(" | "))?;
        }
        let buckets: Vec<&str> = PriceBucket::ALL.iter().map(|b| b.label()).collect();
        writeln!(out, "Price: {}", buckets.join(" | "))?;
        return Ok(());
    }

    let view = catalog.view(&params.selection);
    log::info!("CLI: {} of {} wines match", view.len(), catalog.len());
    write!(out, "{}", view.listing().render_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn repeated_flags_accumulate() {
        let p = parse_args(args(&["--country", "France", "--country", "Italy", "--price", "600-799"])).unwrap();
        assert_eq!(p.selection.countries.len(), 2);
        assert!(p.selection.prices.contains(&PriceBucket::From600To799));
    }

    #[test]
    fn source_and_ttl_flags() {
        let p = parse_args(args(&["--file", "wines.csv", "--ttl", "30", "--year", "2018"])).unwrap();
        assert_eq!(p.location, Some(SheetLocation::File(PathBuf::from("wines.csv"))));
        assert_eq!(p.ttl, Some(Duration::from_secs(30)));
        assert!(p.selection.years.contains(&2018));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(parse_args(args(&["--price", "cheap"])), Err(CliError::Args(_))));
        assert!(matches!(parse_args(args(&["--year", "NV"])), Err(CliError::Args(_))));
        assert!(matches!(parse_args(args(&["--region"])), Err(CliError::Args(_))));
        assert!(matches!(parse_args(args(&["--bogus"])), Err(CliError::Args(_))));
        assert!(matches!(parse_args(args(&["--ttl", "0"])), Err(CliError::Args(_))));
    }
}
