// src/source.rs
//
// Data source adapter: where the sheet comes from and how long we keep it.
//
// - SheetLocation: remote CSV export (URL) or a local CSV file.
// - SheetSource:   anything that can hand back the sheet as CSV text.
// - SheetCache:    TTL cache of the normalized Catalog. A hit never touches the
//                  source; a miss blocks on one fetch; a failure is not cached.

use std::{
    fmt, fs,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use crate::{
    core::net,
    csv::parse_records,
    data::Catalog,
    error::SourceError,
    normalize::normalize,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetLocation {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for SheetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetLocation::Url(url) => write!(f, "{url}"),
            SheetLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub trait SheetSource {
    /// Return the whole sheet as CSV text.
    fn fetch_csv(&self) -> Result<String, SourceError>;

    /// Human readable origin, for logs and the status bar.
    fn describe(&self) -> String;
}

/// The production source: reads whatever `SheetLocation` points at.
#[derive(Clone, Debug)]
pub struct LocationSource {
    location: SheetLocation,
}

impl LocationSource {
    pub fn new(location: SheetLocation) -> Self { Self { location } }
}

impl SheetSource for LocationSource {
    fn fetch_csv(&self) -> Result<String, SourceError> {
        match &self.location {
            SheetLocation::Url(url) => net::http_get(url),
            SheetLocation::File(path) => fs::read_to_string(path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            }),
        }
    }

    fn describe(&self) -> String { self.location.to_string() }
}

/// Fetch, parse and normalize in one go. No partial results.
pub fn load_catalog(source: &dyn SheetSource) -> Result<Catalog, SourceError> {
    let text = source.fetch_csv()?;
    let records = parse_records(&text)?;
    Ok(Catalog::new(normalize(records)))
}

/* ---------------- TTL cache ---------------- */

/// Time seam so the cache can be tested without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }
}

struct Snapshot {
    catalog: Arc<Catalog>,
    fetched_at: Instant,
}

pub struct SheetCache<S: SheetSource, C: Clock = SystemClock> {
    source: S,
    clock: C,
    ttl: Duration,
    snapshot: Option<Snapshot>,
}

impl<S: SheetSource> SheetCache<S, SystemClock> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self::with_clock(source, ttl, SystemClock)
    }
}

impl<S: SheetSource, C: Clock> SheetCache<S, C> {
    pub fn with_clock(source: S, ttl: Duration, clock: C) -> Self {
        Self { source, clock, ttl, snapshot: None }
    }

    pub fn ttl(&self) -> Duration { self.ttl }
    pub fn source(&self) -> &S { &self.source }

    /// True when the next `get` will go to the source.
    pub fn is_stale(&self) -> bool {
        match &self.snapshot {
            Some(snap) => self.clock.now().saturating_duration_since(snap.fetched_at) >= self.ttl,
            None => true,
        }
    }

    /// Age of the cached snapshot, if any.
    pub fn age(&self) -> Option<Duration> {
        self.snapshot
            .as_ref()
            .map(|snap| self.clock.now().saturating_duration_since(snap.fetched_at))
    }

    /// Serve the cached catalog, refetching once the TTL has run out.
    pub fn get(&mut self) -> Result<Arc<Catalog>, SourceError> {
        if !self.is_stale() {
            if let Some(snap) = &self.snapshot {
                return Ok(Arc::clone(&snap.catalog));
            }
        }

        log::info!("Cache: Fetching sheet from {}", self.source.describe());
        match load_catalog(&self.source) {
            Ok(catalog) => {
                log::info!("Cache: Loaded {} wines", catalog.len());
                let catalog = Arc::new(catalog);
                self.snapshot = Some(Snapshot {
                    catalog: Arc::clone(&catalog),
                    fetched_at: self.clock.now(),
                });
                Ok(catalog)
            }
            Err(e) => {
                log::error!("Cache: Fetch failed: {}", e);
                Err(e)
            }
        }
    }

    /// Drop the snapshot so the next `get` refetches.
    pub fn invalidate(&mut self) {
        if self.snapshot.take().is_some() {
            log::debug!("Cache: Invalidated");
        }
    }
}
