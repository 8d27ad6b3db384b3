//! Station catalog: in-memory store of imported fuel stations.
//!
//! The catalog is read-only after construction and queried by bounding box.
//! Stations come from the CSV produced by the geocoding pass over the
//! source price sheet (columns `Truckstop Name`, `Address`, `City`,
//! `State`, `Retail Price`, `lat`, `lon`); rows without usable coordinates
//! or with an invalid price are skipped at import time.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{BoundingBox, Coordinate, Station};

/// Errors from catalog import.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// CSV read or parse failed
    #[error("failed to read station CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the import CSV.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Truckstop Name")]
    name: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Retail Price")]
    retail_price: f64,
    #[serde(rename = "lat")]
    lat: Option<f64>,
    #[serde(rename = "lon")]
    lon: Option<f64>,
}

/// Read-only fuel station catalog.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Build a catalog from already-validated stations.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Import the catalog from a CSV file.
    ///
    /// Rows with missing or out-of-range coordinates, or a non-finite or
    /// negative price, are skipped with a warning; everything else becomes
    /// a validated [`Station`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut stations = Vec::new();
        let mut skipped = 0usize;

        for record in reader.deserialize() {
            let record: CsvRecord = record?;
            match station_from_record(record) {
                Some(station) => stations.push(station),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(
                skipped,
                loaded = stations.len(),
                "skipped catalog rows without usable coordinates or price"
            );
        }

        Ok(Self { stations })
    }

    /// Stations inside a geographic bounding region.
    pub fn query(&self, bbox: &BoundingBox) -> Vec<Station> {
        self.stations
            .iter()
            .filter(|station| bbox.contains(station.location))
            .cloned()
            .collect()
    }

    /// Number of stations in the catalog.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the catalog holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

fn station_from_record(record: CsvRecord) -> Option<Station> {
    let (Some(lat), Some(lon)) = (record.lat, record.lon) else {
        return None;
    };
    let location = Coordinate::new(lat, lon).ok()?;
    if !record.retail_price.is_finite() || record.retail_price < 0.0 {
        return None;
    }
    Some(Station {
        name: record.name,
        address: record.address,
        city: record.city,
        state: record.state,
        retail_price: record.retail_price,
        location,
    })
}
