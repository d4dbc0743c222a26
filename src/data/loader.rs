//! CSV dataset loading: city → file lookup, parsing, derivation, filtering.

use crate::config::{Config, Datasets};
use crate::errors::{AppError, AppResult};
use crate::models::{City, Schema, Selection, Trip, TripRecord, TripTable};
use crate::utils::path::{expand_tilde, resolve_in};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Resolves cities to their dataset files and loads them.
#[derive(Debug, Clone)]
pub struct DataLoader {
    data_dir: PathBuf,
    datasets: Datasets,
}

impl DataLoader {
    pub fn new(data_dir: impl Into<PathBuf>, datasets: Datasets) -> Self {
        Self {
            data_dir: data_dir.into(),
            datasets,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(expand_tilde(&cfg.data_dir), cfg.datasets.clone())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the dataset for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        resolve_in(&self.data_dir, self.datasets.file_for(city))
    }

    /// Load the city's dataset and keep the trips matching `selection`.
    pub fn load(&self, selection: &Selection) -> AppResult<TripTable> {
        let table = self.load_city(selection.city)?;
        let total = table.len();
        let table = table.filter(selection);

        info!(
            city = selection.city.name(),
            month = selection.month.name(),
            day = selection.day.name(),
            total,
            kept = table.len(),
            "dataset filtered"
        );

        Ok(table)
    }

    /// Load every trip of the city's dataset.
    pub fn load_city(&self, city: City) -> AppResult<TripTable> {
        let path = self.path_for(city);
        if !path.exists() {
            return Err(AppError::DatasetNotFound(path.display().to_string()));
        }

        debug!(path = %path.display(), "loading dataset");
        let file = File::open(&path)?;

        read_trips(city, file).map_err(|e| match e {
            AppError::Csv(err) => AppError::Dataset {
                path: path.display().to_string(),
                reason: err.to_string(),
            },
            other => other,
        })
    }
}

/// Parse a whole CSV stream into a table. Any unparsable row fails the load.
pub fn read_trips<R: Read>(city: City, reader: R) -> AppResult<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(AppError::MissingColumn(required.to_string()));
        }
    }
    let schema = Schema::from_headers(headers.iter());

    let mut trips = Vec::new();
    for (i, row) in rdr.deserialize::<TripRecord>().enumerate() {
        trips.push(Trip::from_record(i, row?)?);
    }

    debug!(rows = trips.len(), ?schema, "dataset parsed");
    Ok(TripTable::new(city, schema, trips))
}
