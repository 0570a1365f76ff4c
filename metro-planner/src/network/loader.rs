//! CSV loaders for the station coordinate and transit-pair datasets.
//!
//! Both files carry a header row. The pair table is typically exported
//! from a dataframe, so booleans may be `True`/`False` and counts may be
//! written as `2.0`; the loaders accept both spellings.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::domain::LatLng;

use super::error::NetworkError;
use super::lines::MetroLine;
use super::registry::StationRegistry;
use super::segment::{TransitSegment, TransitTable};

#[derive(Debug, Deserialize)]
struct StationRow {
    #[serde(alias = "station_name")]
    name: String,
    #[serde(alias = "latitude")]
    lat: f64,
    #[serde(alias = "longitude")]
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct PairRow {
    start_station: String,
    end_station: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    metro_distance_km: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    directions_time_min: f64,
    #[serde(default, deserialize_with = "lenient_bool")]
    same_line: bool,
    #[serde(default)]
    interchange_station: String,
    #[serde(default, deserialize_with = "lenient_count")]
    transfer_count: u32,
    #[serde(default)]
    start_line: String,
    #[serde(default)]
    end_line: String,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(0.0);
    }
    raw.parse::<f64>().map_err(serde::de::Error::custom)
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" => Ok(true),
        "false" | "0" | "0.0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected boolean, got {other:?}"
        ))),
    }
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = lenient_f64(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "expected non-negative whole number, got {value}"
        )));
    }
    Ok(value as u32)
}

fn open(path: &Path) -> Result<File, NetworkError> {
    File::open(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the station coordinate table into a registry.
///
/// A table without any station rows is an error.
pub fn read_stations<R: Read>(
    reader: R,
    lines: &[MetroLine],
) -> Result<StationRegistry, NetworkError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: StationRow = record?;
        let location = LatLng::new(row.lat, row.lng).map_err(|source| {
            NetworkError::InvalidCoordinate {
                station: row.name.clone(),
                source,
            }
        })?;
        rows.push((row.name, location));
    }
    if rows.is_empty() {
        return Err(NetworkError::NoStations);
    }

    StationRegistry::from_locations(rows, lines)
}

/// Load the station coordinate table from a file.
pub fn load_stations(
    path: impl AsRef<Path>,
    lines: &[MetroLine],
) -> Result<StationRegistry, NetworkError> {
    let path = path.as_ref();
    let registry = read_stations(open(path)?, lines)?;
    info!(path = %path.display(), stations = registry.len(), "Loaded stations");
    Ok(registry)
}

/// Parse the transit-pair table.
///
/// Later rows for the same ordered pair replace earlier ones.
pub fn read_transit_pairs<R: Read>(reader: R) -> Result<TransitTable, NetworkError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut table = TransitTable::new();
    for record in rdr.deserialize() {
        let row: PairRow = record?;

        if row.metro_distance_km < 0.0 || row.directions_time_min < 0.0 {
            return Err(NetworkError::InvalidSegment {
                from: row.start_station,
                to: row.end_station,
                message: "distance and time must be non-negative".to_string(),
            });
        }

        table.insert(TransitSegment {
            from: row.start_station,
            to: row.end_station,
            distance_km: row.metro_distance_km,
            time_mins: row.directions_time_min,
            same_line: row.same_line,
            interchange: row.interchange_station,
            transfer_count: row.transfer_count,
            start_line: row.start_line,
            end_line: row.end_line,
        });
    }

    Ok(table)
}

/// Load the transit-pair table from a file.
pub fn load_transit_pairs(path: impl AsRef<Path>) -> Result<TransitTable, NetworkError> {
    let path = path.as_ref();
    let table = read_transit_pairs(open(path)?)?;
    info!(path = %path.display(), routes = table.len(), "Loaded metro routes");
    Ok(table)
}
