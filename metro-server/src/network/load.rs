//! Loading a network from a comma-separated edge list.
//!
//! The file has one header row followed by rows of
//! `station_a,station_b,line,distance`. Ingestion is permissive: a row
//! that is short, has a non-numeric distance, or fails admission into the
//! graph is skipped and counted rather than failing the load. Only I/O
//! failures abort.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::{NetworkBuilder, TransitGraph};

/// Errors that can occur while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// Reading the underlying stream failed
    #[error("failed to read edge list: {0}")]
    Read(#[from] csv::Error),
}

/// Row counts from a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows that became connections.
    pub admitted: usize,
    /// Rows that were skipped.
    pub skipped: usize,
}

/// Load a network from a CSV file on disk.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<(TransitGraph, LoadReport), LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(file)
}

/// Load a network from any CSV byte stream.
pub fn load_from_reader<R: Read>(reader: R) -> Result<(TransitGraph, LoadReport), LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut builder = NetworkBuilder::new();
    let mut report = LoadReport::default();

    for (i, record) in rdr.records().enumerate() {
        // Header is line 1
        let line_no = i + 2;

        let record = match record {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(LoadError::Read(e)),
            Err(e) => {
                debug!(line = line_no, error = %e, "Skipping unreadable row");
                report.skipped += 1;
                continue;
            }
        };

        let (Some(a), Some(b), Some(line), Some(distance)) =
            (record.get(0), record.get(1), record.get(2), record.get(3))
        else {
            debug!(line = line_no, fields = record.len(), "Skipping short row");
            report.skipped += 1;
            continue;
        };

        let Ok(distance) = distance.trim().parse::<f64>() else {
            debug!(line = line_no, distance, "Skipping row with bad distance");
            report.skipped += 1;
            continue;
        };

        if builder.add_connection(a, b, distance, line) {
            report.admitted += 1;
        } else {
            debug!(line = line_no, a, b, "Skipping inadmissible row");
            report.skipped += 1;
        }
    }

    let graph = builder.build();
    info!(
        stations = graph.station_count(),
        admitted = report.admitted,
        skipped = report.skipped,
        "Loaded transit network"
    );

    Ok((graph, report))
}
