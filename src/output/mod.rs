//! Output formats for benchmark results

pub mod csv_export;

pub use csv_export::ResultsFile;

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 timestamp with colons swapped for hyphens, safe in file names
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-")
}
