use serde::Deserialize;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// One long-format record: `key,year,value`.
///
/// Empty or non-numeric values deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LongRow {
    pub key: String,
    pub year: i32,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub value: Option<f64>,
}

pub fn parse_long_rows(text: &str) -> ChartResult<Vec<LongRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<LongRow>().enumerate() {
        let row = record.map_err(|err| {
            ChartError::InvalidData(format!("csv record {}: {err}", index + 1))
        })?;
        rows.push(row);
    }
    debug!(rows = rows.len(), "parsed long-format csv");
    Ok(rows)
}
