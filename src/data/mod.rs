//! Data loading collaborator: fetch a long-format CSV, parse it, pivot it.

mod csv_rows;
#[cfg(feature = "http")]
mod http_loader;
mod loaders;
mod pivot;

pub use csv_rows::{LongRow, parse_long_rows};
#[cfg(feature = "http")]
pub use http_loader::HttpDataLoader;
pub use loaders::{FileDataLoader, InMemoryDataLoader};
pub use pivot::pivot_long_rows;

use crate::core::{DataSet, SeriesDefinition};
use crate::error::ChartResult;

/// Fetches the raw text behind a data url.
pub trait DataLoader {
    fn fetch(&self, url: &str) -> ChartResult<String>;
}

/// Fetch, parse and pivot in one step.
pub fn load_data_set(
    loader: &dyn DataLoader,
    url: &str,
    series: &[SeriesDefinition],
) -> ChartResult<DataSet> {
    let body = loader.fetch(url)?;
    let rows = parse_long_rows(&body)?;
    Ok(pivot_long_rows(rows, series))
}
