use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{DataRow, DataSet, SeriesDefinition};
use crate::data::LongRow;

/// Pivots long rows into one wide row per year.
///
/// Every output row gets a slot for every series key, `None` when the source
/// has no sample for that year. A repeated `(year, key)` pair keeps the last
/// value seen. Non-finite values become `None`.
#[must_use]
pub fn pivot_long_rows(rows: Vec<LongRow>, series: &[SeriesDefinition]) -> DataSet {
    let mut by_year: BTreeMap<i32, IndexMap<String, Option<f64>>> = BTreeMap::new();
    for row in rows {
        let value = row.value.filter(|value| value.is_finite());
        by_year.entry(row.year).or_default().insert(row.key, value);
    }

    let mut filled_slots = 0usize;
    let wide = by_year
        .into_iter()
        .map(|(year, mut values)| {
            for definition in series {
                if !values.contains_key(&definition.key) {
                    values.insert(definition.key.clone(), None);
                    filled_slots += 1;
                }
            }
            DataRow { year, values }
        })
        .collect();

    let data = DataSet::from_rows(wide);
    debug!(
        years = data.len(),
        filled_slots, "pivoted long rows into wide rows"
    );
    data
}

#[cfg(test)]
mod tests {
    use super::pivot_long_rows;
    use crate::core::SeriesDefinition;
    use crate::data::LongRow;

    fn row(key: &str, year: i32, value: Option<f64>) -> LongRow {
        LongRow {
            key: key.to_owned(),
            year,
            value,
        }
    }

    #[test]
    fn every_row_has_every_series_slot() {
        let series = vec![
            SeriesDefinition::new("USA", "USA", "#e41a1c"),
            SeriesDefinition::new("China", "China", "#377eb8"),
        ];
        let data = pivot_long_rows(
            vec![row("USA", 2001, Some(2.0)), row("USA", 2000, Some(1.0))],
            &series,
        );

        assert_eq!(data.len(), 2);
        assert_eq!(data.rows()[0].year, 2000);
        for wide in data.rows() {
            assert!(wide.has_slot("USA"));
            assert!(wide.has_slot("China"));
            assert_eq!(wide.value("China"), None);
        }
    }

    #[test]
    fn duplicate_samples_keep_last_value() {
        let series = vec![SeriesDefinition::new("USA", "USA", "red")];
        let data = pivot_long_rows(
            vec![row("USA", 2000, Some(1.0)), row("USA", 2000, Some(4.0))],
            &series,
        );
        assert_eq!(data.rows()[0].value("USA"), Some(4.0));
    }
}
