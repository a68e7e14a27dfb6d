use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Delimiter splitting a label into stacked sub-lines.
pub const LABEL_LINE_DELIMITER: char = '_';

/// One drawable series: `key` identifies the column, `color` is any CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    pub key: String,
    #[serde(default)]
    pub label: String,
    pub color: String,
}

impl SeriesDefinition {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
        }
    }

    /// Display label split on `_` into stacked lines.
    #[must_use]
    pub fn label_lines(&self) -> SmallVec<[&str; 2]> {
        split_label_lines(&self.label)
    }
}

#[must_use]
pub fn split_label_lines(text: &str) -> SmallVec<[&str; 2]> {
    text.split(LABEL_LINE_DELIMITER).collect()
}

/// One year of the wide table: a value slot per series key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub year: i32,
    pub values: IndexMap<String, Option<f64>>,
}

impl DataRow {
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            year,
            values: IndexMap::new(),
        }
    }

    /// Present, finite value for `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values
            .get(key)
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
    }

    #[must_use]
    pub fn has_slot(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// Year-ordered wide rows; loaded once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSet {
    rows: Vec<DataRow>,
}

impl DataSet {
    /// Sorts `rows` by year. Rows are expected to carry a slot for every series.
    #[must_use]
    pub fn from_rows(mut rows: Vec<DataRow>) -> Self {
        rows.sort_by_key(|row| row.year);
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(year, value)` samples for one series in row order.
    pub fn samples<'a>(&'a self, key: &'a str) -> impl Iterator<Item = (i32, Option<f64>)> + 'a {
        self.rows.iter().map(move |row| (row.year, row.value(key)))
    }

    /// Adds an empty slot for every series key a row is missing.
    pub fn ensure_series_slots(&mut self, series: &[SeriesDefinition]) {
        for row in &mut self.rows {
            for definition in series {
                row.values.entry(definition.key.clone()).or_insert(None);
            }
        }
    }

    /// Inclusive year span covered by the rows.
    #[must_use]
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((self.rows.first()?.year, self.rows.last()?.year))
    }
}

#[cfg(test)]
mod tests {
    use super::{DataRow, DataSet, SeriesDefinition};

    #[test]
    fn label_lines_split_on_underscore() {
        let series = SeriesDefinition::new("usa", "United_States", "#e41a1c");
        assert_eq!(series.label_lines().as_slice(), &["United", "States"]);
    }

    #[test]
    fn rows_are_sorted_and_non_finite_values_are_absent() {
        let mut late = DataRow::new(2001);
        late.values.insert("a".to_owned(), Some(f64::NAN));
        let mut early = DataRow::new(2000);
        early.values.insert("a".to_owned(), Some(3.0));

        let data = DataSet::from_rows(vec![late, early]);
        let samples: Vec<_> = data.samples("a").collect();
        assert_eq!(samples, vec![(2000, Some(3.0)), (2001, None)]);
        assert_eq!(data.year_span(), Some((2000, 2001)));
    }
}
