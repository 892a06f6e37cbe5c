use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::indicators::error::{IndicatorError, IndicatorResult};

/// Default name of the date column.
pub const DATE_COLUMN: &str = "date";

/// Default name of the price column.
pub const CLOSE_COLUMN: &str = "close";

/// A single observation: a date-like label and a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub date: String,
    pub price: f64,
}

impl PriceSample {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}

/// Columnar input table with named text and numeric columns.
///
/// Every column shares one row count, fixed by the first column added.
/// Engines look columns up by name, so a missing column surfaces as
/// [`IndicatorError::MissingColumns`] rather than a type error at the edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    rows: usize,
    text_columns: BTreeMap<String, Vec<String>>,
    numeric_columns: BTreeMap<String, Vec<f64>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table with `date` and `close` columns from samples
    pub fn from_samples(samples: &[PriceSample]) -> Self {
        let mut text_columns = BTreeMap::new();
        let mut numeric_columns = BTreeMap::new();
        text_columns.insert(
            DATE_COLUMN.to_string(),
            samples.iter().map(|s| s.date.clone()).collect(),
        );
        numeric_columns.insert(
            CLOSE_COLUMN.to_string(),
            samples.iter().map(|s| s.price).collect(),
        );

        Self {
            rows: samples.len(),
            text_columns,
            numeric_columns,
        }
    }

    /// Add (or replace) a text column
    pub fn with_text_column(
        mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> IndicatorResult<Self> {
        let name = name.into();
        self.check_length(&name, values.len())?;
        self.rows = values.len();
        self.numeric_columns.remove(&name);
        self.text_columns.insert(name, values);
        Ok(self)
    }

    /// Add (or replace) a numeric column
    pub fn with_numeric_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> IndicatorResult<Self> {
        let name = name.into();
        self.check_length(&name, values.len())?;
        self.rows = values.len();
        self.text_columns.remove(&name);
        self.numeric_columns.insert(name, values);
        Ok(self)
    }

    fn check_length(&self, name: &str, actual: usize) -> IndicatorResult<()> {
        // A column being replaced does not pin the row count on its own.
        let others = self
            .text_columns
            .keys()
            .chain(self.numeric_columns.keys())
            .filter(|existing| existing.as_str() != name)
            .count();

        if others > 0 && actual != self.rows {
            return Err(IndicatorError::LengthMismatch {
                column: name.to_string(),
                expected: self.rows,
                actual,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.text_columns.contains_key(name) || self.numeric_columns.contains_key(name)
    }

    pub fn text_column(&self, name: &str) -> IndicatorResult<&[String]> {
        self.text_columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| IndicatorError::missing_column(name))
    }

    pub fn numeric_column(&self, name: &str) -> IndicatorResult<&[f64]> {
        self.numeric_columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| IndicatorError::missing_column(name))
    }

    /// Fail with every missing name when any of `names` is absent
    pub fn require_columns(&self, names: &[&str]) -> IndicatorResult<()> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(IndicatorError::MissingColumns(missing))
        }
    }

    /// Materialise `(date, price)` samples in table order
    pub fn samples(&self, date_column: &str, price_column: &str) -> IndicatorResult<Vec<PriceSample>> {
        self.require_columns(&[date_column, price_column])?;
        let dates = self.text_column(date_column)?;
        let prices = self.numeric_column(price_column)?;

        Ok(dates
            .iter()
            .zip(prices)
            .map(|(date, &price)| PriceSample::new(date.clone(), price))
            .collect())
    }
}
