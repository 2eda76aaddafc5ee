//! Order statistics and evenly spaced sampling over numeric columns.

use crate::error::{Error, Result};
use crate::Row;

/// Extract a single dimension from rows of training inputs.
///
/// # Errors
///
/// Returns an error if `rows` is empty.
pub fn column(rows: &[Row], dim: usize) -> Result<Column> {
    Column::new(rows.iter().map(|row| row[dim]).collect())
}

/// An immutable view over a numeric sequence plus a sorted copy.
///
/// Derives min, max, a nearest-rank median, and evenly spaced sample
/// points spanning the data's own range.
#[derive(Debug, Clone)]
pub struct Column {
    data: Vec<f64>,
    sorted: Vec<f64>,
}

impl Column {
    /// Create a column over the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty; min/max/median have no meaning
    /// on an empty sequence and this is surfaced at construction.
    pub fn new(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }

        let mut sorted = data.clone();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { data, sorted })
    }

    /// The original, unsorted data.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the column is empty. Always false for a constructed column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Smallest value.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest value.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Nearest-rank median: the element at index `round((n-1)/2)` of the
    /// sorted copy.
    ///
    /// This is deliberately not an arithmetic mean; the sorted-middle
    /// behavior is part of the contract.
    #[must_use]
    pub fn median(&self) -> f64 {
        let index = ((self.sorted.len() - 1) as f64 / 2.0).round() as usize;
        self.sorted[index]
    }

    /// `count` evenly spaced values from min to max, both included.
    ///
    /// A degenerate range (`max == min`) yields a constant vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `count < 2`: a single point has no defined
    /// spacing (the step would divide by zero).
    pub fn points(&self, count: usize) -> Result<Vec<f64>> {
        if count < 2 {
            return Err(Error::InvalidPointCount { count });
        }

        let low = self.min();
        let high = self.max();
        let step = (high - low) / (count - 1) as f64;
        Ok((0..count).map(|i| low + i as f64 * step).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_rejected() {
        assert!(Column::new(vec![]).is_err());
    }

    #[test]
    fn test_min_max_median() {
        let c = Column::new(vec![3.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(c.min(), 1.0);
        assert_relative_eq!(c.max(), 3.0);
        assert_relative_eq!(c.median(), 2.0);
    }

    #[test]
    fn test_median_is_nearest_rank_not_mean() {
        // Mean would be 25.25; the sorted middle element is 2.0
        let c = Column::new(vec![100.0, 1.0, 0.0, 2.0]).unwrap();
        assert_relative_eq!(c.median(), 2.0);
    }

    #[test]
    fn test_distribution_of_points() {
        let c = Column::new(vec![3.0, 1.0, 2.0]).unwrap();
        let p = c.points(5).unwrap();
        let expected = [1.0, 1.5, 2.0, 2.5, 3.0];
        assert_eq!(p.len(), expected.len());
        for (got, want) in p.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want);
        }
    }

    #[test]
    fn test_single_point_rejected() {
        let c = Column::new(vec![1.0, 2.0]).unwrap();
        assert!(c.points(1).is_err());
        assert!(c.points(0).is_err());
    }

    #[test]
    fn test_degenerate_range_points() {
        let c = Column::new(vec![5.0, 5.0, 5.0]).unwrap();
        let p = c.points(4).unwrap();
        assert!(p.iter().all(|v| (v - 5.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_column_extraction() {
        let rows = vec![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let xs = column(&rows, 0).unwrap();
        let ys = column(&rows, 1).unwrap();
        assert_relative_eq!(xs.max(), 3.0);
        assert_relative_eq!(ys.max(), 30.0);
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
