//! Wide panels of scores
//!
//! A panel is a matrix with one row per subject (or rated target) and one
//! column per item (or rater). Cells with no observation hold `NaN`.

use classic_core::{Error, Result};
use nalgebra::DMatrix;
use std::fmt::Display;

/// Subjects × items matrix of scores with its labels
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    values: DMatrix<f64>,
    subjects: Vec<String>,
    items: Vec<String>,
}

/// Position of `key` in `keys`, appending it when absent
fn position_or_insert<K: PartialEq>(keys: &mut Vec<K>, key: K) -> usize {
    match keys.iter().position(|k| *k == key) {
        Some(i) => i,
        None => {
            keys.push(key);
            keys.len() - 1
        }
    }
}

impl Panel {
    /// Wrap a wide matrix, labelling rows and columns by their index
    pub fn from_wide(values: DMatrix<f64>) -> Self {
        let subjects = (0..values.nrows()).map(|i| i.to_string()).collect();
        let items = (0..values.ncols()).map(|j| j.to_string()).collect();
        Self {
            values,
            subjects,
            items,
        }
    }

    /// Pivot long-format records into a panel
    ///
    /// Rows and columns follow the order in which subjects and items first
    /// appear. A (subject, item) pair seen twice is a design violation; a pair
    /// never seen becomes `NaN`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use classic_reliability::Panel;
    ///
    /// let subjects = [1, 1, 2, 2, 3];
    /// let items = ["q1", "q2", "q1", "q2", "q1"];
    /// let scores = [4.0, 5.0, 3.0, 3.0, 5.0];
    /// let panel = Panel::from_long(&subjects, &items, &scores).unwrap();
    /// assert_eq!(panel.shape(), (3, 2));
    /// assert!(!panel.is_complete());
    /// ```
    pub fn from_long<S, I>(subjects: &[S], items: &[I], scores: &[f64]) -> Result<Self>
    where
        S: PartialEq + Display,
        I: PartialEq + Display,
    {
        if subjects.len() != scores.len() || items.len() != scores.len() {
            return Err(Error::InvalidArgument(format!(
                "Subject, item and score columns must have the same length, got {}, {} and {}",
                subjects.len(),
                items.len(),
                scores.len()
            )));
        }

        let mut subject_keys: Vec<&S> = Vec::new();
        let mut item_keys: Vec<&I> = Vec::new();
        let cells: Vec<(usize, usize)> = subjects
            .iter()
            .zip(items)
            .map(|(s, i)| {
                (
                    position_or_insert(&mut subject_keys, s),
                    position_or_insert(&mut item_keys, i),
                )
            })
            .collect();

        let mut values = DMatrix::from_element(subject_keys.len(), item_keys.len(), f64::NAN);
        let mut seen = DMatrix::from_element(subject_keys.len(), item_keys.len(), false);
        for (&(row, col), &score) in cells.iter().zip(scores) {
            if seen[(row, col)] {
                return Err(Error::DesignViolation(format!(
                    "Duplicate score for subject '{}' and item '{}'",
                    subject_keys[row], item_keys[col]
                )));
            }
            seen[(row, col)] = true;
            values[(row, col)] = score;
        }

        Ok(Self {
            values,
            subjects: subject_keys.iter().map(|s| s.to_string()).collect(),
            items: item_keys.iter().map(|i| i.to_string()).collect(),
        })
    }

    /// Scores, subjects × items
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Subject labels in row order
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Item labels in column order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// `(subjects, items)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    /// Whether every cell holds a finite score
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_keeps_first_appearance_order() {
        let subjects = ["b", "a", "b", "a"];
        let items = [2, 2, 1, 1];
        let panel = Panel::from_long(&subjects, &items, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(panel.subjects(), &["b".to_string(), "a".to_string()]);
        assert_eq!(panel.items(), &["2".to_string(), "1".to_string()]);
        assert_eq!(panel.values()[(0, 0)], 1.0);
        assert_eq!(panel.values()[(1, 1)], 4.0);
        assert!(panel.is_complete());
    }

    #[test]
    fn test_duplicate_cell_is_design_violation() {
        let err = Panel::from_long(&[1, 1], &["x", "x"], &[1.0, 2.0]).unwrap_err();
        assert!(err.is_design_violation());
    }

    #[test]
    fn test_length_mismatch() {
        let err = Panel::from_long(&[1, 2], &["x"], &[1.0, 2.0]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_from_wide() {
        let panel = Panel::from_wide(DMatrix::from_element(3, 2, 1.0));
        assert_eq!(panel.shape(), (3, 2));
        assert_eq!(panel.items().len(), 2);
    }
}
