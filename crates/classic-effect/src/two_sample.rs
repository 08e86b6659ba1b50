//! Two-sample input shared by the estimators

use crate::types::SampleSizes;
use classic_core::missing::drop_missing;
use classic_core::{Error, Result};

/// Two samples X and Y
///
/// Built either from two vectors or from a long-format pair of values and
/// group labels. Missing values (`NaN`) are kept here and removed by the
/// estimators: independently for unpaired use, jointly for paired use.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoSamples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TwoSamples {
    /// Wrap two non-empty samples
    pub fn from_vectors(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.is_empty() || y.is_empty() {
            return Err(Error::InvalidArgument(
                "Both samples must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Split long-format values by a two-level grouping
    ///
    /// X holds the values of the first label encountered, Y those of the second.
    ///
    /// # Example
    ///
    /// ```rust
    /// use classic_effect::TwoSamples;
    ///
    /// let values = [1.0, 5.0, 2.0, 6.0];
    /// let groups = ["ctrl", "drug", "ctrl", "drug"];
    /// let samples = TwoSamples::from_long(&values, &groups).unwrap();
    /// assert_eq!(samples.x(), &[1.0, 2.0]);
    /// assert_eq!(samples.y(), &[5.0, 6.0]);
    /// ```
    pub fn from_long<L: PartialEq>(values: &[f64], labels: &[L]) -> Result<Self> {
        if values.len() != labels.len() {
            return Err(Error::size_mismatch(
                values.len(),
                labels.len(),
                "group labels",
            ));
        }

        let mut levels: Vec<&L> = Vec::with_capacity(2);
        for label in labels {
            if !levels.contains(&label) {
                levels.push(label);
            }
        }
        if levels.len() != 2 {
            return Err(Error::InvalidArgument(format!(
                "Group must have exactly two levels, found {}",
                levels.len()
            )));
        }

        let (mut x, mut y) = (Vec::new(), Vec::new());
        for (value, label) in values.iter().zip(labels) {
            if label == levels[0] {
                x.push(*value);
            } else {
                y.push(*value);
            }
        }
        Self::from_vectors(&x, &y)
    }

    /// First sample
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Second sample
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Size of the first sample
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    /// Size of the second sample
    pub fn ny(&self) -> usize {
        self.y.len()
    }

    /// Pooled degrees of freedom `nx + ny - 2`
    pub fn dof(&self) -> f64 {
        (self.nx() + self.ny()) as f64 - 2.0
    }

    /// Group sizes for the converter
    pub fn sizes(&self) -> SampleSizes {
        SampleSizes::Groups {
            nx: self.nx(),
            ny: self.ny(),
        }
    }

    /// Copy with missing values dropped from each sample independently
    pub fn complete(&self) -> Result<Self> {
        Self::from_vectors(&drop_missing(&self.x), &drop_missing(&self.y))
    }

    /// Copy with the pairs containing a missing value dropped
    ///
    /// Both samples must have the same length.
    pub fn complete_pairs(&self) -> Result<Self> {
        if self.nx() != self.ny() {
            return Err(Error::InvalidArgument(format!(
                "Paired samples must have the same length, got {} and {}",
                self.nx(),
                self.ny()
            )));
        }
        let (x, y): (Vec<f64>, Vec<f64>) = self
            .x
            .iter()
            .zip(&self.y)
            .filter(|(a, b)| !a.is_nan() && !b.is_nan())
            .map(|(a, b)| (*a, *b))
            .unzip();
        Self::from_vectors(&x, &y)
    }
}
