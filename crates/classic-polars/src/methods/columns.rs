//! Column extraction shared by the table-based tests

use classic_core::Error as CoreError;
use nalgebra::DMatrix;
use polars::prelude::*;

use crate::{Error, Result};

fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

/// Numeric column as `f64`, nulls mapped to `NaN`
pub(crate) fn numeric(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = lookup(df, name)?;
    let dtype = column.dtype();
    if !(dtype.is_float() || dtype.is_integer()) {
        return Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{:?}", dtype),
        });
    }
    let values = column.cast(&DataType::Float64)?;
    Ok(values.f64()?.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Any column rendered as string keys, nulls kept as `None`
pub(crate) fn keys(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = lookup(df, name)?;
    let keys = column.cast(&DataType::String)?;
    Ok(keys.str()?.iter().map(|k| k.map(str::to_string)).collect())
}

/// Observations × variables matrix from numeric columns
pub(crate) fn matrix(df: &DataFrame, columns: &[&str]) -> Result<DMatrix<f64>> {
    if columns.is_empty() {
        let msg = "At least one column is required".to_string();
        return Err(CoreError::InvalidArgument(msg).into());
    }
    let data = columns
        .iter()
        .map(|name| numeric(df, name))
        .collect::<Result<Vec<_>>>()?;
    Ok(DMatrix::from_fn(df.height(), data.len(), |i, j| data[j][i]))
}

/// Row indices of each level, levels in order of first appearance
///
/// Rows with a null key belong to no level.
pub(crate) fn levels(keys: &[Option<String>]) -> Vec<(String, Vec<usize>)> {
    let mut levels: Vec<(String, Vec<usize>)> = Vec::new();
    for (row, key) in keys.iter().enumerate() {
        let Some(key) = key else { continue };
        match levels.iter_mut().find(|(level, _)| level == key) {
            Some((_, rows)) => rows.push(row),
            None => levels.push((key.clone(), vec![row])),
        }
    }
    levels
}
