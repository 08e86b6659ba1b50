//! Multivariate tests on groups of columns

use classic_core::missing::select_rows;
use classic_core::{Advised, Error as CoreError};
use classic_multivariate::{
    box_m, multivariate_normality, multivariate_ttest, BoxMResult, HenzeZirklerResult,
    HotellingResult, Reference,
};
use polars::prelude::*;

use super::columns::{keys, levels, matrix};
use crate::config::{distinct_roles, TtestDesign};
use crate::Result;

fn check_group(columns: &[&str], group: &str) -> Result<()> {
    for &column in columns {
        distinct_roles(&[("dependent variable", column), ("group", group)])?;
    }
    Ok(())
}

/// Rows of the two levels of `group`
fn two_levels(df: &DataFrame, group: &str) -> Result<(Vec<usize>, Vec<usize>)> {
    let mut levels = levels(&keys(df, group)?);
    if levels.len() != 2 {
        return Err(CoreError::InvalidArgument(format!(
            "Group must have exactly two levels, found {}",
            levels.len()
        ))
        .into());
    }
    let (_, second) = levels.remove(1);
    let (_, first) = levels.remove(0);
    Ok((first, second))
}

pub(crate) fn multivariate_normality_impl(
    df: &DataFrame,
    columns: &[&str],
    alpha: f64,
) -> Result<Advised<HenzeZirklerResult>> {
    let x = matrix(df, columns)?;
    Ok(multivariate_normality(&x, alpha)?)
}

pub(crate) fn multivariate_ttest_impl(
    df: &DataFrame,
    columns: &[&str],
    design: TtestDesign<'_>,
) -> Result<Advised<HotellingResult>> {
    if let Some(group) = design.group() {
        check_group(columns, group)?;
    }
    let data = matrix(df, columns)?;
    let result = match design {
        TtestDesign::OneSample => multivariate_ttest(&data, Reference::Zero)?,
        TtestDesign::Independent { group } | TtestDesign::Paired { group } => {
            let (first, second) = two_levels(df, group)?;
            let x = select_rows(&data, &first);
            let y = select_rows(&data, &second);
            let reference = if matches!(design, TtestDesign::Paired { .. }) {
                Reference::Paired(&y)
            } else {
                Reference::Independent(&y)
            };
            multivariate_ttest(&x, reference)?
        }
    };
    Ok(result)
}

pub(crate) fn box_m_impl(
    df: &DataFrame,
    dvs: &[&str],
    group: &str,
    alpha: f64,
) -> Result<BoxMResult> {
    check_group(dvs, group)?;
    let data = matrix(df, dvs)?;
    let groups: Vec<_> = levels(&keys(df, group)?)
        .into_iter()
        .map(|(_, rows)| select_rows(&data, &rows))
        .collect();
    Ok(box_m(&groups, alpha)?)
}
