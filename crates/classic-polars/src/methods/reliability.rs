//! Reliability metrics on long and wide frames

use classic_core::{ConfidenceLevel, Error as CoreError};
use classic_reliability::{
    cronbach_alpha, intraclass_corr, CronbachResult, IccResult, MissingValues, Panel,
};
use polars::prelude::*;

use super::columns::{keys, matrix, numeric};
use crate::config::{distinct_roles, required, ItemLayout};
use crate::Result;

/// Fewest observed scores the ICC accepts
const MIN_ICC_SCORES: usize = 5;

/// Pivot a long frame into a panel, skipping rows with a null key
fn long_panel(df: &DataFrame, subjects: &str, items: &str, scores: &str) -> Result<Panel> {
    let values = numeric(df, scores)?;
    let subject_keys = keys(df, subjects)?;
    let item_keys = keys(df, items)?;

    let mut rows = (Vec::new(), Vec::new(), Vec::new());
    for ((subject, item), score) in subject_keys.into_iter().zip(item_keys).zip(values) {
        if let (Some(subject), Some(item)) = (subject, item) {
            rows.0.push(subject);
            rows.1.push(item);
            rows.2.push(score);
        }
    }
    Ok(Panel::from_long(&rows.0, &rows.1, &rows.2)?)
}

pub(crate) fn cronbach_alpha_impl(
    df: &DataFrame,
    layout: ItemLayout<'_>,
    missing: MissingValues,
    ci: ConfidenceLevel,
) -> Result<CronbachResult> {
    let panel = match layout {
        ItemLayout::Wide => {
            let names: Vec<&str> = df.get_column_names().into_iter().map(|n| n.as_str()).collect();
            Panel::from_wide(matrix(df, &names)?)
        }
        ItemLayout::Long {
            items,
            scores,
            subject,
        } => {
            distinct_roles(&[("items", items), ("scores", scores), ("subject", subject)])?;
            long_panel(df, subject, items, scores)?
        }
    };
    Ok(cronbach_alpha(&panel, missing, ci)?)
}

pub(crate) fn intraclass_corr_impl(
    df: &DataFrame,
    targets: Option<&str>,
    raters: Option<&str>,
    ratings: Option<&str>,
    ci: ConfidenceLevel,
) -> Result<IccResult> {
    let targets = required(targets, "targets")?;
    let raters = required(raters, "raters")?;
    let ratings = required(ratings, "ratings")?;
    distinct_roles(&[("targets", targets), ("raters", raters), ("ratings", ratings)])?;

    let panel = long_panel(df, targets, raters, ratings)?;
    let observed = panel.values().iter().filter(|v| !v.is_nan()).count();
    if observed < MIN_ICC_SCORES {
        return Err(CoreError::InsufficientData {
            expected: MIN_ICC_SCORES,
            actual: observed,
        }
        .into());
    }
    Ok(intraclass_corr(&panel, ci)?)
}
