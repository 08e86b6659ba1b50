//! Effect sizes between the two levels of a group column

use classic_core::Advised;
use classic_effect::{compute_effsize, EffectSizeKind, EstimateOptions, TwoSamples};
use polars::prelude::*;
use tracing::debug;

use super::columns::{keys, numeric};
use crate::config::distinct_roles;
use crate::Result;

pub(crate) fn effect_size_impl(
    df: &DataFrame,
    dv: &str,
    group: &str,
    kind: EffectSizeKind,
    options: &EstimateOptions,
) -> Result<Advised<Option<f64>>> {
    distinct_roles(&[("dependent variable", dv), ("group", group)])?;
    let values = numeric(df, dv)?;
    let labels = keys(df, group)?;

    // Rows without a group label cannot be assigned to a sample
    let (values, labels): (Vec<f64>, Vec<String>) = values
        .into_iter()
        .zip(labels)
        .filter_map(|(v, label)| label.map(|l| (v, l)))
        .unzip();
    debug!(dv, group, rows = values.len(), %kind, "effect size from frame");

    let samples = TwoSamples::from_long(&values, &labels)?;
    Ok(compute_effsize(&samples, kind, options)?)
}
