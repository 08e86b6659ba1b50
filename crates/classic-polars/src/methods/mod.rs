//! Implementations behind [`ClassicStatsExt`](crate::ClassicStatsExt)

mod columns;
mod effect;
mod multivariate;
mod reliability;

use classic_core::{Advised, ConfidenceLevel};
use classic_effect::{EffectSizeKind, EstimateOptions};
use classic_multivariate::{BoxMResult, HenzeZirklerResult, HotellingResult};
use classic_reliability::{CronbachResult, IccResult, MissingValues};
use polars::prelude::*;

use crate::{ClassicStatsExt, ItemLayout, Result, TtestDesign};

impl ClassicStatsExt for DataFrame {
    fn effect_size(
        &self,
        dv: &str,
        group: &str,
        kind: EffectSizeKind,
        options: &EstimateOptions,
    ) -> Result<Advised<Option<f64>>> {
        effect::effect_size_impl(self, dv, group, kind, options)
    }

    fn multivariate_normality(
        &self,
        columns: &[&str],
        alpha: f64,
    ) -> Result<Advised<HenzeZirklerResult>> {
        multivariate::multivariate_normality_impl(self, columns, alpha)
    }

    fn multivariate_ttest(
        &self,
        columns: &[&str],
        design: TtestDesign<'_>,
    ) -> Result<Advised<HotellingResult>> {
        multivariate::multivariate_ttest_impl(self, columns, design)
    }

    fn box_m(&self, dvs: &[&str], group: &str, alpha: f64) -> Result<BoxMResult> {
        multivariate::box_m_impl(self, dvs, group, alpha)
    }

    fn cronbach_alpha(
        &self,
        layout: ItemLayout<'_>,
        missing: MissingValues,
        ci: ConfidenceLevel,
    ) -> Result<CronbachResult> {
        reliability::cronbach_alpha_impl(self, layout, missing, ci)
    }

    fn intraclass_corr(
        &self,
        targets: Option<&str>,
        raters: Option<&str>,
        ratings: Option<&str>,
        ci: ConfidenceLevel,
    ) -> Result<IccResult> {
        reliability::intraclass_corr_impl(self, targets, raters, ratings, ci)
    }
}
