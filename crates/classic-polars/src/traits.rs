//! Core traits for classical statistics on Polars DataFrames

use classic_core::{Advised, ConfidenceLevel};
use classic_effect::{EffectSizeKind, EstimateOptions};
use classic_multivariate::{BoxMResult, HenzeZirklerResult, HotellingResult};
use classic_parametric::{HomoscedasticityMethod, HomoscedasticityResult, ShapiroWilkResult};
use classic_reliability::{CronbachResult, IccResult, MissingValues};
use polars::prelude::*;

use crate::{ItemLayout, Result, TtestDesign};

/// Extension trait running classical tests on the columns of a DataFrame
///
/// Numeric columns may be integer or floating point; nulls are treated as
/// missing values. Key columns (groups, subjects, raters) may be of any type
/// and are compared by their string rendering.
pub trait ClassicStatsExt {
    /// Effect size between the two levels of `group`
    ///
    /// # Arguments
    /// * `dv` - Column holding the dependent variable
    /// * `group` - Column with exactly two levels, the first seen being X
    /// * `kind` - Effect size to report
    /// * `options` - Pairing and variance diagnostic options
    fn effect_size(
        &self,
        dv: &str,
        group: &str,
        kind: EffectSizeKind,
        options: &EstimateOptions,
    ) -> Result<Advised<Option<f64>>>;

    /// Henze-Zirkler multivariate normality test on `columns`
    fn multivariate_normality(
        &self,
        columns: &[&str],
        alpha: f64,
    ) -> Result<Advised<HenzeZirklerResult>>;

    /// Hotelling's T-squared test on `columns`
    ///
    /// # Arguments
    /// * `columns` - Dependent variables
    /// * `design` - One-sample, or two samples split by a group column
    fn multivariate_ttest(
        &self,
        columns: &[&str],
        design: TtestDesign<'_>,
    ) -> Result<Advised<HotellingResult>>;

    /// Box's M test of equal covariance matrices across the levels of `group`
    fn box_m(&self, dvs: &[&str], group: &str, alpha: f64) -> Result<BoxMResult>;

    /// Cronbach's alpha of a wide or long questionnaire
    fn cronbach_alpha(
        &self,
        layout: ItemLayout<'_>,
        missing: MissingValues,
        ci: ConfidenceLevel,
    ) -> Result<CronbachResult>;

    /// One-way random-effects ICC from a long frame
    ///
    /// # Arguments
    /// * `targets` - Column identifying the rated targets
    /// * `raters` - Column identifying the raters
    /// * `ratings` - Column holding the scores
    /// * `ci` - Confidence level of the interval
    fn intraclass_corr(
        &self,
        targets: Option<&str>,
        raters: Option<&str>,
        ratings: Option<&str>,
        ci: ConfidenceLevel,
    ) -> Result<IccResult>;
}

/// Render a test result as a one-row DataFrame
///
/// The first column, `test`, names the test the way a results table would
/// index it ("hotelling", "box", "hz", ...).
pub trait ToFrame {
    fn to_frame(&self) -> Result<DataFrame>;
}

impl<T: ToFrame> ToFrame for Advised<T> {
    fn to_frame(&self) -> Result<DataFrame> {
        self.value.to_frame()
    }
}

impl ToFrame for HotellingResult {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(df!(
            "test" => ["hotelling"],
            "T2" => [self.t2],
            "F" => [self.f],
            "df1" => [self.df1],
            "df2" => [self.df2],
            "pval" => [self.pval]
        )?)
    }
}

impl ToFrame for BoxMResult {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(df!(
            "test" => ["box"],
            "Chi2" => [self.chi2],
            "df" => [self.df],
            "pval" => [self.pval],
            "equal_cov" => [self.equal_cov]
        )?)
    }
}

impl ToFrame for HenzeZirklerResult {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(df!(
            "test" => ["hz"],
            "HZ" => [self.hz],
            "pval" => [self.pval],
            "normal" => [self.normal]
        )?)
    }
}

impl ToFrame for ShapiroWilkResult {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(df!(
            "test" => ["shapiro"],
            "W" => [self.w],
            "pval" => [self.pval],
            "normal" => [self.normal]
        )?)
    }
}

impl ToFrame for HomoscedasticityResult {
    fn to_frame(&self) -> Result<DataFrame> {
        let statistic = match self.method {
            HomoscedasticityMethod::Bartlett => "T",
            _ => "W",
        };
        Ok(df!(
            "test" => [self.method.name()],
            statistic => [self.statistic],
            "pval" => [self.pval],
            "equal_var" => [self.equal_var]
        )?)
    }
}

impl ToFrame for CronbachResult {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(df!(
            "test" => ["cronbach"],
            "alpha" => [self.alpha],
            "ci_lower" => [self.ci.lower],
            "ci_upper" => [self.ci.upper]
        )?)
    }
}

impl ToFrame for IccResult {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(df!(
            "test" => ["icc"],
            "ICC" => [self.icc],
            "F" => [self.f],
            "df1" => [self.df1],
            "df2" => [self.df2],
            "pval" => [self.pval],
            "ci_lower" => [self.ci.lower],
            "ci_upper" => [self.ci.upper]
        )?)
    }
}
