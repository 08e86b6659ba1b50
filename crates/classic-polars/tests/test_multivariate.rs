//! Multivariate tests on grouped frames

mod common;

use approx::assert_relative_eq;
use classic_polars::{ClassicStatsExt, ToFrame, TtestDesign};
use common::multivariate_df;
use polars::prelude::*;

const DVS: [&str; 3] = ["a", "b", "c"];

fn column_names(frame: &DataFrame) -> Vec<String> {
    frame.get_column_names().iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_hotelling_independent() {
    let df = multivariate_df(&["x", "y"]);
    let result = df
        .multivariate_ttest(&DVS, TtestDesign::Independent { group: "group" })
        .unwrap();
    assert!(result.advisories.is_empty());
    assert_relative_eq!(result.value.t2, 87.18643705260544, max_relative = 1e-9);
    assert_relative_eq!(result.value.f, 27.352607702778176, max_relative = 1e-9);
    assert_eq!((result.value.df1, result.value.df2), (3.0, 32.0));

    let frame = result.to_frame().unwrap();
    assert_eq!(column_names(&frame), ["test", "T2", "F", "df1", "df2", "pval"]);
    assert_eq!(frame.height(), 1);
}

#[test]
fn test_hotelling_paired_and_one_sample() {
    let df = multivariate_df(&["x", "y"]);
    let paired = df
        .multivariate_ttest(&DVS, TtestDesign::from_parts(Some("group"), true).unwrap())
        .unwrap();
    assert_relative_eq!(paired.value.t2, 103.72795302678124, max_relative = 1e-9);

    let x_only = multivariate_df(&["x"]);
    let zero = x_only.multivariate_ttest(&DVS, TtestDesign::OneSample).unwrap();
    assert_relative_eq!(zero.value.t2, 1264.8870104586565, max_relative = 1e-9);
}

#[test]
fn test_hotelling_group_errors() {
    let df = multivariate_df(&["x", "y", "z"]);
    let err = df
        .multivariate_ttest(&DVS, TtestDesign::Independent { group: "group" })
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = df
        .multivariate_ttest(&["a", "group"], TtestDesign::Paired { group: "group" })
        .unwrap_err();
    assert!(err.is_design_violation());
}

#[test]
fn test_box_m_by_group() {
    let df = multivariate_df(&["x", "y", "z"]);
    let result = df.box_m(&DVS, "group", 0.001).unwrap();
    assert_relative_eq!(result.chi2, 38.004129735764046, max_relative = 1e-9);
    assert_eq!(result.df, 12.0);
    assert!(!result.equal_cov);

    let frame = result.to_frame().unwrap();
    assert_eq!(frame.column("test").unwrap().str().unwrap().get(0), Some("box"));
    assert_eq!(frame.column("equal_cov").unwrap().bool().unwrap().get(0), Some(false));
}

#[test]
fn test_henze_zirkler_on_columns() {
    let df = multivariate_df(&["x", "y"]);
    let result = df.multivariate_normality(&DVS, 0.05).unwrap();
    assert_relative_eq!(result.value.hz, 0.8219978873186355, epsilon = 1e-9);
    assert!(result.value.normal);

    let frame = result.to_frame().unwrap();
    assert_eq!(column_names(&frame), ["test", "HZ", "pval", "normal"]);
}
