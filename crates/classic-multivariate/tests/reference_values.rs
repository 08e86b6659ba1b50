//! Multivariate tests against independently computed reference values

mod common;

use approx::assert_relative_eq;
use classic_core::matrix::{covariance_matrix, rank_symmetric};
use classic_core::Advisory;
use classic_multivariate::{box_m, multivariate_normality, multivariate_ttest, Reference};
use nalgebra::DMatrix;

#[test]
fn henze_zirkler_on_stacked_samples() {
    let (x, y) = (common::x(), common::y());
    let stacked = DMatrix::from_fn(36, 3, |i, j| if i < 18 { x[(i, j)] } else { y[(i - 18, j)] });
    let result = multivariate_normality(&stacked, 0.05).unwrap();
    assert_relative_eq!(result.value.hz, 0.8219978873186355, epsilon = 1e-9);
    assert_relative_eq!(result.value.pval, 0.10126842612564246, epsilon = 1e-8);
    assert!(result.value.normal);
}

#[test]
fn hotelling_two_sample() {
    let result = multivariate_ttest(&common::x(), Reference::Independent(&common::y())).unwrap();
    assert!(result.advisories.is_empty());
    let r = result.value;
    assert_relative_eq!(r.t2, 87.18643705260544, max_relative = 1e-9);
    assert_relative_eq!(r.f, 27.352607702778176, max_relative = 1e-9);
    assert_eq!((r.df1, r.df2), (3.0, 32.0));
    assert_relative_eq!(r.pval, 5.838261984969506e-09, max_relative = 1e-6);
}

#[test]
fn hotelling_one_sample() {
    let zero = multivariate_ttest(&common::x(), Reference::Zero).unwrap().value;
    assert_relative_eq!(zero.t2, 1264.8870104586565, max_relative = 1e-9);
    assert_relative_eq!(zero.f, 372.02559131136957, max_relative = 1e-9);
    assert_eq!((zero.df1, zero.df2), (3.0, 15.0));
    assert!(zero.pval < 1e-12);

    let near = multivariate_ttest(&common::x(), Reference::Mean(&[4.0, 8.0, 3.0])).unwrap().value;
    assert_relative_eq!(near.t2, 1.433339899708253, max_relative = 1e-9);
    assert_relative_eq!(near.f, 0.4215705587377215, max_relative = 1e-9);
    assert_relative_eq!(near.pval, 0.7402444000930785, max_relative = 1e-6);
}

#[test]
fn hotelling_paired() {
    let r = multivariate_ttest(&common::x(), Reference::Paired(&common::y())).unwrap().value;
    assert_relative_eq!(r.t2, 103.72795302678124, max_relative = 1e-9);
    assert_relative_eq!(r.f, 30.508221478465067, max_relative = 1e-9);
    assert_relative_eq!(r.pval, 1.2495840371329336e-06, max_relative = 1e-6);
}

#[test]
fn hotelling_paired_drops_incomplete_pairs() {
    let mut x = common::x();
    x[(4, 2)] = f64::NAN;
    let r = multivariate_ttest(&x, Reference::Paired(&common::y())).unwrap().value;
    assert_relative_eq!(r.t2, 92.00229430738965, max_relative = 1e-9);
    assert_relative_eq!(r.f, 26.83400250632198, max_relative = 1e-9);
    assert_eq!((r.df1, r.df2), (3.0, 14.0));
    assert_relative_eq!(r.pval, 4.590515566338382e-06, max_relative = 1e-6);
}

#[test]
fn box_m_three_groups() {
    let result = box_m(&[common::x(), common::y(), common::z()], 0.001).unwrap();
    assert_relative_eq!(result.chi2, 38.004129735764046, max_relative = 1e-9);
    assert_eq!(result.df, 12.0);
    assert_relative_eq!(result.pval, 0.0001533221619448577, max_relative = 1e-6);
    assert!(!result.equal_cov);
}

#[test]
fn box_m_two_equal_groups() {
    let result = box_m(&[common::x(), common::y()], 0.001).unwrap();
    assert_relative_eq!(result.chi2, 17.616673744716532, max_relative = 1e-9);
    assert_eq!(result.df, 6.0);
    assert_relative_eq!(result.pval, 0.007265068016042986, max_relative = 1e-6);
    assert!(result.equal_cov);
}

#[test]
fn near_collinear_data_keeps_full_rank() {
    let x = common::near_collinear();
    assert_eq!(rank_symmetric(&covariance_matrix(&x, 1)), 3);

    let hz = multivariate_normality(&x, 0.05).unwrap();
    assert!(!hz.raised(|a| matches!(a, Advisory::RankDeficient { .. })));
    assert!(hz.value.hz.is_finite() && hz.value.hz > 0.0);
    assert!(hz.value.hz < 4.0 * 18.0);
    assert!(hz.value.pval > 0.0 && hz.value.pval <= 1.0);

    let t2 = multivariate_ttest(&x, Reference::Zero).unwrap();
    assert!(t2.advisories.is_empty());
    assert!(t2.value.t2.is_finite() && t2.value.t2 > 0.0);

    let m = box_m(&[x, common::y()], 0.001).unwrap();
    assert!(m.chi2.is_finite());
    assert!((0.0..=1.0).contains(&m.pval));
}
