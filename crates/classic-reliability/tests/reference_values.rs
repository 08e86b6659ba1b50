//! Reliability metrics on published and independently computed fixtures

use approx::assert_relative_eq;
use classic_core::ConfidenceLevel;
use classic_reliability::{cronbach_alpha, intraclass_corr, MissingValues, Panel};
use nalgebra::DMatrix;

/// Eight wines scored by four judges, in long format
fn wine_ratings() -> (Vec<String>, Vec<char>, Vec<f64>) {
    let judges = [
        ('A', [1.0, 1.0, 3.0, 6.0, 6.0, 7.0, 8.0, 9.0]),
        ('B', [2.0, 3.0, 8.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
        ('C', [0.0, 3.0, 1.0, 3.0, 5.0, 6.0, 7.0, 9.0]),
        ('D', [1.0, 2.0, 4.0, 3.0, 6.0, 2.0, 9.0, 8.0]),
    ];
    let (mut wines, mut raters, mut scores) = (Vec::new(), Vec::new(), Vec::new());
    for (judge, ratings) in judges {
        for (i, score) in ratings.into_iter().enumerate() {
            wines.push(format!("Wine {}", i + 1));
            raters.push(judge);
            scores.push(score);
        }
    }
    (wines, raters, scores)
}

/// Nine respondents answering four items (respondents × items)
fn questionnaire() -> DMatrix<f64> {
    let items = [
        [6.0, 4.0, 4.0, 5.0, 4.0, 4.0, 6.0, 3.0, 1.0],
        [6.0, 2.0, 5.0, 1.0, 6.0, 5.0, 2.0, 2.0, 4.0],
        [7.0, 5.0, 2.0, 5.0, 2.0, 2.0, 2.0, 3.0, 1.0],
        [7.0, 3.0, 6.0, 2.0, 3.0, 3.0, 4.0, 3.0, 3.0],
    ];
    DMatrix::from_fn(9, 4, |i, j| items[j][i])
}

#[test]
fn icc_on_wine_ratings() {
    let (wines, judges, scores) = wine_ratings();
    let panel = Panel::from_long(&wines, &judges, &scores).unwrap();
    assert_eq!(panel.shape(), (8, 4));

    let result = intraclass_corr(&panel, ConfidenceLevel::default()).unwrap();
    assert_relative_eq!(result.icc, 0.727520915896081, epsilon = 1e-9);
    assert_relative_eq!(result.f, 11.680025856496444, epsilon = 1e-9);
    assert_eq!((result.df1, result.df2), (7.0, 24.0));
    assert_relative_eq!(result.pval, 2.181350954866268e-06, max_relative = 1e-6);
    assert_relative_eq!(result.ci.lower, 0.43377283, epsilon = 1e-6);
    assert_relative_eq!(result.ci.upper, 0.92669603, epsilon = 1e-6);
    assert_eq!(result.ci.to_string(), "95.0% CI: [0.434, 0.927]");
}

#[test]
fn icc_narrower_interval() {
    let (wines, judges, scores) = wine_ratings();
    let panel = Panel::from_long(&wines, &judges, &scores).unwrap();
    let level = ConfidenceLevel::new(0.68).unwrap();
    let result = intraclass_corr(&panel, level).unwrap();
    assert_relative_eq!(result.ci.lower, 0.59700238, epsilon = 1e-6);
    assert_relative_eq!(result.ci.upper, 0.85384689, epsilon = 1e-6);
}

#[test]
fn icc_rejects_missing_rating() {
    let (mut wines, mut judges, mut scores) = wine_ratings();
    wines.pop();
    judges.pop();
    scores.pop();
    let panel = Panel::from_long(&wines, &judges, &scores).unwrap();
    let err = intraclass_corr(&panel, ConfidenceLevel::default()).unwrap_err();
    assert!(err.is_design_violation());
}

#[test]
fn cronbach_alpha_on_questionnaire() {
    let panel = Panel::from_wide(questionnaire());
    let level = ConfidenceLevel::default();
    let result = cronbach_alpha(&panel, MissingValues::Pairwise, level).unwrap();
    assert_relative_eq!(result.alpha, 0.5924132364810331, epsilon = 1e-12);
    assert_eq!(format!("{:.3}", result.alpha), "0.592");
    assert_relative_eq!(result.ci.lower, -0.132738469, epsilon = 1e-6);
    assert_relative_eq!(result.ci.upper, 0.896740813, epsilon = 1e-6);

    let listwise = cronbach_alpha(&panel, MissingValues::Drop, level).unwrap();
    assert_relative_eq!(listwise.alpha, result.alpha, epsilon = 1e-12);
}

#[test]
fn cronbach_alpha_with_missing_score() {
    let mut values = questionnaire();
    values[(2, 0)] = f64::NAN;
    let panel = Panel::from_wide(values);
    let level = ConfidenceLevel::default();

    let pairwise = cronbach_alpha(&panel, MissingValues::Pairwise, level).unwrap();
    assert_relative_eq!(pairwise.alpha, 0.6101378951119885, epsilon = 1e-12);

    let listwise = cronbach_alpha(&panel, MissingValues::Drop, ConfidenceLevel::default()).unwrap();
    assert_relative_eq!(listwise.alpha, 0.6385767790262173, epsilon = 1e-12);
}
