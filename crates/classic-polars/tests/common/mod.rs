//! Common fixtures for classic-polars tests

#![allow(dead_code)]

use polars::prelude::*;

const X: [f64; 54] = [
    2.1, 7.6, 2.4, 6.4, 7.8, 3.7, 3.9, 8.8, 3.4, 2.7, 6.2, 3.7, 5.0, 8.3, 2.7, 2.6, 7.0, -0.2,
    4.5, 9.9, 1.8, 4.4, 8.7, 2.7, 4.3, 9.2, 3.7, 4.4, 7.9, 3.2, 3.9, 6.4, 2.4, 4.7, 8.7, 3.8,
    3.7, 8.6, 3.4, 3.4, 8.6, 3.1, 6.4, 9.3, 3.4, 3.1, 9.5, 2.6, 3.5, 8.1, 3.6, 2.7, 8.0, 5.6,
];

const Y: [f64; 54] = [
    4.2, 7.6, 3.9, 4.7, 7.7, 6.3, 3.4, 9.5, 7.2, 4.6, 7.9, 6.9, 5.2, 6.0, 5.5, 6.1, 8.9, 7.0,
    5.2, 6.9, 5.2, 3.7, 8.9, 6.8, 4.7, 8.3, 5.7, 5.8, 3.7, 5.3, 4.7, 7.4, 5.3, 5.1, 6.4, 4.6,
    5.2, 7.4, 5.8, 5.5, 6.0, 5.0, 3.6, 8.5, 6.2, 3.3, 8.4, 5.3, 6.1, 6.1, 4.8, 4.2, 7.5, 5.8,
];

const Z: [f64; 36] = [
    7.6, 5.9, 1.5, 4.9, 6.6, 2.0, 2.7, 6.5, 2.4, 6.4, 8.1, 4.2, -0.5, 6.3, 0.6, 3.5, 6.3, 1.3,
    5.1, 7.3, 2.5, 5.6, 6.4, 0.4, 4.5, 6.7, 2.3, 6.8, 7.2, 3.2, 5.2, 6.2, 3.4, 2.4, 7.2, 4.0,
];

/// Three correlated variables `a`, `b`, `c` for the groups named in `groups`
pub fn multivariate_df(groups: &[&str]) -> DataFrame {
    let mut columns: [Vec<f64>; 3] = Default::default();
    let mut labels = Vec::new();
    for &group in groups {
        let data: &[f64] = match group {
            "x" => &X,
            "y" => &Y,
            _ => &Z,
        };
        for row in data.chunks(3) {
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(*value);
            }
            labels.push(group);
        }
    }
    let [a, b, c] = columns;
    df!["a" => a, "b" => b, "c" => c, "group" => labels].unwrap()
}

/// Eight wines rated by four judges, one row per rating
pub fn wine_df() -> DataFrame {
    let judges = [
        ("A", [1.0, 1.0, 3.0, 6.0, 6.0, 7.0, 8.0, 9.0]),
        ("B", [2.0, 3.0, 8.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
        ("C", [0.0, 3.0, 1.0, 3.0, 5.0, 6.0, 7.0, 9.0]),
        ("D", [1.0, 2.0, 4.0, 3.0, 6.0, 2.0, 9.0, 8.0]),
    ];
    let (mut wine, mut judge, mut score) = (Vec::new(), Vec::new(), Vec::new());
    for (name, ratings) in judges {
        for (i, rating) in ratings.into_iter().enumerate() {
            wine.push(i as i64 + 1);
            judge.push(name);
            score.push(rating);
        }
    }
    df!["Wine" => wine, "Judge" => judge, "Scores" => score].unwrap()
}

/// Nine respondents answering four items, one column per item
pub fn questionnaire_wide() -> DataFrame {
    df![
        "item1" => [6.0, 4.0, 4.0, 5.0, 4.0, 4.0, 6.0, 3.0, 1.0],
        "item2" => [6.0, 2.0, 5.0, 1.0, 6.0, 5.0, 2.0, 2.0, 4.0],
        "item3" => [7.0, 5.0, 2.0, 5.0, 2.0, 2.0, 2.0, 3.0, 1.0],
        "item4" => [7.0, 3.0, 6.0, 2.0, 3.0, 3.0, 4.0, 3.0, 3.0]
    ]
    .unwrap()
}

/// The questionnaire in long format
pub fn questionnaire_long() -> DataFrame {
    let wide = questionnaire_wide();
    let (mut subject, mut item, mut score) = (Vec::new(), Vec::new(), Vec::new());
    for column in wide.get_columns() {
        for (i, value) in column.f64().unwrap().into_no_null_iter().enumerate() {
            subject.push(format!("s{}", i + 1));
            item.push(column.name().to_string());
            score.push(value);
        }
    }
    df!["Subj" => subject, "Items" => item, "Scores" => score].unwrap()
}
