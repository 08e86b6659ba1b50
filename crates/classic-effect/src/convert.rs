//! Conversion between effect sizes
//!
//! Every conversion goes through Cohen's d: the input (r or d) is first
//! expressed as d, then mapped to the requested kind by a per-kind function.

use crate::hedges_g::bias_correction_factor;
use crate::types::{EffectSizeKind, SampleSizes};
use classic_core::math::distributions::normal;
use classic_core::{Advised, Advisories, Advisory, Error, Result};
use std::f64::consts::{PI, SQRT_2};
use tracing::debug;

/// Quantities available to an output conversion
#[derive(Debug, Clone, Copy)]
struct Pivot {
    /// Value as passed by the caller
    original: f64,
    /// The same effect expressed as Cohen's d
    d: f64,
    sizes: SampleSizes,
}

type Conversion = fn(&Pivot, &mut Advisories) -> Option<f64>;

fn to_none(_: &Pivot, _: &mut Advisories) -> Option<f64> {
    None
}

fn to_cohen(p: &Pivot, _: &mut Advisories) -> Option<f64> {
    Some(p.d)
}

fn to_hedges(p: &Pivot, advisories: &mut Advisories) -> Option<f64> {
    match p.sizes.groups() {
        Some((nx, ny)) => Some(p.d * bias_correction_factor(nx, ny)),
        None => {
            advisories.raise(Advisory::HedgesWithoutSampleSizes);
            Some(p.d)
        }
    }
}

fn to_glass(p: &Pivot, advisories: &mut Advisories) -> Option<f64> {
    advisories.raise(Advisory::GlassWithoutVariance);
    Some(p.original)
}

/// McGrath and Meyer (2006)
fn to_r(p: &Pivot, _: &mut Advisories) -> Option<f64> {
    let a = match p.sizes.groups() {
        Some((nx, ny)) => ((nx + ny).powi(2) - 2.0 * (nx + ny)) / (nx * ny),
        None => 4.0,
    };
    Some(p.d / (p.d * p.d + a).sqrt())
}

fn to_eta_square(p: &Pivot, _: &mut Advisories) -> Option<f64> {
    let half = (p.d / 2.0).powi(2);
    Some(half / (1.0 + half))
}

fn to_odds_ratio(p: &Pivot, _: &mut Advisories) -> Option<f64> {
    Some((p.d * PI / 3.0_f64.sqrt()).exp())
}

fn to_auc(p: &Pivot, _: &mut Advisories) -> Option<f64> {
    normal::cdf(p.d / SQRT_2).ok()
}

/// Output conversion for each kind
fn conversion(kind: EffectSizeKind) -> Conversion {
    match kind {
        EffectSizeKind::None => to_none,
        EffectSizeKind::Cohen => to_cohen,
        EffectSizeKind::Hedges => to_hedges,
        EffectSizeKind::Glass => to_glass,
        EffectSizeKind::R => to_r,
        EffectSizeKind::EtaSquare => to_eta_square,
        EffectSizeKind::OddsRatio => to_odds_ratio,
        EffectSizeKind::Auc => to_auc,
    }
}

/// Convert an effect size from one kind to another
///
/// Identical kinds return `value` unchanged. Otherwise the input kind must be
/// [`EffectSizeKind::R`] or [`EffectSizeKind::Cohen`]. Group sizes are used by
/// the Hedges and r conversions; [`SampleSizes::Total`] carries no group
/// information and is treated like [`SampleSizes::Unknown`].
///
/// Converting to Glass delta is not possible without the group variances, so
/// the original value is returned together with an advisory.
///
/// # Example
///
/// ```rust
/// use classic_effect::{convert, EffectSizeKind, SampleSizes};
///
/// let d = convert(0.5, EffectSizeKind::R, EffectSizeKind::Cohen, SampleSizes::Unknown).unwrap();
/// assert!((d.value.unwrap() - 1.1547).abs() < 1e-4);
/// assert!(d.advisories.is_empty());
/// ```
pub fn convert(
    value: f64,
    input: EffectSizeKind,
    output: EffectSizeKind,
    sizes: SampleSizes,
) -> Result<Advised<Option<f64>>> {
    if input == output {
        return Ok(Advised::clean(Some(value)));
    }

    let d = match input {
        EffectSizeKind::R => 2.0 * value / (1.0 - value * value).sqrt(),
        EffectSizeKind::Cohen => value,
        _ => {
            return Err(Error::InvalidArgument(
                "Input type must be 'r' or 'cohen'".to_string(),
            ))
        }
    };
    debug!(%input, %output, value, d, "converting effect size");

    let pivot = Pivot {
        original: value,
        d,
        sizes,
    };
    let mut advisories = Advisories::new();
    let converted = conversion(output)(&pivot, &mut advisories);
    Ok(advisories.finish(converted))
}

/// [`convert`] with kinds given as case-insensitive tags such as `"cohen"` or `"AUC"`
pub fn convert_effsize(
    value: f64,
    input: &str,
    output: &str,
    sizes: SampleSizes,
) -> Result<Advised<Option<f64>>> {
    let input: EffectSizeKind = input.parse()?;
    let output: EffectSizeKind = output.parse()?;
    convert(value, input, output, sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn value(result: Result<Advised<Option<f64>>>) -> f64 {
        result.unwrap().value.unwrap()
    }

    #[test]
    fn test_r_to_cohen() {
        let d = value(convert_effsize(0.5, "r", "cohen", SampleSizes::Unknown));
        assert_abs_diff_eq!(d, 1.1547005383792517, epsilon = 1e-12);
    }

    #[test]
    fn test_cohen_outputs_without_sizes() {
        let from = |kind| value(convert(0.8, EffectSizeKind::Cohen, kind, SampleSizes::Unknown));
        assert_abs_diff_eq!(from(EffectSizeKind::R), 0.37139067635410367, epsilon = 1e-12);
        assert_abs_diff_eq!(from(EffectSizeKind::EtaSquare), 0.13793103448275862, epsilon = 1e-12);
        assert_abs_diff_eq!(from(EffectSizeKind::OddsRatio), 4.267548290026875, epsilon = 1e-10);
        assert_abs_diff_eq!(from(EffectSizeKind::Auc), 0.7141961775233342, epsilon = 1e-12);
    }

    #[test]
    fn test_hedges_needs_group_sizes() {
        let sizes = SampleSizes::Groups { nx: 10, ny: 10 };
        let g = convert(0.8, EffectSizeKind::Cohen, EffectSizeKind::Hedges, sizes).unwrap();
        assert_abs_diff_eq!(g.value.unwrap(), 0.7661971830985916, epsilon = 1e-12);
        assert!(!g.has_advisories());

        for sizes in [SampleSizes::Unknown, SampleSizes::Total(20)] {
            let g = convert(0.8, EffectSizeKind::Cohen, EffectSizeKind::Hedges, sizes).unwrap();
            assert_eq!(g.value, Some(0.8));
            assert_eq!(g.advisories, vec![Advisory::HedgesWithoutSampleSizes]);
        }
    }

    #[test]
    fn test_glass_returns_original_value() {
        let result =
            convert(0.5, EffectSizeKind::R, EffectSizeKind::Glass, SampleSizes::Unknown).unwrap();
        assert_eq!(result.value, Some(0.5));
        assert!(result.raised(|a| matches!(a, Advisory::GlassWithoutVariance)));
    }

    #[test]
    fn test_none_output() {
        let result = convert(0.5, EffectSizeKind::Cohen, EffectSizeKind::None, SampleSizes::Unknown)
            .unwrap();
        assert_eq!(result.value, None);
    }

    #[test]
    fn test_identity_skips_input_restriction() {
        let result = convert_effsize(1.7, "auc", "AUC", SampleSizes::Unknown).unwrap();
        assert_eq!(result.value, Some(1.7));
        assert!(convert_effsize(0.7, "auc", "cohen", SampleSizes::Unknown)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_unrecognized_kinds() {
        for (input, output) in [("coucou", "hedges"), ("r", "coucou")] {
            let err = convert_effsize(0.5, input, output, SampleSizes::Unknown).unwrap_err();
            assert!(err.to_string().contains("coucou"));
        }
    }

    #[test]
    fn test_perfect_correlation_is_not_an_error() {
        let d = value(convert(1.0, EffectSizeKind::R, EffectSizeKind::Cohen, SampleSizes::Unknown));
        assert!(d.is_infinite());
        let eta = value(convert(
            1.0,
            EffectSizeKind::R,
            EffectSizeKind::EtaSquare,
            SampleSizes::Unknown,
        ));
        assert!(eta.is_nan());
    }
}
