//! Effect size estimation from two samples

use crate::cohen_d::CohenD;
use crate::convert::convert;
use crate::glass_delta::GlassDelta;
use crate::traits::StandardizedEffectSize;
use crate::two_sample::TwoSamples;
use crate::types::{EffectSizeKind, EstimateOptions};
use classic_core::{Advised, Advisories, Advisory, Result};
use classic_parametric::homoscedasticity;
use tracing::{debug, instrument};

/// Compute an effect size of `x` relative to `y`
///
/// Glass delta is computed directly from the samples. Every other kind starts
/// from Cohen's d (pooled, or d-avg when `options.paired`) and is converted with
/// the sample sizes. Before pooling, the variances are tested at
/// `options.alpha`; a rejection raises [`Advisory::UnequalVariances`] but does
/// not stop the computation.
///
/// Missing values are dropped per sample, or pairwise when paired.
///
/// # Example
///
/// ```rust
/// use classic_effect::{compute_effsize, EffectSizeKind, EstimateOptions, TwoSamples};
///
/// let x = [5.2, 6.1, 4.8, 7.0, 5.5, 6.3, 5.9, 6.8];
/// let y = [4.1, 4.9, 5.0, 3.8, 4.4, 5.2, 4.6, 4.0, 4.7];
/// let samples = TwoSamples::from_vectors(&x, &y).unwrap();
/// let d = compute_effsize(&samples, EffectSizeKind::Cohen, &EstimateOptions::default()).unwrap();
/// assert!((d.value.unwrap() - 2.2736).abs() < 1e-4);
/// ```
#[instrument(skip(samples), fields(nx = samples.nx(), ny = samples.ny()))]
pub fn compute_effsize(
    samples: &TwoSamples,
    kind: EffectSizeKind,
    options: &EstimateOptions,
) -> Result<Advised<Option<f64>>> {
    let samples = if options.paired {
        samples.complete_pairs()?
    } else {
        samples.complete()?
    };

    if kind == EffectSizeKind::Glass {
        let delta = GlassDelta::new().compute_samples(&samples)?;
        return Ok(Advised::clean(Some(delta)));
    }

    let mut advisories = Advisories::new();
    match homoscedasticity(
        &[samples.x(), samples.y()],
        options.homoscedasticity,
        options.alpha,
    ) {
        Ok(check) if !check.equal_var => advisories.raise(Advisory::UnequalVariances {
            method: check.method.to_string(),
            p_value: check.pval,
        }),
        Ok(_) => {}
        Err(err) => debug!(%err, "variance homogeneity could not be tested"),
    }

    let cohen = if options.paired {
        CohenD::new().paired()
    } else {
        CohenD::new()
    };
    let d = cohen.compute_samples(&samples)?;
    let converted = advisories.absorb(convert(d, EffectSizeKind::Cohen, kind, samples.sizes())?);
    Ok(advisories.finish(converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use classic_parametric::HomoscedasticityMethod;

    const X: [f64; 8] = [5.2, 6.1, 4.8, 7.0, 5.5, 6.3, 5.9, 6.8];
    const Y: [f64; 9] = [4.1, 4.9, 5.0, 3.8, 4.4, 5.2, 4.6, 4.0, 4.7];

    fn estimate(kind: EffectSizeKind) -> Advised<Option<f64>> {
        let samples = TwoSamples::from_vectors(&X, &Y).unwrap();
        compute_effsize(&samples, kind, &EstimateOptions::default()).unwrap()
    }

    #[test]
    fn test_all_kinds() {
        let expected = [
            (EffectSizeKind::Cohen, 2.273570780108083),
            (EffectSizeKind::Hedges, 2.157965486204282),
            (EffectSizeKind::R, 0.7703351025845419),
            (EffectSizeKind::EtaSquare, 0.5637533138612862),
            (EffectSizeKind::OddsRatio, 61.79368875242766),
            (EffectSizeKind::Auc, 0.9460448741262738),
            (EffectSizeKind::Glass, 3.144451438693145),
        ];
        for (kind, value) in expected {
            let result = estimate(kind);
            assert_abs_diff_eq!(result.value.unwrap(), value, epsilon = 1e-9);
            assert!(result.advisories.is_empty(), "{kind}: {:?}", result.advisories);
        }
        assert_eq!(estimate(EffectSizeKind::None).value, None);
    }

    #[test]
    fn test_unequal_variances_advisory() {
        let tight = [1.0, 1.1, 0.9, 1.05, 0.95, 1.0, 1.02, 0.98, 1.01, 0.99];
        let wide = [0.0, 5.0, -4.0, 8.0, -7.0, 3.0, 10.0, -9.0, 6.0, -2.0];
        let samples = TwoSamples::from_vectors(&tight, &wide).unwrap();
        let options =
            EstimateOptions::default().with_homoscedasticity(HomoscedasticityMethod::Levene);

        let result = compute_effsize(&samples, EffectSizeKind::Cohen, &options).unwrap();
        assert!(result.value.unwrap().is_finite());
        assert!(result.raised(
            |a| matches!(a, Advisory::UnequalVariances { method, .. } if method == "levene")
        ));

        // Glass is the recommended alternative and does not warn
        let glass = compute_effsize(&samples, EffectSizeKind::Glass, &options).unwrap();
        assert!(!glass.has_advisories());
    }

    #[test]
    fn test_paired_requires_equal_lengths() {
        let samples = TwoSamples::from_vectors(&X, &Y).unwrap();
        let err = compute_effsize(&samples, EffectSizeKind::Cohen, &EstimateOptions::paired())
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_paired_drops_incomplete_pairs() {
        let mut x = X.to_vec();
        let mut y = vec![4.9, 5.8, 4.9, 6.1, 5.0, 5.9, 5.1, 6.0];
        x.push(f64::NAN);
        y.push(3.0);
        let samples = TwoSamples::from_vectors(&x, &y).unwrap();
        let d =
            compute_effsize(&samples, EffectSizeKind::Cohen, &EstimateOptions::paired()).unwrap();
        assert_abs_diff_eq!(d.value.unwrap(), 0.805966966739741, epsilon = 1e-10);
    }
}
