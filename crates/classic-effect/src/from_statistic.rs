//! Effect size from a T statistic (Lakens, 2013)

use crate::convert::convert;
use crate::types::{EffectSizeKind, SampleSizes};
use classic_core::{Advised, Error, Result};

/// Compute an effect size from the T statistic of a two-sample test
///
/// With group sizes d = T·√(1/nx + 1/ny); with only the total N, d = 2T/√N.
/// The d is then converted to `kind`. A total size gives the converter no
/// group information.
///
/// # Example
///
/// ```rust
/// use classic_effect::{compute_effsize_from_t, EffectSizeKind, SampleSizes};
///
/// let sizes = SampleSizes::Groups { nx: 10, ny: 10 };
/// let d = compute_effsize_from_t(2.0, sizes, EffectSizeKind::Cohen).unwrap();
/// assert!((d.value.unwrap() - 0.8944).abs() < 1e-4);
/// ```
pub fn compute_effsize_from_t(
    t: f64,
    sizes: SampleSizes,
    kind: EffectSizeKind,
) -> Result<Advised<Option<f64>>> {
    if !t.is_finite() {
        return Err(Error::InvalidArgument(
            "T-value must be a finite real number".to_string(),
        ));
    }

    let d = match sizes {
        SampleSizes::Groups { nx, ny } => t * (1.0 / nx as f64 + 1.0 / ny as f64).sqrt(),
        SampleSizes::Total(n) => 2.0 * t / (n as f64).sqrt(),
        SampleSizes::Unknown => {
            return Err(Error::InvalidArgument(
                "You must specify either nx + ny, or just N".to_string(),
            ))
        }
    };
    convert(d, EffectSizeKind::Cohen, kind, sizes)
}
