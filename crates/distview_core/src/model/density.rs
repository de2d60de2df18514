//! Scalar density helpers: normal and skew-normal densities, normal CDF,
//! and trapezoidal integration over sampled curves.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Standard normal density φ(z)
#[must_use]
#[inline]
pub fn normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
}

/// Complementary error function.
///
/// Chebyshev fit with fractional error below 1.2e-7 everywhere, so the lower
/// tail keeps relative precision instead of collapsing to `1 - 1`.
#[must_use]
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let ans = t * (-z * z + poly).exp();
    if x >= 0.0 { ans } else { 2.0 - ans }
}

/// Standard normal cumulative distribution Φ(z)
#[must_use]
#[inline]
pub fn normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return 0.5;
    }
    0.5 * erfc(-z * FRAC_1_SQRT_2)
}

/// Skew-normal density with shape `alpha`, location `loc` and scale `scale`.
///
/// `f(x) = 2/scale · φ(z) · Φ(alpha·z)` with `z = (x - loc) / scale`.
#[must_use]
#[inline]
pub fn skew_normal_pdf(x: f64, alpha: f64, loc: f64, scale: f64) -> f64 {
    let z = (x - loc) / scale;
    2.0 / scale * normal_pdf(z) * normal_cdf(alpha * z)
}

/// Trapezoidal integral of `y` over the sample points `x`.
///
/// Extra samples in the longer slice are ignored.
#[must_use]
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) * 0.5)
        .sum()
}

/// Fill `out` with `n` evenly spaced points over `[start, end]`, reusing its allocation.
pub fn linspace_into(out: &mut Vec<f64>, start: f64, end: f64, n: usize) {
    out.clear();
    match n {
        0 => {}
        1 => out.push(start),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            out.extend((0..n - 1).map(|i| start + step * i as f64));
            out.push(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_cdf_reference_values() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.0) - 0.841_344_746).abs() < 1e-7);
        assert!((normal_cdf(-1.96) - 0.024_997_895).abs() < 1e-7);
        assert!((normal_cdf(3.0) - 0.998_650_102).abs() < 1e-7);
    }

    #[test]
    fn test_normal_cdf_lower_tail_keeps_precision() {
        // Φ(-8) ≈ 6.22e-16
        let tail = normal_cdf(-8.0);
        assert!(tail > 0.0);
        assert!((tail / 6.220_960_574e-16 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_skew_normal_reduces_to_normal() {
        for &x in &[-2.0, -0.5, 0.0, 0.7, 3.1] {
            let expected = normal_pdf((x - 1.0) / 2.0) / 2.0;
            assert!((skew_normal_pdf(x, 0.0, 1.0, 2.0) - expected).abs() < 1e-7);
        }
    }

    #[test]
    fn test_trapezoid_linear_is_exact() {
        let x = [0.0, 1.0, 3.0];
        let y = [0.0, 1.0, 3.0];
        assert!((trapezoid(&x, &y) - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_endpoints() {
        let mut out = Vec::new();
        linspace_into(&mut out, -2.0, 2.0, 5);
        assert_eq!(out, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);

        linspace_into(&mut out, 3.0, 4.0, 1);
        assert_eq!(out, vec![3.0]);
    }
}
