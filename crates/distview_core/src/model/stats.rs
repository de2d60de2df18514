//! Summary statistics measured numerically from a sampled density curve.

use super::density::trapezoid;
use super::pdf::Curve;

/// Moments and landmarks of a sampled curve.
///
/// These are measured from the samples, so they describe the curve that is
/// actually drawn rather than the controls that shaped it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveStats {
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
    /// Kurtosis minus 3, so a normal curve reads 0
    pub excess_kurtosis: f64,
    pub median: f64,
    pub mode: f64,
    pub min: f64,
    pub max: f64,
}

impl CurveStats {
    #[must_use]
    pub fn from_curve(curve: &Curve<'_>) -> Self {
        Self::from_samples(curve.x, curve.y)
    }

    #[must_use]
    pub fn from_samples(x: &[f64], y: &[f64]) -> Self {
        let n = x.len().min(y.len());
        if n < 2 {
            let only = x.first().copied().unwrap_or(0.0);
            return Self {
                mean: only,
                median: only,
                mode: only,
                min: only,
                max: only,
                ..Default::default()
            };
        }
        let (x, y) = (&x[..n], &y[..n]);

        let area = trapezoid(x, y);
        let area = if area > 0.0 { area } else { 1.0 };

        let mean = moment(x, y, |v| v) / area;
        let central = |power: i32| moment(x, y, |v| (v - mean).powi(power)) / area;
        let variance = central(2);
        let std_dev = variance.max(0.0).sqrt();
        let (skewness, excess_kurtosis) = if std_dev > 0.0 {
            (
                central(3) / std_dev.powi(3),
                central(4) / variance.powi(2) - 3.0,
            )
        } else {
            (0.0, 0.0)
        };

        let mode = x
            .iter()
            .zip(y)
            .fold((x[0], f64::NEG_INFINITY), |best, (&xi, &yi)| {
                if yi > best.1 { (xi, yi) } else { best }
            })
            .0;

        Self {
            mean,
            std_dev,
            skewness,
            excess_kurtosis,
            median: quantile(x, y, 0.5 * area),
            mode,
            min: x[0],
            max: x[n - 1],
        }
    }
}

fn moment(x: &[f64], y: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (f(xs[0]) * ys[0] + f(xs[1]) * ys[1]) * 0.5)
        .sum()
}

/// Point where the cumulative trapezoidal area first reaches `target`.
fn quantile(x: &[f64], y: &[f64], target: f64) -> f64 {
    let mut cumulative = 0.0;
    for (xs, ys) in x.windows(2).zip(y.windows(2)) {
        let segment = (xs[1] - xs[0]) * (ys[0] + ys[1]) * 0.5;
        if cumulative + segment >= target && segment > 0.0 {
            let fraction = (target - cumulative) / segment;
            return xs[0] + fraction * (xs[1] - xs[0]);
        }
        cumulative += segment;
    }
    x[x.len() - 1]
}
