use crate::error::PreconditionViolation;

use super::density::{linspace_into, skew_normal_pdf, trapezoid};
use super::params::{Parameter, ShapeParams};

/// Number of samples in every derived curve.
pub const SAMPLE_COUNT: usize = 40_000;

/// A density curve driven by four shape parameters.
///
/// Every setter stores the value and resamples the curve in place. The `x`
/// and `y` buffers are reused across edits.
#[derive(Debug, Clone)]
pub struct EditablePdf {
    params: ShapeParams,
    x: Vec<f64>,
    y: Vec<f64>,
}

/// Borrowed view of the current curve plus the parameters that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub params: ShapeParams,
}

impl Default for EditablePdf {
    fn default() -> Self {
        let mut pdf = Self {
            params: ShapeParams::default(),
            x: Vec::with_capacity(SAMPLE_COUNT),
            y: Vec::with_capacity(SAMPLE_COUNT),
        };
        pdf.update();
        pdf
    }
}

impl EditablePdf {
    pub fn new(params: ShapeParams) -> Result<Self, PreconditionViolation> {
        params.validate()?;
        let mut pdf = Self {
            params,
            x: Vec::with_capacity(SAMPLE_COUNT),
            y: Vec::with_capacity(SAMPLE_COUNT),
        };
        pdf.update();
        Ok(pdf)
    }

    pub fn set_mean(&mut self, value: f64) -> Result<(), PreconditionViolation> {
        self.set(Parameter::Mean, value)
    }

    /// Rejects `value <= 0`, leaving the curve untouched.
    pub fn set_std(&mut self, value: f64) -> Result<(), PreconditionViolation> {
        self.set(Parameter::Std, value)
    }

    pub fn set_skew(&mut self, value: f64) -> Result<(), PreconditionViolation> {
        self.set(Parameter::Skew, value)
    }

    pub fn set_kurtosis(&mut self, value: f64) -> Result<(), PreconditionViolation> {
        self.set(Parameter::Kurtosis, value)
    }

    /// Set any one parameter and recompute.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> Result<(), PreconditionViolation> {
        parameter.check(value)?;
        match parameter {
            Parameter::Mean => self.params.mean = value,
            Parameter::Std => self.params.std = value,
            Parameter::Skew => self.params.skew = value,
            Parameter::Kurtosis => self.params.kurtosis = value,
        }
        self.update();
        Ok(())
    }

    #[must_use]
    pub fn params(&self) -> ShapeParams {
        self.params
    }

    #[must_use]
    pub fn current_curve(&self) -> Curve<'_> {
        Curve {
            x: &self.x,
            y: &self.y,
            params: self.params,
        }
    }

    fn update(&mut self) {
        let ShapeParams {
            mean,
            std,
            skew,
            kurtosis,
        } = self.params;

        let margin = self.params.margin();
        linspace_into(
            &mut self.x,
            mean - margin * std,
            mean + margin * std,
            SAMPLE_COUNT,
        );

        self.y.clear();
        self.y
            .extend(self.x.iter().map(|&x| skew_normal_pdf(x, skew, mean, std)));

        let exponent = kurtosis_exponent(kurtosis);
        if exponent != 1.0 {
            // Raise relative to the peak so large exponents neither underflow
            // nor overflow; the constant cancels in the renormalisation.
            let peak = self.y.iter().copied().fold(0.0_f64, f64::max);
            if peak > 0.0 {
                for v in &mut self.y {
                    *v = (*v / peak).powf(exponent);
                }
            }
        }

        let area = trapezoid(&self.x, &self.y);
        if area > 0.0 && area.is_finite() {
            for v in &mut self.y {
                *v /= area;
            }
        }
    }
}

/// Power applied to density values for a given kurtosis control.
///
/// Positive values sharpen the peak, negative values flatten it.
#[must_use]
pub fn kurtosis_exponent(kurtosis: f64) -> f64 {
    if kurtosis > 0.0 {
        1.0 + kurtosis
    } else if kurtosis < 0.0 {
        1.0 / (1.0 - kurtosis)
    } else {
        1.0
    }
}
