use crate::error::PreconditionViolation;

/// The four shape controls of an editable density.
///
/// `skew` is the skew-normal shape parameter and `kurtosis` an informal
/// peakedness control. Neither is the statistical moment of the same name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub mean: f64,
    pub std: f64,
    pub skew: f64,
    pub kurtosis: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std: 1.0,
            skew: 0.0,
            kurtosis: 0.0,
        }
    }
}

impl ShapeParams {
    /// Check every field against the domain the density is defined on.
    pub fn validate(&self) -> Result<(), PreconditionViolation> {
        Parameter::Mean.check(self.mean)?;
        Parameter::Std.check(self.std)?;
        Parameter::Skew.check(self.skew)?;
        Parameter::Kurtosis.check(self.kurtosis)
    }

    #[must_use]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Mean => self.mean,
            Parameter::Std => self.std,
            Parameter::Skew => self.skew,
            Parameter::Kurtosis => self.kurtosis,
        }
    }

    /// Half-width of the sampled window, in standard deviations.
    #[must_use]
    pub fn margin(&self) -> f64 {
        margin(self.skew, self.kurtosis)
    }
}

/// Sampling half-width in multiples of `std`.
///
/// Skew widens the window up to a cap of 4 extra deviations; positive
/// kurtosis widens it without bound.
#[must_use]
pub fn margin(skew: f64, kurtosis: f64) -> f64 {
    let skew_factor = (skew.abs() * 0.5).min(4.0);
    let kurtosis_factor = kurtosis.max(0.0) * 2.0;
    4.0 + skew_factor + kurtosis_factor
}

/// Identifies one shape parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Mean,
    Std,
    Skew,
    Kurtosis,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::Mean,
        Parameter::Std,
        Parameter::Skew,
        Parameter::Kurtosis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Mean => "mean",
            Parameter::Std => "std",
            Parameter::Skew => "skew",
            Parameter::Kurtosis => "kurtosis",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Mean => "Mean",
            Parameter::Std => "Standard Deviation",
            Parameter::Skew => "Skewness",
            Parameter::Kurtosis => "Kurtosis",
        }
    }

    pub(crate) fn check(&self, value: f64) -> Result<(), PreconditionViolation> {
        if !value.is_finite() {
            return Err(PreconditionViolation::new(
                self.name(),
                value,
                "must be a finite number",
            ));
        }
        if *self == Parameter::Std && value <= 0.0 {
            return Err(PreconditionViolation::new(
                self.name(),
                value,
                "standard deviation must be positive",
            ));
        }
        Ok(())
    }
}
