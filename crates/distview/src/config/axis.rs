use std::str::FromStr;

use distview_core::ConfigurationError;

/// A user-chosen x-axis window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub fn as_bounds(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl FromStr for AxisLimits {
    type Err = ConfigurationError;

    /// Parse `"min,max"`. Both must be finite and `min < max`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigurationError::InvalidAxisLimits {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = input.split(',');
        let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected two numbers separated by a comma"));
        };

        let parse = |text: &str| {
            text.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| invalid(&format!("{:?} is not a number", text.trim())))
        };
        let (min, max) = (parse(min)?, parse(max)?);

        if min >= max {
            return Err(invalid("min must be less than max"));
        }
        Ok(Self { min, max })
    }
}

impl std::fmt::Display for AxisLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}
