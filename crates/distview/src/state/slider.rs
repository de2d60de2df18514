use distview_core::{Parameter, ShapeParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Decrease,
    Increase,
}

/// A bounded numeric control for one shape parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSlider {
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    value: f64,
}

impl ParameterSlider {
    pub fn new(parameter: Parameter, min: f64, max: f64, step: f64, initial: f64) -> Self {
        let mut slider = Self {
            parameter,
            min,
            max,
            step,
            value: min,
        };
        slider.set_value(initial);
        slider
    }

    /// The slider with the range and step used for `parameter`.
    pub fn for_parameter(parameter: Parameter) -> Self {
        let initial = ShapeParams::default().get(parameter);
        match parameter {
            Parameter::Mean => Self::new(parameter, -10.0, 10.0, 0.1, initial),
            Parameter::Std => Self::new(parameter, 0.1, 20.0, 0.1, initial),
            Parameter::Skew => Self::new(parameter, -10.0, 10.0, 0.5, initial),
            Parameter::Kurtosis => Self::new(parameter, -5.0, 5.0, 0.1, initial),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn label(&self) -> &'static str {
        self.parameter.label()
    }

    /// Clamp into range and store. Non-finite input is ignored.
    pub fn set_value(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value.clamp(self.min, self.max);
        }
    }

    /// Value one step away, clamped. Does not modify the slider.
    pub fn stepped(&self, direction: StepDirection) -> f64 {
        let delta = match direction {
            StepDirection::Decrease => -self.step,
            StepDirection::Increase => self.step,
        };
        // Snap to the step grid so repeated steps do not accumulate drift
        let raw = self.value + delta;
        let snapped = ((raw - self.min) / self.step).round() * self.step + self.min;
        snapped.clamp(self.min, self.max)
    }

    /// Position of the value within the range, `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        (self.value - self.min) / (self.max - self.min)
    }

    /// Value at `fraction` of the range, snapped to the step grid.
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        let raw = self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min);
        let snapped = ((raw - self.min) / self.step).round() * self.step + self.min;
        snapped.clamp(self.min, self.max)
    }

    pub fn display(&self) -> String {
        format!("{:.2}", self.value)
    }

    /// Parse free-text entry. Range clamping happens on `set_value`.
    pub fn parse_entry(&self, text: &str) -> Result<f64, String> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("{}: {:?} is not a number", self.label(), text.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_clamps() {
        let mut slider = ParameterSlider::for_parameter(Parameter::Std);
        slider.set_value(100.0);
        assert_eq!(slider.value(), 20.0);
        slider.set_value(-3.0);
        assert_eq!(slider.value(), 0.1);
    }

    #[test]
    fn test_set_value_ignores_nan() {
        let mut slider = ParameterSlider::for_parameter(Parameter::Mean);
        slider.set_value(2.0);
        slider.set_value(f64::NAN);
        assert_eq!(slider.value(), 2.0);
    }

    #[test]
    fn test_steps_stay_on_grid() {
        let mut slider = ParameterSlider::for_parameter(Parameter::Mean);
        for _ in 0..7 {
            let next = slider.stepped(StepDirection::Increase);
            slider.set_value(next);
        }
        assert!((slider.value() - 0.7).abs() < 1e-9);
        assert_eq!(slider.display(), "0.70");
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        let mut slider = ParameterSlider::for_parameter(Parameter::Skew);
        slider.set_value(10.0);
        assert_eq!(slider.stepped(StepDirection::Increase), 10.0);
        slider.set_value(-10.0);
        assert_eq!(slider.stepped(StepDirection::Decrease), -10.0);
    }

    #[test]
    fn test_defaults_match_model() {
        let defaults = ShapeParams::default();
        for parameter in Parameter::ALL {
            assert_eq!(
                ParameterSlider::for_parameter(parameter).value(),
                defaults.get(parameter)
            );
        }
    }

    #[test]
    fn test_fraction() {
        let slider = ParameterSlider::for_parameter(Parameter::Mean);
        assert!((slider.fraction() - 0.5).abs() < 1e-12);
        assert!((slider.value_at_fraction(1.0) - 10.0).abs() < 1e-9);
        assert!((slider.value_at_fraction(0.26) - -4.8).abs() < 1e-9);
    }

    #[test]
    fn test_parse_entry() {
        let slider = ParameterSlider::for_parameter(Parameter::Kurtosis);
        assert_eq!(slider.parse_entry(" 1.5 ").unwrap(), 1.5);
        assert!(slider.parse_entry("abc").is_err());
        assert!(slider.parse_entry("NaN").is_err());
    }
}
