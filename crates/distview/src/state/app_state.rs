use distview_core::{ConfigurationError, CurveStats, EditablePdf, Parameter, PreconditionViolation};

use crate::config::{AxisLimits, KeybindingsConfig, Theme, ThemeSource};

use super::modal::ModalState;
use super::overlays::Overlays;
use super::slider::{ParameterSlider, StepDirection};

pub struct AppState {
    pub pdf: EditablePdf,
    /// Measured from the current curve, refreshed after every edit
    pub stats: CurveStats,
    pub sliders: [ParameterSlider; 4],
    pub focused_slider: usize,
    pub overlays: Overlays,
    pub manual_xlim: Option<AxisLimits>,
    pub theme: Theme,
    pub theme_source: ThemeSource,
    pub keybindings: KeybindingsConfig,
    pub modal: ModalState,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(theme: Theme, theme_source: ThemeSource, keybindings: KeybindingsConfig) -> Self {
        let pdf = EditablePdf::default();
        let stats = CurveStats::from_curve(&pdf.current_curve());
        Self {
            pdf,
            stats,
            sliders: Parameter::ALL.map(ParameterSlider::for_parameter),
            focused_slider: 0,
            overlays: Overlays::default(),
            manual_xlim: None,
            theme,
            theme_source,
            keybindings,
            modal: ModalState::None,
            error_message: None,
            status_message: None,
            exit: false,
        }
    }

    pub fn slider(&self, parameter: Parameter) -> &ParameterSlider {
        &self.sliders[slot(parameter)]
    }

    pub fn focused_parameter(&self) -> Parameter {
        self.sliders[self.focused_slider].parameter
    }

    pub fn focus_next(&mut self) {
        self.focused_slider = (self.focused_slider + 1) % self.sliders.len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.sliders.len();
        self.focused_slider = (self.focused_slider + len - 1) % len;
    }

    /// Clamp `value` into the slider's range, push it into the model and
    /// resync the slider from the model's echo.
    pub fn set_parameter(
        &mut self,
        parameter: Parameter,
        value: f64,
    ) -> Result<(), PreconditionViolation> {
        let slot = slot(parameter);
        let mut candidate = self.sliders[slot].clone();
        candidate.set_value(value);

        self.pdf.set(parameter, candidate.value())?;

        let echoed = self.pdf.params().get(parameter);
        self.sliders[slot].set_value(echoed);
        self.stats = CurveStats::from_curve(&self.pdf.current_curve());
        tracing::debug!(parameter = parameter.name(), value = echoed, "parameter updated");
        Ok(())
    }

    pub fn step_parameter(
        &mut self,
        parameter: Parameter,
        direction: StepDirection,
    ) -> Result<(), PreconditionViolation> {
        let target = self.slider(parameter).stepped(direction);
        self.set_parameter(parameter, target)
    }

    /// Apply typed `"min,max"` limits. On error the previous limits stay.
    pub fn apply_axis_limits(&mut self, text: &str) -> Result<(), ConfigurationError> {
        let limits: AxisLimits = text.parse()?;
        tracing::info!(min = limits.min, max = limits.max, "manual x-axis limits set");
        self.manual_xlim = Some(limits);
        Ok(())
    }

    pub fn reset_axis_limits(&mut self) {
        self.manual_xlim = None;
    }

    /// Restore the default shape and the sliders that show it.
    pub fn reset_parameters(&mut self) {
        self.pdf = EditablePdf::default();
        self.sliders = Parameter::ALL.map(ParameterSlider::for_parameter);
        self.stats = CurveStats::from_curve(&self.pdf.current_curve());
    }

    /// Visible x range: manual limits, else the sampled window.
    pub fn x_bounds(&self) -> [f64; 2] {
        if let Some(limits) = self.manual_xlim {
            return limits.as_bounds();
        }
        let curve = self.pdf.current_curve();
        match (curve.x.first(), curve.x.last()) {
            (Some(&lo), Some(&hi)) => [lo, hi],
            _ => [0.0, 1.0],
        }
    }

    /// Re-read the theme from where it came from. On error the current theme stays.
    pub fn reload_theme(&mut self) -> Result<(), ConfigurationError> {
        self.theme = self.theme_source.load()?;
        tracing::info!(source = %self.theme_source, "theme reloaded");
        Ok(())
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!("{msg}");
        self.status_message = None;
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.error_message = None;
        self.status_message = Some(msg.into());
    }
}

fn slot(parameter: Parameter) -> usize {
    match parameter {
        Parameter::Mean => 0,
        Parameter::Std => 1,
        Parameter::Skew => 2,
        Parameter::Kurtosis => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            Theme::builtin().unwrap(),
            ThemeSource::Builtin,
            KeybindingsConfig::default(),
        )
    }

    #[test]
    fn test_sliders_track_parameters() {
        let state = state();
        for parameter in Parameter::ALL {
            assert_eq!(state.slider(parameter).parameter, parameter);
        }
    }

    #[test]
    fn test_set_parameter_clamps_and_echoes() {
        let mut state = state();
        state.set_parameter(Parameter::Std, 0.0).unwrap();
        assert_eq!(state.pdf.params().std, 0.1);
        assert_eq!(state.slider(Parameter::Std).value(), 0.1);

        state.set_parameter(Parameter::Mean, 55.0).unwrap();
        assert_eq!(state.pdf.params().mean, 10.0);
        assert!((state.stats.mean - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_nan_entry_leaves_model_unchanged() {
        let mut state = state();
        state.set_parameter(Parameter::Skew, 2.0).unwrap();
        // The slider ignores NaN, so the model sees the previous value again
        state.set_parameter(Parameter::Skew, f64::NAN).unwrap();
        assert_eq!(state.pdf.params().skew, 2.0);
    }

    #[test]
    fn test_step_parameter() {
        let mut state = state();
        state
            .step_parameter(Parameter::Skew, StepDirection::Increase)
            .unwrap();
        assert_eq!(state.pdf.params().skew, 0.5);
        state
            .step_parameter(Parameter::Skew, StepDirection::Decrease)
            .unwrap();
        assert_eq!(state.pdf.params().skew, 0.0);
    }

    #[test]
    fn test_axis_limits() {
        let mut state = state();
        let auto = state.x_bounds();
        assert!((auto[0] + 4.0).abs() < 1e-9 && (auto[1] - 4.0).abs() < 1e-9);

        state.apply_axis_limits("-2,3").unwrap();
        assert_eq!(state.x_bounds(), [-2.0, 3.0]);

        assert!(state.apply_axis_limits("5,1").is_err());
        assert_eq!(state.x_bounds(), [-2.0, 3.0]);

        state.reset_axis_limits();
        assert_eq!(state.x_bounds(), auto);
    }

    #[test]
    fn test_reset_parameters() {
        let mut state = state();
        state.set_parameter(Parameter::Kurtosis, 2.0).unwrap();
        state.reset_parameters();
        assert_eq!(state.pdf.params(), distview_core::ShapeParams::default());
        assert_eq!(state.slider(Parameter::Kurtosis).value(), 0.0);
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = state();
        state.focus_prev();
        assert_eq!(state.focused_parameter(), Parameter::Kurtosis);
        state.focus_next();
        assert_eq!(state.focused_parameter(), Parameter::Mean);
    }

    #[test]
    fn test_error_and_status_are_exclusive() {
        let mut state = state();
        state.set_status("ok");
        state.set_error("bad");
        assert!(state.status_message.is_none());
        state.set_status("ok again");
        assert!(state.error_message.is_none());
    }
}
