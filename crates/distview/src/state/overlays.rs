use distview_core::SharedFlag;

/// A statistic the plot can draw on top of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Mean,
    Median,
    Mode,
    StdDev,
    Skewness,
    Kurtosis,
    Range,
}

impl Overlay {
    pub const ALL: [Overlay; 7] = [
        Overlay::Mean,
        Overlay::Median,
        Overlay::Mode,
        Overlay::StdDev,
        Overlay::Skewness,
        Overlay::Kurtosis,
        Overlay::Range,
    ];

    /// Overlays that also appear in the View menu.
    pub const LINES: [Overlay; 4] = [
        Overlay::Mean,
        Overlay::Median,
        Overlay::Mode,
        Overlay::StdDev,
    ];

    /// Label in the Edit menu.
    pub fn label(&self) -> &'static str {
        match self {
            Overlay::Mean => "Mean",
            Overlay::Median => "Median",
            Overlay::Mode => "Mode",
            Overlay::StdDev => "Std Dev Range",
            Overlay::Skewness => "Skewness",
            Overlay::Kurtosis => "Kurtosis",
            Overlay::Range => "Range (Min, Max)",
        }
    }

    /// Label in the View menu.
    pub fn view_label(&self) -> String {
        match self {
            Overlay::StdDev => "Show Std Dev Range".to_string(),
            other => format!("Show {} Line", other.label()),
        }
    }
}

/// The on/off flags behind every overlay toggle.
///
/// The same handle is bound to the View and Edit entries, so flipping one
/// shows as checked in the other.
#[derive(Debug, Clone)]
pub struct Overlays {
    mean: SharedFlag,
    median: SharedFlag,
    mode: SharedFlag,
    std_dev: SharedFlag,
    skewness: SharedFlag,
    kurtosis: SharedFlag,
    range: SharedFlag,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            mean: SharedFlag::new(true),
            median: SharedFlag::new(false),
            mode: SharedFlag::new(false),
            std_dev: SharedFlag::new(false),
            skewness: SharedFlag::new(false),
            kurtosis: SharedFlag::new(false),
            range: SharedFlag::new(false),
        }
    }
}

impl Overlays {
    pub fn flag(&self, overlay: Overlay) -> &SharedFlag {
        match overlay {
            Overlay::Mean => &self.mean,
            Overlay::Median => &self.median,
            Overlay::Mode => &self.mode,
            Overlay::StdDev => &self.std_dev,
            Overlay::Skewness => &self.skewness,
            Overlay::Kurtosis => &self.kurtosis,
            Overlay::Range => &self.range,
        }
    }

    pub fn is_shown(&self, overlay: Overlay) -> bool {
        self.flag(overlay).get()
    }

    /// Overlays currently switched on, in display order.
    pub fn enabled(&self) -> impl Iterator<Item = Overlay> + '_ {
        Overlay::ALL.into_iter().filter(|o| self.is_shown(*o))
    }
}
