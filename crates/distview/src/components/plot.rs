//! Density plot with optional statistic overlays.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, Overlay};
use crate::util::styles::{overlay_color, panel_style};

/// Braille cells hold two dots across, so this many points per column is plenty.
const POINTS_PER_COLUMN: usize = 2;

/// A vertical marker line.
struct Marker {
    overlay: Overlay,
    name: Option<String>,
    points: [(f64, f64); 2],
}

pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlotView {
    fn default() -> Self {
        Self::new()
    }
}

/// Every `stride`-th sample inside `[lo, hi]`, ending on the last one.
pub fn downsample(x: &[f64], y: &[f64], bounds: [f64; 2], target: usize) -> Vec<(f64, f64)> {
    let [lo, hi] = bounds;
    let start = x.partition_point(|&v| v < lo);
    let end = x.partition_point(|&v| v <= hi);
    if start >= end {
        return Vec::new();
    }

    let len = end - start;
    let stride = (len / target.max(1)).max(1);
    let mut points: Vec<(f64, f64)> = (start..end)
        .step_by(stride)
        .map(|i| (x[i], y[i]))
        .collect();
    if (end - 1 - start) % stride != 0 {
        points.push((x[end - 1], y[end - 1]));
    }
    points
}

fn markers(state: &AppState, top: f64) -> Vec<Marker> {
    let stats = &state.stats;
    let vertical = |overlay, name: Option<String>, at: f64| Marker {
        overlay,
        name,
        points: [(at, 0.0), (at, top)],
    };

    let mut markers = Vec::new();
    for overlay in state.overlays.enabled() {
        match overlay {
            Overlay::Mean => markers.push(vertical(
                overlay,
                Some(format!("Mean={:.2}", stats.mean)),
                stats.mean,
            )),
            Overlay::Median => markers.push(vertical(
                overlay,
                Some(format!("Median={:.2}", stats.median)),
                stats.median,
            )),
            Overlay::Mode => markers.push(vertical(
                overlay,
                Some(format!("Mode={:.2}", stats.mode)),
                stats.mode,
            )),
            Overlay::StdDev => {
                for k in 1..=3 {
                    let offset = k as f64 * stats.std_dev;
                    // One legend entry for the whole band set
                    let name = (k == 1).then(|| format!("±1,2,3σ (σ={:.2})", stats.std_dev));
                    markers.push(vertical(overlay, name, stats.mean - offset));
                    markers.push(vertical(overlay, None, stats.mean + offset));
                }
            }
            Overlay::Range => {
                markers.push(vertical(
                    overlay,
                    Some(format!("Min={:.2}", stats.min)),
                    stats.min,
                ));
                markers.push(vertical(
                    overlay,
                    Some(format!("Max={:.2}", stats.max)),
                    stats.max,
                ));
            }
            Overlay::Skewness | Overlay::Kurtosis => {}
        }
    }
    markers
}

/// Skewness and kurtosis readouts for the bottom border.
fn readouts(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    if state.overlays.is_shown(Overlay::Skewness) {
        spans.push(Span::styled(
            format!(" Skewness={:.3} ", state.stats.skewness),
            Style::default().fg(overlay_color(Overlay::Skewness)),
        ));
    }
    if state.overlays.is_shown(Overlay::Kurtosis) {
        spans.push(Span::styled(
            format!(" Excess kurtosis={:.3} ", state.stats.excess_kurtosis),
            Style::default().fg(overlay_color(Overlay::Kurtosis)),
        ));
    }
    Line::from(spans)
}

pub fn title(state: &AppState) -> String {
    let p = state.pdf.params();
    format!(
        " Distribution(mean={:.2}, std={:.2}, skew={:.2}, kurtosis={:.2}) ",
        p.mean, p.std, p.skew, p.kurtosis
    )
}

impl Component for PlotView {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let curve = state.pdf.current_curve();
        let x_bounds = state.x_bounds();

        let peak = curve.y.iter().copied().fold(0.0_f64, f64::max);
        let top = if peak > 0.0 { peak * 1.1 } else { 1.0 };

        let target = (area.width as usize).max(1) * POINTS_PER_COLUMN;
        let data = downsample(curve.x, curve.y, x_bounds, target);
        let markers = markers(state, top);

        let mut datasets = vec![
            Dataset::default()
                .name("Distribution")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.accent.into()))
                .data(&data),
        ];
        for marker in &markers {
            let mut dataset = Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(overlay_color(marker.overlay)))
                .data(&marker.points);
            if let Some(name) = &marker.name {
                dataset = dataset.name(name.clone());
            }
            datasets.push(dataset);
        }

        let [x_lo, x_hi] = x_bounds;
        let x_labels = vec![
            Line::from(format!("{x_lo:.2}")),
            Line::from(format!("{:.2}", (x_lo + x_hi) / 2.0)),
            Line::from(format!("{x_hi:.2}")),
        ];
        let y_labels = vec![
            Line::from("0"),
            Line::from(format!("{:.3}", top / 2.0)),
            Line::from(format!("{top:.3}")),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text.into()))
            .title(title(state))
            .title_bottom(readouts(state))
            .style(panel_style(theme));

        let chart = Chart::new(datasets)
            .block(block)
            .style(panel_style(theme))
            .x_axis(
                Axis::default()
                    .title("x".fg(theme.text))
                    .bounds(x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("density".fg(theme.text))
                    .bounds([0.0, top])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }
}
