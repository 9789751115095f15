//! ui/plots.rs — mean ± SD bar charts with significance markers.
//!
//! One chart per feature row: a grouped bar per clinical group with a ±SD
//! whisker, and for category views a stack of horizontal marker lines, one
//! per significant pair, each annotated with an asterisk. Marker placement
//! keeps clear of the data span and the axis is widened so every marker
//! stays visible.

use egui::{Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Text};

use crate::data::record::{FeatureRecord, Group, GroupPair};

/// One palette entry per group position.
pub const GROUP_COLORS: [Color32; 4] = [
    Color32::from_rgb(0x4E, 0x79, 0xA7),
    Color32::from_rgb(0xF2, 0x8E, 0x2B),
    Color32::from_rgb(0xE1, 0x57, 0x59),
    Color32::from_rgb(0x76, 0xB7, 0xB2),
];

/// Marker colors, cycled by pair position.
pub const MARKER_COLORS: [Color32; 6] = [
    Color32::from_rgb(0xFF, 0x00, 0x00), // red
    Color32::from_rgb(0x00, 0x00, 0xFF), // blue
    Color32::from_rgb(0x00, 0x80, 0x00), // green
    Color32::from_rgb(0x80, 0x00, 0x80), // purple
    Color32::from_rgb(0xFF, 0xA5, 0x00), // orange
    Color32::from_rgb(0xA5, 0x2A, 0x2A), // brown
];

const CHART_HEIGHT: f32 = 320.0;
const BAR_WIDTH: f64 = 0.6;
const WHISKER_CAP: f64 = 0.08;

/// Combined extent of mean ± std over the given groups.
pub fn span(record: &FeatureRecord, groups: &[Group]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for group in groups {
        let stat = record.stat(*group);
        lo = lo.min(stat.mean - stat.std);
        hi = hi.max(stat.mean + stat.std);
    }
    (lo, hi)
}

/// Vertical placement of stacked significance markers.
///
/// The first marker sits 5% of the span outside the data (above when the
/// span top is positive, below otherwise) and each further marker steps 3%
/// of the span in the same direction. `axis_bound` widens the plot on the
/// stacking side by 5% per marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerLayout {
    pub base: f64,
    pub step: f64,
    headroom: f64,
}

impl MarkerLayout {
    pub fn from_span(y_min: f64, y_max: f64, marker_count: usize) -> Self {
        let range = (y_max - y_min).abs();
        let offset = range * 0.05;
        let step = range * 0.03;
        if y_max > 0.0 {
            Self {
                base: y_max + offset,
                step,
                headroom: marker_count as f64 * offset,
            }
        } else {
            Self {
                base: y_min - offset,
                step: -step,
                headroom: -(marker_count as f64 * offset),
            }
        }
    }

    /// Height of the i-th marker line.
    #[inline]
    pub fn line_y(&self, index: usize) -> f64 {
        self.base + index as f64 * self.step
    }

    /// Axis extent needed on the stacking side.
    #[inline]
    pub fn axis_bound(&self) -> f64 {
        self.base + self.headroom
    }
}

fn bar_chart(group: Group, x: f64, mean: f64, color: Color32) -> BarChart {
    let bar = Bar::new(x, mean).width(BAR_WIDTH).name(group.label());
    BarChart::new(group.label(), vec![bar]).color(color)
}

fn whisker(x: f64, mean: f64, std: f64) -> Vec<Line> {
    let (lo, hi) = (mean - std, mean + std);
    let stem: PlotPoints = vec![[x, lo], [x, hi]].into();
    let cap_lo: PlotPoints = vec![[x - WHISKER_CAP, lo], [x + WHISKER_CAP, lo]].into();
    let cap_hi: PlotPoints = vec![[x - WHISKER_CAP, hi], [x + WHISKER_CAP, hi]].into();
    [stem, cap_lo, cap_hi]
        .into_iter()
        .map(|points| Line::new("", points).color(Color32::DARK_GRAY).width(1.5))
        .collect()
}

fn group_axis_formatter(groups: &[Group]) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String + 'static {
    let labels: Vec<String> = groups.iter().map(|g| g.label().to_string()).collect();
    move |mark, _range| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels
            .get(rounded as usize)
            .cloned()
            .unwrap_or_default()
    }
}

/// Category-view chart: all four groups plus significance markers.
pub fn feature_chart(ui: &mut egui::Ui, record: &FeatureRecord) {
    let groups = Group::ALL;
    let (y_min, y_max) = span(record, &groups);
    let pairs = record.significant_pairs();
    let layout = MarkerLayout::from_span(y_min, y_max, pairs.len());

    ui.label(RichText::new(format!("{} (Mean ± SD)", record.name)).strong());

    Plot::new(format!("feature_{}", record.name))
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .allow_drag(false)
        .include_x(-0.5)
        .include_x(groups.len() as f64 - 0.5)
        .include_y(y_min)
        .include_y(y_max)
        .include_y(layout.axis_bound())
        .x_axis_formatter(group_axis_formatter(&groups))
        .x_axis_label("Group")
        .y_axis_label("Mean Value")
        .show(ui, |plot_ui| {
            for group in groups {
                let x = group.index() as f64;
                let stat = record.stat(group);
                plot_ui.bar_chart(bar_chart(group, x, stat.mean, GROUP_COLORS[group.index()]));
                for line in whisker(x, stat.mean, stat.std) {
                    plot_ui.line(line);
                }
            }
            for (i, pair) in pairs.iter().enumerate() {
                marker(plot_ui, *pair, i, layout.line_y(i));
            }
        });
}

/// Pair-view chart: the two compared groups only, no marker overlay.
pub fn pair_chart(ui: &mut egui::Ui, record: &FeatureRecord, pair: GroupPair) {
    let (a, b) = pair.members();
    let groups = [a, b];
    let (y_min, y_max) = span(record, &groups);

    ui.label(RichText::new(format!("{} (Mean ± SD)", record.name)).strong());

    Plot::new(format!("pair_{}", record.name))
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .allow_drag(false)
        .include_x(-0.5)
        .include_x(1.5)
        .include_y(y_min)
        .include_y(y_max)
        .x_axis_formatter(group_axis_formatter(&groups))
        .x_axis_label("Group")
        .y_axis_label("Mean Value")
        .show(ui, |plot_ui| {
            for (x, group) in groups.into_iter().enumerate() {
                let stat = record.stat(group);
                plot_ui.bar_chart(bar_chart(
                    group,
                    x as f64,
                    stat.mean,
                    GROUP_COLORS[group.index()],
                ));
                for line in whisker(x as f64, stat.mean, stat.std) {
                    plot_ui.line(line);
                }
            }
        });
}

// Horizontal line between the two compared groups, asterisk centered above.
fn marker(plot_ui: &mut egui_plot::PlotUi, pair: GroupPair, index: usize, y: f64) {
    let (a, b) = pair.members();
    let (x1, x2) = (a.index() as f64, b.index() as f64);
    let color = MARKER_COLORS[index % MARKER_COLORS.len()];

    let points: PlotPoints = vec![[x1, y], [x2, y]].into();
    plot_ui.line(Line::new(pair.label(), points).color(color).width(2.0));
    plot_ui.text(
        Text::new(
            "",
            PlotPoint::new((x1 + x2) / 2.0, y),
            RichText::new("*").size(16.0).color(color),
        )
        .anchor(Align2::CENTER_BOTTOM),
    );
}
