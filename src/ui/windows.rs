//! ui/windows.rs — top-level layout: sidebar navigation and view dispatch.

use egui::{CentralPanel, RichText, ScrollArea, SidePanel, TopBottomPanel};

use crate::data::dataset::Dataset;
use crate::data::record::{Category, GroupPair};

use super::plots;
use super::tables;
use super::viewdata::View;

/// === Main window ===
pub fn main_window(ctx: &egui::Context, dataset: &Dataset, selected: &mut View) {
    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.heading("Gaitscope — Feature Comparison by Category");
    });

    SidePanel::left("nav").default_width(190.0).show(ctx, |ui| {
        ui.label(RichText::new("Views").strong());
        ui.separator();
        for view in View::all() {
            ui.selectable_value(selected, view, view.label());
        }
    });

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| match *selected {
            View::Overview => overview(ui, dataset),
            View::Subjects => {
                ui.heading("Subject Characteristics");
                ui.add_space(8.0);
                tables::demographics_table(ui, &dataset.demo);
            }
            View::Category(category) => category_view(ui, dataset, category),
            View::Pair(pair) => pair_view(ui, dataset, pair),
        });
    });
}

fn overview(ui: &mut egui::Ui, dataset: &Dataset) {
    let t = dataset.thresholds;

    ui.heading("Analysis criteria");
    ui.add_space(4.0);
    ui.label("Charts show each group's mean ± standard deviation (Mean ± SD).");
    ui.label("Significant differences between groups are marked with an asterisk (*).");
    ui.label(format!(
        "A feature is listed when all of the following hold: \
         ANOVA p < {}, Kruskal-Wallis p < {}, eta-squared ≥ {}.",
        t.anova_p_max, t.kruskal_p_max, t.eta_min
    ));
    ui.label("Double-click a chart to reset its scale.");

    ui.add_space(12.0);
    ui.heading("Categories");
    ui.add_space(4.0);

    section(ui, "Spatio-temporal", &[
        "Representative spatio-temporal gait parameters.",
        "Means, standard deviations and coefficients of variation of the time, \
         length and phase variables generated at each gait event.",
    ]);
    section(ui, "Kinematics", &[
        "Representative kinematic gait parameters.",
        "Variability and agreement of the ankle angle change between gait events.",
    ]);
    section(ui, "Tele-signal", &[
        "Communication-signal analysis applied to the stance and swing phases.",
        "Indices from per-signal processing converted into center-of-mass \
         fluctuation patterns to estimate muscle-pump efficiency.",
        "Center-of-mass fluctuation derived from instantaneous velocity under \
         inverted-pendulum modelling.",
    ]);
    section(ui, "Motor-identity", &[
        "Cross-correlation between IMU sensor signals modelling each subject's \
         characteristic movement pattern.",
        "Reflects head–pelvis–ankle balance and their orthogonal synchronization, \
         linking foot-level balance information to head movement.",
    ]);
    section(ui, "Frequency", &[
        "Frequency analysis of the subject's motion under a feedforward/feedback \
         control assumption, scoring the periodicity and coordination of movement.",
        "Regular motion patterns show low periodicity; complex patterns show high \
         periodicity, separating the dominant control mode.",
    ]);
    section(ui, "TUG", &[
        "S: distance from standing up to turning onset; patients start the turn \
         late, close to the target.",
        "ETR: effective turning radius; larger in patients.",
        "EMA: effective movement area covered during the turn; wider in patients.",
        "FN: Froude number, a dimensionless score of turning ability; lower in \
         patients.",
    ]);
}

fn section(ui: &mut egui::Ui, title: &str, lines: &[&str]) {
    ui.label(RichText::new(title).strong());
    for line in lines {
        ui.label(format!("  • {line}"));
    }
    ui.add_space(6.0);
}

fn category_view(ui: &mut egui::Ui, dataset: &Dataset, category: Category) {
    ui.heading(format!("Category: {}", category.label()));
    ui.add_space(8.0);

    let rows = dataset.category_rows(category);
    if rows.is_empty() {
        ui.label("No features pass the significance criteria in this category.");
        return;
    }
    for record in rows {
        plots::feature_chart(ui, record);
        ui.add_space(4.0);
        tables::significance_table(ui, record);
        ui.add_space(12.0);
        ui.separator();
    }
}

fn pair_view(ui: &mut egui::Ui, dataset: &Dataset, pair: GroupPair) {
    ui.heading(format!("Group Comparison: {}", pair.label()));
    ui.add_space(8.0);

    let rows = dataset.pair_rows(pair);
    if rows.is_empty() {
        ui.label("No features separate these two groups.");
        return;
    }
    for record in rows {
        plots::pair_chart(ui, record, pair);
        ui.add_space(12.0);
        ui.separator();
    }
}
