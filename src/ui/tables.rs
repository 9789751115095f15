//! ui/tables.rs — companion significance table and demographics grid.

use egui::ScrollArea;

use crate::data::record::{DemoTable, FeatureRecord, GroupPair};

/// One row per pairwise comparison. The ANOVA p, Kruskal p and eta-squared
/// columns repeat the record's per-feature values on every row: no per-pair
/// statistics exist upstream.
pub fn significance_table(ui: &mut egui::Ui, record: &FeatureRecord) {
    egui::Grid::new(format!("sig_{}", record.name))
        .striped(true)
        .min_col_width(80.0)
        .show(ui, |ui| {
            ui.strong("Comparison");
            ui.strong("Significant");
            ui.strong("ANOVA P");
            ui.strong("Kruskal P");
            ui.strong("Eta-Squared");
            ui.end_row();

            for pair in GroupPair::ALL {
                ui.label(pair.label());
                ui.label(if record.is_significant(pair) { "Yes" } else { "No" });
                ui.label(format!("{:.4}", record.anova_p));
                ui.label(format!("{:.4}", record.kruskal_p));
                ui.label(format!("{:.4}", record.eta_squared));
                ui.end_row();
            }
        });
}

/// The demographics sheet, unfiltered.
pub fn demographics_table(ui: &mut egui::Ui, demo: &DemoTable) {
    if demo.header.is_empty() {
        ui.label("Demographics sheet is empty.");
        return;
    }
    ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("demographics_grid")
            .striped(true)
            .min_col_width(60.0)
            .show(ui, |ui| {
                for column in &demo.header {
                    ui.strong(column);
                }
                ui.end_row();

                for row in &demo.rows {
                    for cell in row {
                        ui.label(cell);
                    }
                    ui.end_row();
                }
            });
    });
}
