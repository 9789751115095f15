use crate::data::dataset::Dataset;
use crate::ui::viewdata::View;

/// The viewer shell: an immutable dataset and the selected view. All data
/// work happened before the window opened; update() only draws.
pub struct App {
    dataset: Dataset,
    view: View,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: Dataset) -> Self {
        cc.egui_ctx.set_pixels_per_point(1.25);
        Self {
            dataset,
            view: View::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::windows::main_window(ctx, &self.dataset, &mut self.view);
    }
}
