use crate::domain::rates::comparison::ComparisonRecord;

/// Renders completed comparisons; draws nothing while there are none
pub fn render_comparison_table(ui: &mut egui::Ui, comparisons: &[ComparisonRecord]) {
    if comparisons.is_empty() {
        return;
    }

    ui.add_space(8.0);
    ui.heading("Comparisons");
    egui::Grid::new("comparison_table_grid")
        .striped(true)
        .min_col_width(90.0)
        .show(ui, |ui| {
            for header in ["Date 1", "Rate 1", "Date 2", "Rate 2", "Change", "Change (%)"] {
                ui.label(egui::RichText::new(header).strong());
            }
            ui.end_row();

            for record in comparisons {
                ui.label(&record.first.date);
                ui.label(format!("{:.2}", record.first.value));
                ui.label(&record.second.date);
                ui.label(format!("{:.2}", record.second.value));
                ui.label(record.absolute_display());
                ui.label(record.percent_display());
                ui.end_row();
            }
        });
}
