use crate::domain::rates::rate_point::RatePoint;

/// Renders the bucketed series as a two-column table
pub fn render_rate_table(ui: &mut egui::Ui, series: &[RatePoint], quote_currency: &str) {
    egui::ScrollArea::vertical()
        .id_salt("rate_table")
        .max_height(220.0)
        .show(ui, |ui| {
            egui::Grid::new("rate_table_grid")
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Date").strong());
                    ui.label(egui::RichText::new(format!("Rate ({quote_currency})")).strong());
                    ui.end_row();

                    for point in series {
                        ui.label(&point.date);
                        ui.label(format!("{:.2}", point.value));
                        ui.end_row();
                    }
                });
        });
}
