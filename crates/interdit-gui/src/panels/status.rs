use crate::app::InterditApp;

pub fn show(ctx: &egui::Context, app: &mut InterditApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.separator();

        // Status line
        ui.horizontal(|ui| {
            ui.label(format!("{} viewers", app.group.len()));
            if let Some(hover) = app.ui_state.hover {
                ui.separator();
                ui.label(app.ui_state.name(hover.viewer));
                ui.separator();
                ui.label(format!("x {:.1}  y {:.1}", hover.image.x, hover.image.y));
                if let Some(value) = hover.value {
                    ui.separator();
                    ui.label(format!("value {value}"));
                }
            }
        });

        ui.add_space(2.0);
    });
}
