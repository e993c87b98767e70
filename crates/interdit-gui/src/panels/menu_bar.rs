use crate::app::InterditApp;
use crate::messages::TaskResult;

pub fn show(ctx: &egui::Context, app: &mut InterditApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Save the group's config, with the sync flags as they are now.
fn export_config(ctx: &egui::Context, app: &InterditApp) {
    let mut config = app.group.config().clone();
    config.sync = app.group.policy();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("interdit.toml")
            .save_file()
        else {
            return;
        };
        let result = config
            .to_toml_string()
            .map_err(|e| e.to_string())
            .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
        let _ = result_tx.send(match result {
            Ok(()) => TaskResult::ConfigExported { path },
            Err(message) => TaskResult::Error { message },
        });
        ctx.request_repaint();
    });
}
