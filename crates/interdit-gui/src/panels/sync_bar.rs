use interdit_core::sync::SyncFlag;

use crate::app::InterditApp;

pub fn show(ctx: &egui::Context, app: &mut InterditApp) {
    egui::TopBottomPanel::top("sync_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let policy = app.group.policy();
            for &flag in SyncFlag::ALL {
                let mut enabled = policy.get(flag);
                if ui.checkbox(&mut enabled, flag.to_string()).changed() {
                    app.group.set_sync(flag, enabled);
                    let state = if enabled { "on" } else { "off" };
                    app.ui_state.add_log(format!("{flag} {state}"));
                }
            }

            if let Some(reference) = app.group.reference() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("Reference: {}", app.ui_state.name(reference)));
                });
            }
        });
    });
}
