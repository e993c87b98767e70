use interdit_core::command::{Command, Origin};
use interdit_core::interaction::Tool;
use interdit_core::io::image_io::save_raster;
use interdit_core::slice::Orientation;
use interdit_core::viewer::ViewerId;
use interdit_core::viewport::WindowLevel;

use crate::app::InterditApp;
use crate::messages::TaskResult;
use crate::panels::canvas;

pub fn show(ctx: &egui::Context, app: &mut InterditApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let ids = app.group.ids();
        if ids.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No volumes loaded")
                        .size(18.0)
                        .color(egui::Color32::from_gray(100)),
                );
            });
            return;
        }

        ui.columns(ids.len(), |columns| {
            for (ui, &id) in columns.iter_mut().zip(&ids) {
                viewer_column(ctx, ui, app, id);
            }
        });
    });
}

fn viewer_column(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut InterditApp, id: ViewerId) {
    let Some(viewer) = app.group.viewer(id) else {
        return;
    };
    let state = viewer.state().clone();
    let tool = viewer.tool();
    let max_slice = viewer.max_slice_index();
    let has_frame = viewer.frame().is_some();
    let (nx, ny, nz) = viewer.volume().dims();

    ui.horizontal(|ui| {
        ui.strong(app.ui_state.name(id));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small(format!("{nx}x{ny}x{nz}"));
        });
    });

    window_level_row(ui, app, id, state.window_level);

    ui.horizontal(|ui| {
        if ui.selectable_label(tool == Tool::Pan, "Pan").clicked() {
            app.group.toggle_tool(id, Tool::Pan);
        }
        if ui.selectable_label(tool == Tool::Zoom, "Zoom").clicked() {
            app.group.toggle_tool(id, Tool::Zoom);
        }
        if ui.button("Reset").clicked() {
            app.group.dispatch(id, Command::ResetView, Origin::External);
        }
        if ui
            .add_enabled(has_frame, egui::Button::new("Save PNG"))
            .clicked()
        {
            save_png(ctx, app, id);
        }
    });

    ui.horizontal(|ui| {
        for &orientation in Orientation::ALL {
            if ui
                .radio(state.orientation == orientation, orientation.to_string())
                .clicked()
                && state.orientation != orientation
            {
                app.group
                    .dispatch(id, Command::SetOrientation(orientation), Origin::External);
            }
        }
    });

    let mut slice = state.slice_index;
    if ui
        .add(egui::Slider::new(&mut slice, 0..=max_slice).text("Slice"))
        .changed()
    {
        app.group
            .dispatch(id, Command::SetSlice(slice), Origin::External);
    }

    canvas::show(ctx, ui, app, id);
}

/// Lo/hi fields. Both are committed together when either loses focus;
/// malformed text is dropped and the fields revert on the next frame.
fn window_level_row(ui: &mut egui::Ui, app: &mut InterditApp, id: ViewerId, window: WindowLevel) {
    let text = app.ui_state.window_text.entry(id).or_default();
    text.refresh(window);

    let mut commit = false;
    let mut editing = false;
    ui.horizontal(|ui| {
        ui.label("Lo");
        let lo = ui.add(egui::TextEdit::singleline(&mut text.lo).desired_width(72.0));
        ui.label("Hi");
        let hi = ui.add(egui::TextEdit::singleline(&mut text.hi).desired_width(72.0));
        commit = lo.lost_focus() || hi.lost_focus();
        editing = lo.has_focus() || hi.has_focus();
    });
    text.editing = editing;

    if commit {
        let (lo, hi) = (text.lo.clone(), text.hi.clone());
        app.group.commit_window_level_text(id, &lo, &hi);
    }
}

fn save_png(ctx: &egui::Context, app: &InterditApp, id: ViewerId) {
    let Some(raster) = app.group.viewer(id).and_then(|v| v.frame()).cloned() else {
        return;
    };
    let file_name = format!("viewer-{}.png", id.get());
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };
        let _ = result_tx.send(match save_raster(&raster, &path) {
            Ok(()) => TaskResult::ImageSaved { path },
            Err(e) => TaskResult::Error {
                message: e.to_string(),
            },
        });
        ctx.request_repaint();
    });
}
