use std::collections::HashMap;
use std::sync::mpsc;

use interdit_core::command::{Command, Origin};
use interdit_core::sync::{ChangeEvent, ViewerGroup};
use interdit_core::viewer::ViewerId;

use crate::convert::raster_to_color_image;
use crate::messages::TaskResult;
use crate::panels;
use crate::states::{UIState, ViewerTexture};

pub struct InterditApp {
    pub group: ViewerGroup,
    pub ui_state: UIState,
    pub textures: HashMap<ViewerId, ViewerTexture>,
    pub event_rx: mpsc::Receiver<ChangeEvent>,
    pub result_tx: mpsc::Sender<TaskResult>,
    pub result_rx: mpsc::Receiver<TaskResult>,
}

impl InterditApp {
    pub fn new(ctx: &egui::Context, mut group: ViewerGroup, names: Vec<String>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        group.subscribe(move |event| {
            let _ = event_tx.send(*event);
        });
        let (result_tx, result_rx) = mpsc::channel();

        let mut ui_state = UIState::default();
        for (id, name) in group.ids().into_iter().zip(names) {
            ui_state.names.insert(id, name);
        }
        for viewer in group.viewers() {
            let (nx, ny, nz) = viewer.volume().dims();
            let (min, max) = viewer.volume().value_range();
            ui_state.add_log(format!(
                "Opened {}: {nx}x{ny}x{nz}, values {min}..{max}",
                ui_state.name(viewer.id())
            ));
        }
        ctx.request_repaint();

        Self {
            group,
            ui_state,
            textures: HashMap::new(),
            event_rx,
            result_tx,
            result_rx,
        }
    }

    /// Drain change notifications and helper-thread results into the log.
    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            // Drags emit a pan per frame; keep them out of the log.
            if matches!(event.command, Command::PanBy { .. }) {
                continue;
            }
            let suffix = match event.origin {
                Origin::External => "",
                Origin::Internal => " (synced)",
            };
            let name = self.ui_state.name(event.viewer);
            self.ui_state
                .add_log(format!("{name}: {}{suffix}", event.command));
        }

        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                TaskResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                TaskResult::ConfigExported { path } => {
                    self.ui_state
                        .add_log(format!("Config exported: {}", path.display()));
                }
                TaskResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Texture for a viewer's latest raster, re-uploaded when its render
    /// generation moved on.
    pub fn texture_for(&mut self, ctx: &egui::Context, id: ViewerId) -> Option<egui::TextureId> {
        let viewer = self.group.viewer(id)?;
        let raster = viewer.frame()?;
        let generation = viewer.generation();

        match self.textures.get_mut(&id) {
            Some(tex) if tex.generation == generation => {}
            Some(tex) => {
                tex.handle
                    .set(raster_to_color_image(raster), egui::TextureOptions::NEAREST);
                tex.generation = generation;
            }
            None => {
                let handle = ctx.load_texture(
                    format!("viewer-{}", id.get()),
                    raster_to_color_image(raster),
                    egui::TextureOptions::NEAREST,
                );
                self.textures
                    .insert(id, ViewerTexture { generation, handle });
            }
        }
        self.textures.get(&id).map(|tex| tex.handle.id())
    }
}

impl eframe::App for InterditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();

        panels::menu_bar::show(ctx, self);
        panels::sync_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewers::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Interdit")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Interdit");
                        ui.label("Side-by-side volume slice viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
