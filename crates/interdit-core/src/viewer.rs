use std::fmt;
use std::sync::Arc;

use image::GrayImage;
use tracing::warn;

use crate::command::{Command, PointerEvent};
use crate::config::ViewerConfig;
use crate::geometry::Rect;
use crate::interaction::{Interaction, InteractionController, Tool};
use crate::render::render_slice;
use crate::viewport::{CoordinateMapper, ViewportState};
use crate::volume::Volume;

/// Stable handle for a viewer inside a [`ViewerGroup`](crate::sync::ViewerGroup).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewerId(u32);

impl ViewerId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ViewerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewer {}", self.0)
    }
}

/// One volume on one display surface.
///
/// Every state-changing command and every resize re-renders inline; the last
/// good raster is kept when a render is skipped.
#[derive(Debug)]
pub struct Viewer {
    id: ViewerId,
    volume: Arc<Volume>,
    state: ViewportState,
    mapper: CoordinateMapper,
    controller: InteractionController,
    display_rect: Option<Rect>,
    frame: Option<GrayImage>,
    overlay: Option<Rect>,
    generation: u64,
}

impl Viewer {
    pub fn new(id: ViewerId, volume: Arc<Volume>, config: &ViewerConfig) -> Self {
        let state = ViewportState::new(&volume, config.orientation);
        Self {
            id,
            volume,
            state,
            mapper: CoordinateMapper::new(),
            controller: InteractionController::new(config.zoom_min_extent),
            display_rect: None,
            frame: None,
            overlay: None,
            generation: 0,
        }
    }

    pub fn id(&self) -> ViewerId {
        self.id
    }

    pub fn volume(&self) -> &Arc<Volume> {
        &self.volume
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn display_rect(&self) -> Option<Rect> {
        self.display_rect
    }

    /// Last successfully rendered raster.
    pub fn frame(&self) -> Option<&GrayImage> {
        self.frame.as_ref()
    }

    /// Zoom selection rectangle in display coordinates, while dragging.
    pub fn overlay(&self) -> Option<Rect> {
        self.overlay
    }

    /// Bumped on every successful render.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn slice_size(&self) -> (usize, usize) {
        self.state.slice_size(&self.volume)
    }

    pub fn max_slice_index(&self) -> usize {
        self.state.max_slice_index(&self.volume)
    }

    pub fn tool(&self) -> Tool {
        self.controller.tool()
    }

    pub(crate) fn toggle_tool(&mut self, tool: Tool) -> Tool {
        self.controller.toggle_tool(tool)
    }

    pub(crate) fn set_tool(&mut self, tool: Tool) {
        self.controller.set_tool(tool);
    }

    /// Set the display surface and re-render if it changed.
    pub(crate) fn resize(&mut self, display_rect: Rect) -> bool {
        if self.display_rect == Some(display_rect) {
            return false;
        }
        self.display_rect = Some(display_rect);
        self.render();
        true
    }

    /// Render into the current display surface. Returns whether a new frame
    /// was produced.
    pub fn render(&mut self) -> bool {
        self.overlay = None;
        let Some(display_rect) = self.display_rect else {
            return false;
        };
        match render_slice(&self.volume, &mut self.state, display_rect) {
            Ok(Some(frame)) => {
                self.mapper.record(frame.geometry);
                self.frame = Some(frame.raster);
                self.generation += 1;
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(viewer = %self.id, "render failed: {e}");
                false
            }
        }
    }

    /// Apply a command to the viewport state, re-rendering on change.
    pub(crate) fn apply(&mut self, command: &Command) -> bool {
        let volume = Arc::clone(&self.volume);
        let changed = match *command {
            Command::PanBy { dx, dy } => self.state.pan_by(&volume, dx, dy),
            Command::SetViewRect(rect) => self.state.set_view_rect(&volume, rect),
            Command::ResetView => self.state.reset_view(),
            Command::SetWindowLevel(window) => self.state.set_window_level(window),
            Command::SetOrientation(orientation) => {
                let changed = self.state.set_orientation(&volume, orientation);
                if changed {
                    self.controller.cancel();
                }
                changed
            }
            Command::SetSlice(index) => self.state.set_slice(&volume, index),
        };
        if changed {
            self.render();
        }
        changed
    }

    /// Feed a pointer event through the interaction controller. Returns the
    /// command the gesture produced, for the owner to dispatch.
    pub(crate) fn handle_pointer(&mut self, event: PointerEvent) -> Option<Command> {
        let view = self.state.resolved_view_rect(&self.volume);
        let outcome = match event {
            PointerEvent::Down(p) => {
                self.controller.pointer_down(p, &self.mapper, view);
                Interaction::Nothing
            }
            PointerEvent::Move(p) => self.controller.pointer_move(p, &self.mapper, view),
            PointerEvent::Up(p) => {
                self.overlay = None;
                let size = self.slice_size();
                self.controller.pointer_up(p, &self.mapper, size)
            }
        };

        match outcome {
            Interaction::Apply(command) => Some(command),
            Interaction::Overlay(rect) => {
                self.overlay = Some(rect);
                None
            }
            Interaction::Nothing => None,
        }
    }
}
