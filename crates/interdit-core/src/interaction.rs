//! Pointer-driven pan / zoom-select state machine.
//!
//! The controller never touches viewport state directly: it turns pointer
//! events into [`Command`]s (or a transient overlay) and the owner applies
//! them with an origin tag.

use tracing::debug;

use crate::command::Command;
use crate::consts::DEFAULT_ZOOM_MIN_EXTENT;
use crate::geometry::{Point, Rect, ViewRect};
use crate::viewport::{CoordinateMapper, RenderGeometry};

/// Active pointer tool. Pan and Zoom are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    None,
    Pan,
    Zoom,
}

/// State captured on pointer-down, dropped on pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_image_pos: Point,
    pub start_view_rect: ViewRect,
    /// Geometry at pointer-down. Pan offsets are measured against it so the
    /// content stays under the pointer while the view moves.
    pub start_geometry: RenderGeometry,
    pub tool: Tool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What a pointer event asks the owner to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    Nothing,
    Apply(Command),
    /// Selection rectangle to draw over the current frame, in display coords.
    Overlay(Rect),
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    tool: Tool,
    state: InteractionState,
    zoom_min_extent: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_MIN_EXTENT)
    }
}

impl InteractionController {
    pub fn new(zoom_min_extent: f32) -> Self {
        Self {
            tool: Tool::None,
            state: InteractionState::Idle,
            zoom_min_extent,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Select `tool`, or deselect it if it is already active.
    pub fn toggle_tool(&mut self, tool: Tool) -> Tool {
        self.tool = if self.tool == tool { Tool::None } else { tool };
        self.tool
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging(_))
    }

    /// Drop any drag in progress. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = InteractionState::Idle;
        was_dragging
    }

    /// Start a drag if `pos` lies on the rendered frame.
    pub fn pointer_down(
        &mut self,
        pos: Point,
        mapper: &CoordinateMapper,
        view_rect: ViewRect,
    ) -> bool {
        let Some(geometry) = mapper.geometry().copied() else {
            return false;
        };
        if !geometry.display_rect.contains(pos) {
            return false;
        }
        self.state = InteractionState::Dragging(DragSession {
            start_image_pos: geometry.to_image(pos),
            start_view_rect: view_rect,
            start_geometry: geometry,
            tool: self.tool,
        });
        true
    }

    pub fn pointer_move(
        &mut self,
        pos: Point,
        mapper: &CoordinateMapper,
        current_view: ViewRect,
    ) -> Interaction {
        let InteractionState::Dragging(session) = self.state else {
            return Interaction::Nothing;
        };

        match session.tool {
            Tool::None => Interaction::Nothing,
            Tool::Pan => {
                // Dragging right/down moves the view left/up.
                let p = session.start_geometry.to_image(pos);
                let target_x = session.start_view_rect.x_min + (session.start_image_pos.x - p.x);
                let target_y = session.start_view_rect.y_min + (session.start_image_pos.y - p.y);
                let dx = target_x - current_view.x_min;
                let dy = target_y - current_view.y_min;
                if dx == 0.0 && dy == 0.0 {
                    Interaction::Nothing
                } else {
                    Interaction::Apply(Command::PanBy { dx, dy })
                }
            }
            Tool::Zoom => {
                let a = mapper.from_image(session.start_image_pos);
                let b = mapper.from_image(mapper.to_image(pos));
                Interaction::Overlay(Rect::from_corners(a, b))
            }
        }
    }

    /// Finish the drag. Only a zoom selection produces a command here; pan
    /// was applied incrementally while moving.
    pub fn pointer_up(
        &mut self,
        pos: Point,
        mapper: &CoordinateMapper,
        slice_size: (usize, usize),
    ) -> Interaction {
        let InteractionState::Dragging(session) = std::mem::take(&mut self.state) else {
            return Interaction::Nothing;
        };

        match session.tool {
            Tool::Zoom => self
                .zoom_selection(session.start_image_pos, mapper.to_image(pos), slice_size)
                .map_or(Interaction::Nothing, |rect| {
                    Interaction::Apply(Command::SetViewRect(rect))
                }),
            Tool::Pan | Tool::None => Interaction::Nothing,
        }
    }

    fn zoom_selection(&self, a: Point, b: Point, (w, h): (usize, usize)) -> Option<ViewRect> {
        let rect = ViewRect::new(a.x.min(b.x), a.x.max(b.x), a.y.min(b.y), a.y.max(b.y))
            .clamped(w, h);
        if rect.width() > self.zoom_min_extent && rect.height() > self.zoom_min_extent {
            Some(rect)
        } else {
            debug!(?rect, "rejecting zoom selection below minimum extent");
            None
        }
    }
}
