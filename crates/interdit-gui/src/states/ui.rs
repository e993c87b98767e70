use std::collections::HashMap;

use interdit_core::geometry::Point;
use interdit_core::viewer::ViewerId;

use super::viewer::WindowText;

const MAX_LOG_LINES: usize = 500;

/// Pixel under the pointer, for the status line.
#[derive(Clone, Copy)]
pub struct HoverInfo {
    pub viewer: ViewerId,
    pub image: Point,
    pub value: Option<f32>,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Display name per viewer (file name of its volume).
    pub names: HashMap<ViewerId, String>,

    /// Window-level text fields, per viewer.
    pub window_text: HashMap<ViewerId, WindowText>,

    pub hover: Option<HoverInfo>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    pub fn name(&self, id: ViewerId) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
