use interdit_core::viewport::WindowLevel;

/// Uploaded raster of one viewer, tagged with the render generation it came from.
pub struct ViewerTexture {
    pub generation: u64,
    pub handle: egui::TextureHandle,
}

/// Free-text lo/hi fields. Refreshed from the viewer while not being edited.
#[derive(Default)]
pub struct WindowText {
    pub lo: String,
    pub hi: String,
    pub editing: bool,
}

impl WindowText {
    pub fn refresh(&mut self, window: WindowLevel) {
        if !self.editing {
            self.lo = window.lo.to_string();
            self.hi = window.hi.to_string();
        }
    }
}
