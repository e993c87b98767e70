mod ui;
mod viewer;

pub use ui::{HoverInfo, UIState};
pub use viewer::{ViewerTexture, WindowText};
