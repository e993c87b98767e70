//! Per-viewer renderable state and the display/image coordinate mapping.

pub mod mapper;
pub mod state;

pub use mapper::{CoordinateMapper, RenderGeometry};
pub use state::{ViewportState, WindowLevel};
