//! Viewport transform and multi-viewer synchronization core for slicing
//! 3D scalar volumes.

pub mod command;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod io;
pub mod render;
pub mod slice;
pub mod sync;
pub mod viewer;
pub mod viewport;
pub mod volume;
