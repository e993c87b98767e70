#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use interdit_core::config::ViewerConfig;
use interdit_core::geometry::Rect;
use interdit_core::sync::ViewerGroup;
use interdit_core::viewer::ViewerId;
use interdit_core::volume::Volume;
use ndarray::Array3;

/// Volume whose sample at `(x, y, z)` is `x + 10*y + 100*z`.
pub fn ramp_volume(nx: usize, ny: usize, nz: usize) -> Volume {
    let data = Array3::from_shape_fn((nz, ny, nx), |(z, y, x)| (x + 10 * y + 100 * z) as f32);
    Volume::from_array(data).unwrap()
}

pub fn constant_volume(nx: usize, ny: usize, nz: usize, value: f32) -> Volume {
    Volume::from_array(Array3::from_elem((nz, ny, nx), value)).unwrap()
}

/// Write raw little-endian f32 samples to `dir/name`.
pub fn write_raw_file(dir: &Path, name: &str, samples: &[f32]) -> PathBuf {
    let path = dir.join(name);
    let bytes: Vec<u8> = samples.iter().flat_map(|v| v.to_le_bytes()).collect();
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Display surface at the origin.
pub fn display(width: f32, height: f32) -> Rect {
    Rect::new(0.0, 0.0, width, height)
}

/// A group over `volumes`, each viewer rendered once into `surface`.
pub fn rendered_group(volumes: Vec<Volume>, surface: Rect) -> (ViewerGroup, Vec<ViewerId>) {
    rendered_group_with(volumes, surface, ViewerConfig::default())
}

pub fn rendered_group_with(
    volumes: Vec<Volume>,
    surface: Rect,
    config: ViewerConfig,
) -> (ViewerGroup, Vec<ViewerId>) {
    let mut group = ViewerGroup::with_volumes(volumes.into_iter().map(Arc::new), config);
    let ids = group.ids();
    for &id in &ids {
        group.resize(id, surface);
    }
    (group, ids)
}
