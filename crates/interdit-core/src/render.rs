use image::GrayImage;
use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{Rect, ViewRect};
use crate::slice::extract_slice;
use crate::viewport::{RenderGeometry, ViewportState};
use crate::volume::Volume;

/// One rendered frame plus the geometry it was rendered with.
#[derive(Clone, Debug)]
pub struct RenderedFrame {
    /// 8-bit grayscale, sized to the display rect.
    pub raster: GrayImage,
    pub geometry: RenderGeometry,
}

/// Render the current slice into a raster that exactly fills `display_rect`.
///
/// The crop is stretched to the display size ignoring aspect ratio, with
/// nearest-neighbor sampling. An unset view rect is resolved to the full
/// slice and written back into `state`.
///
/// Returns `Ok(None)` if the window level is invalid (`hi <= lo`) or the
/// display surface has no pixels; the caller keeps its previous frame.
pub fn render_slice(
    volume: &Volume,
    state: &mut ViewportState,
    display_rect: Rect,
) -> Result<Option<RenderedFrame>> {
    let slice = extract_slice(volume, state.orientation, state.slice_index)?;
    let view = *state
        .view_rect
        .get_or_insert_with(|| ViewRect::full(slice.width(), slice.height()));

    let window = state.window_level;
    if !window.is_valid() {
        debug!(lo = window.lo, hi = window.hi, "skipping render, invalid window level");
        return Ok(None);
    }

    let out_w = display_rect.width.round().max(0.0) as u32;
    let out_h = display_rect.height.round().max(0.0) as u32;
    if out_w == 0 || out_h == 0 {
        return Ok(None);
    }

    let (x0, x1) = crop_bounds(view.x_min, view.x_max, slice.width());
    let (y0, y1) = crop_bounds(view.y_min, view.y_max, slice.height());
    let cols = nearest_indices(x0, x1, out_w);
    let rows = nearest_indices(y0, y1, out_h);

    let mut raster = GrayImage::new(out_w, out_h);
    raster
        .par_chunks_mut(out_w as usize)
        .zip(rows.par_iter())
        .for_each(|(line, &row)| {
            for (px, &col) in line.iter_mut().zip(&cols) {
                *px = window.normalize(slice.data[[row, col]]);
            }
        });

    Ok(Some(RenderedFrame {
        raster,
        geometry: RenderGeometry {
            display_rect,
            image_rect: view.to_rect(),
        },
    }))
}

/// Truncate float bounds to a non-empty index range inside `0..extent`.
fn crop_bounds(min: f32, max: f32, extent: usize) -> (usize, usize) {
    let lo = (min.max(0.0) as usize).min(extent - 1);
    let hi = (max.max(0.0) as usize).min(extent).max(lo + 1);
    (lo, hi)
}

/// Source index for each of `out` destination pixels spread over `lo..hi`.
fn nearest_indices(lo: usize, hi: usize, out: u32) -> Vec<usize> {
    let span = (hi - lo) as u64;
    let out = out as u64;
    (0..out).map(|i| lo + (i * span / out) as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_bounds_truncates() {
        assert_eq!(crop_bounds(2.7, 9.9, 20), (2, 9));
        assert_eq!(crop_bounds(19.5, 20.0, 20), (19, 20));
        assert_eq!(crop_bounds(4.2, 4.6, 20), (4, 5));
    }

    #[test]
    fn test_nearest_indices_upscale() {
        assert_eq!(nearest_indices(3, 5, 4), vec![3, 3, 4, 4]);
    }

    #[test]
    fn test_nearest_indices_downscale() {
        assert_eq!(nearest_indices(0, 8, 4), vec![0, 2, 4, 6]);
    }
}
