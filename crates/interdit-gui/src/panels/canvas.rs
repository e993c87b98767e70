use interdit_core::command::{Command, Origin, PointerEvent};
use interdit_core::slice::extract_slice;
use interdit_core::viewer::ViewerId;

use crate::app::InterditApp;
use crate::convert::{to_core_rect, to_egui_rect, to_point};
use crate::states::HoverInfo;

const MIN_CANVAS: f32 = 64.0;

/// The viewer's display surface: sizes it, routes pointer and wheel input,
/// then paints the latest raster and the zoom selection.
pub fn show(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut InterditApp, id: ViewerId) {
    let size = ui.available_size().max(egui::vec2(MIN_CANVAS, MIN_CANVAS));
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let ppp = ctx.pixels_per_point();
    app.group.resize(id, to_core_rect(rect, ppp));

    handle_pointer(ui, &response, app, id, ppp);
    handle_scroll(ui, &response, app, id);
    update_hover(&response, app, id, ppp);

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));

    if let Some(texture_id) = app.texture_for(ctx, id) {
        painter.image(
            texture_id,
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    let Some(viewer) = app.group.viewer(id) else {
        return;
    };
    if let Some(overlay) = viewer.overlay() {
        painter.rect_stroke(
            to_egui_rect(overlay, ppp),
            0.0,
            egui::Stroke::new(1.5, egui::Color32::YELLOW),
            egui::StrokeKind::Outside,
        );
    }

    let state = viewer.state();
    painter.text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!("{} {}/{}", state.orientation, state.slice_index, viewer.max_slice_index()),
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut InterditApp,
    id: ViewerId,
    ppp: f32,
) {
    let primary = egui::PointerButton::Primary;

    if response.drag_started_by(primary) {
        let origin = ui.input(|i| i.pointer.press_origin());
        if let Some(pos) = origin.or(response.interact_pointer_pos()) {
            app.group.pointer(id, PointerEvent::Down(to_point(pos, ppp)));
        }
    }

    if response.dragged_by(primary) && response.drag_delta() != egui::Vec2::ZERO {
        if let Some(pos) = response.interact_pointer_pos() {
            app.group.pointer(id, PointerEvent::Move(to_point(pos, ppp)));
        }
    }

    if response.drag_stopped_by(primary) {
        let latest = ui.input(|i| i.pointer.latest_pos());
        if let Some(pos) = response.interact_pointer_pos().or(latest) {
            app.group.pointer(id, PointerEvent::Up(to_point(pos, ppp)));
        }
    }
}

/// One wheel notch steps one slice.
fn handle_scroll(ui: &egui::Ui, response: &egui::Response, app: &mut InterditApp, id: ViewerId) {
    if !response.hovered() {
        return;
    }
    let dy = ui.input(|i| i.raw_scroll_delta.y);
    if dy == 0.0 {
        return;
    }
    let Some(viewer) = app.group.viewer(id) else {
        return;
    };
    let current = viewer.state().slice_index;
    let next = if dy > 0.0 {
        current.saturating_add(1)
    } else {
        current.saturating_sub(1)
    };
    if next != current {
        app.group
            .dispatch(id, Command::SetSlice(next), Origin::External);
    }
}

fn update_hover(response: &egui::Response, app: &mut InterditApp, id: ViewerId, ppp: f32) {
    let Some(pos) = response.hover_pos() else {
        if matches!(app.ui_state.hover, Some(h) if h.viewer == id) {
            app.ui_state.hover = None;
        }
        return;
    };
    let Some(viewer) = app.group.viewer(id) else {
        return;
    };
    if !viewer.mapper().is_ready() {
        return;
    }

    let image = viewer.mapper().to_image(to_point(pos, ppp));
    let state = viewer.state();
    let value = if image.x >= 0.0 && image.y >= 0.0 {
        extract_slice(viewer.volume(), state.orientation, state.slice_index)
            .ok()
            .and_then(|slice| slice.get(image.y as usize, image.x as usize))
    } else {
        None
    };
    app.ui_state.hover = Some(HoverInfo {
        viewer: id,
        image,
        value,
    });
}
