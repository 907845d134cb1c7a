use egui::{Color32, Sense, Ui};

use crate::config::display::ColorsConfig;
use crate::core::vector::Vec3;
use crate::rendering::scene3d::draw_scene3d;
use crate::rendering::surface::{CanvasRect, PainterSurface};
use crate::view::camera::OrbitCamera;

/// 3D 画布：拖拽驱动轨道相机，滚轮缩放相机距离。
/// 只有拖拽进行中才请求连续重绘，其余时间依赖 egui 的事件驱动刷新。
pub fn show_canvas3d(
    ui: &mut Ui,
    cam: &mut OrbitCamera,
    a: Vec3,
    b: Vec3,
    result: Option<(Vec3, &str)>,
    show_grid: bool,
    colors: &ColorsConfig,
) {
    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, Sense::click_and_drag());

    // ── drag to orbit ────────────────────────────────────────
    if response.dragged() {
        let delta = response.drag_delta();
        cam.orbit(delta.x, delta.y);
        ui.ctx().request_repaint();
    }

    // ── scroll wheel to dolly ────────────────────────────────
    if response.hovered() || response.dragged() {
        let scroll = ui.ctx().input(|i| i.smooth_scroll_delta);
        if scroll.y.abs() > 0.5 {
            // 向下滚拉远 ×1.1，向上滚拉近 ×0.9
            let factor = if scroll.y < 0.0 { 1.1 } else { 0.9 };
            cam.zoom(factor);
        }
    }

    // ── full redraw ──────────────────────────────────────────
    let painter = ui.painter_at(rect);
    let bg = colors.background;
    painter.rect_filled(
        rect,
        0.0,
        Color32::from_rgba_unmultiplied(bg[0], bg[1], bg[2], bg[3]),
    );
    let canvas = CanvasRect::new([rect.left(), rect.top()], [rect.width(), rect.height()]);
    let mut surface = PainterSurface::new(&painter);
    draw_scene3d(&mut surface, cam, canvas, a, b, result, show_grid, colors);
}
