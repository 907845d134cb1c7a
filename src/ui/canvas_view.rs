use egui::{Color32, Sense, Ui};

use crate::config::display::ColorsConfig;
use crate::core::vector::Vec3;
use crate::rendering::scene2d::draw_scene2d;
use crate::rendering::surface::{CanvasRect, PainterSurface};
use crate::view::transform::ViewTransform;

/// 指针停留处的逻辑坐标（状态栏读数用）
#[derive(Debug, Clone, Copy)]
pub struct HoverInfo {
    pub x: f64,
    pub y: f64,
}

/// 2D 画布：拖拽平移、滚轮以光标为锚缩放，然后整帧重画场景。
pub fn show_canvas2d(
    ui: &mut Ui,
    vt: &mut ViewTransform,
    a: Vec3,
    b: Vec3,
    result: Option<(Vec3, &str)>,
    show_grid: bool,
    colors: &ColorsConfig,
) -> Option<HoverInfo> {
    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, Sense::click_and_drag());

    let canvas = CanvasRect::new([rect.left(), rect.top()], [rect.width(), rect.height()]);
    let center = canvas.center();

    // ── drag to pan ──────────────────────────────────────────
    if response.dragged() {
        let delta = response.drag_delta();
        vt.pan(delta.x, delta.y);
    }

    // ── scroll wheel to zoom (anchored at cursor) ────────────
    let hovered = response.hovered() || response.dragged();
    if hovered {
        let scroll = ui.ctx().input(|i| i.smooth_scroll_delta);
        if scroll.y.abs() > 0.5 {
            if let Some(pointer) = ui.ctx().input(|i| i.pointer.hover_pos()) {
                // 滚轮向上放大 ×1.1，向下缩小 ×0.9
                let factor = if scroll.y > 0.0 { 1.1 } else { 0.9 };
                vt.zoom_at(factor, [pointer.x, pointer.y], center);
            }
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
    let mut surface = PainterSurface::new(&painter);
    draw_scene2d(&mut surface, vt, canvas, a, b, result, show_grid, colors);

    // ── hover readout ────────────────────────────────────────
    let pointer = response.hover_pos()?;
    let (lx, ly) = vt.to_logical(pointer.x, pointer.y, center);
    Some(HoverInfo { x: lx, y: ly })
}
