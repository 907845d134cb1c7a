//! # 3D 场景绘制
//!
//! 与 2D 场景同职责的三维版本：地平面网格、坐标轴、A/B 向量箭头
//! （以及叉积结果向量），全部经 [`OrbitCamera`] 投影到像素后用
//! 2D 原语画出。即时模式下每帧整体重建，没有需要清理的保留对象。

use crate::config::display::ColorsConfig;
use crate::core::vector::Vec3;
use crate::rendering::scene2d::draw_arrow;
use crate::rendering::surface::{CanvasRect, DrawSurface, Rgba};
use crate::view::camera::OrbitCamera;

/// 网格/坐标轴覆盖的逻辑范围（单位）
const GRID_EXTENT: i32 = 10;

/// z=0 平面上的方格网
fn draw_grid_plane(
    surface: &mut dyn DrawSurface,
    cam: &OrbitCamera,
    rect: CanvasRect,
    colors: &ColorsConfig,
) {
    let center = rect.center();
    let dim = rect.min_dim();
    let s = GRID_EXTENT as f64;

    for i in -GRID_EXTENT..=GRID_EXTENT {
        let t = i as f64;
        surface.line(
            cam.project(Vec3::new(t, -s, 0.0), center, dim),
            cam.project(Vec3::new(t, s, 0.0), center, dim),
            1.0,
            colors.grid,
        );
        surface.line(
            cam.project(Vec3::new(-s, t, 0.0), center, dim),
            cam.project(Vec3::new(s, t, 0.0), center, dim),
            1.0,
            colors.grid,
        );
    }
}

/// 三条过原点的坐标轴，正方向端点标 X/Y/Z
fn draw_axes(
    surface: &mut dyn DrawSurface,
    cam: &OrbitCamera,
    rect: CanvasRect,
    colors: &ColorsConfig,
) {
    let center = rect.center();
    let dim = rect.min_dim();
    let s = GRID_EXTENT as f64;

    let axes = [
        (Vec3::new(s, 0.0, 0.0), "X"),
        (Vec3::new(0.0, s, 0.0), "Y"),
        (Vec3::new(0.0, 0.0, s), "Z"),
    ];
    for (end, label) in axes {
        surface.line(
            cam.project(end.neg(), center, dim),
            cam.project(end, center, dim),
            2.0,
            colors.axis,
        );
        let tip = cam.project(end, center, dim);
        surface.text([tip[0] + 6.0, tip[1]], 14.0, label, colors.axis_label);
    }
}

/// 投影后的向量箭头 + 标签 + 三维坐标读数。严格零向量不画。
fn draw_vector(
    surface: &mut dyn DrawSurface,
    cam: &OrbitCamera,
    rect: CanvasRect,
    v: Vec3,
    color: Rgba,
    label: &str,
    coord_color: Rgba,
) {
    if v.is_zero() {
        return;
    }
    let center = rect.center();
    let dim = rect.min_dim();
    let from = cam.project(Vec3::ZERO, center, dim);
    let to = cam.project(v, center, dim);

    draw_arrow(surface, from, to, 3.0, color);
    surface.text([to[0] + 12.0, to[1] - 6.0], 16.0, label, color);
    surface.text(
        [to[0] + 12.0, to[1] + 12.0],
        12.0,
        &format!("({:.1}, {:.1}, {:.1})", v.x, v.y, v.z),
        coord_color,
    );
}

/// 整个 3D 场景。`result` 目前只在叉积时出现。
pub fn draw_scene3d(
    surface: &mut dyn DrawSurface,
    cam: &OrbitCamera,
    rect: CanvasRect,
    a: Vec3,
    b: Vec3,
    result: Option<(Vec3, &str)>,
    show_grid: bool,
    colors: &ColorsConfig,
) {
    if show_grid {
        draw_grid_plane(surface, cam, rect, colors);
    }
    draw_axes(surface, cam, rect, colors);

    draw_vector(surface, cam, rect, a, colors.vector_a, "A", colors.coord_label);
    draw_vector(surface, cam, rect, b, colors.vector_b, "B", colors.coord_label);
    if let Some((r, label)) = result {
        draw_vector(surface, cam, rect, r, colors.result, label, colors.coord_label);
    }
}
