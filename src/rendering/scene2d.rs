//! # 2D 场景绘制
//!
//! 给定视图变换与当前向量，把网格、坐标轴、带箭头的向量和标签
//! 画到 [`DrawSurface`] 上。每帧从状态完整重画，不做增量 diff，
//! 因此相同 (视图, 向量, 运算) 必然产生相同的绘制指令序列。

use crate::config::display::ColorsConfig;
use crate::core::vector::Vec3;
use crate::rendering::surface::{CanvasRect, DrawSurface, Rgba};
use crate::view::transform::ViewTransform;

/// 箭头头部长度上限（像素）
const MAX_HEAD_LEN: f32 = 20.0;

/// 画一支带三角头的箭头。头部长度取 min(20px, 线长的 30%)，
/// 方向角用 atan2 求出。过短（< 1px）不画。
pub fn draw_arrow(
    surface: &mut dyn DrawSurface,
    from: [f32; 2],
    to: [f32; 2],
    width: f32,
    color: Rgba,
) {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    let len = dx.hypot(dy);
    if len < 1.0 {
        return;
    }

    surface.line(from, to, width, color);

    let angle = dy.atan2(dx);
    let head = MAX_HEAD_LEN.min(len * 0.3);
    let left = angle - std::f32::consts::FRAC_PI_6;
    let right = angle + std::f32::consts::FRAC_PI_6;
    surface.polygon(
        &[
            to,
            [to[0] - head * left.cos(), to[1] - head * left.sin()],
            [to[0] - head * right.cos(), to[1] - head * right.sin()],
        ],
        color,
    );
}

/// 网格线：间距等于 scale（一格一单位），随平移取模对齐，
/// 沿坐标轴标整数刻度。
fn draw_grid(
    surface: &mut dyn DrawSurface,
    vt: &ViewTransform,
    rect: CanvasRect,
    colors: &ColorsConfig,
) {
    let spacing = vt.scale;
    let [ox, oy] = vt.origin(rect.center());

    // 竖线：从原点向左右取模推到画布边缘
    let mut x = rect.min[0] + ((ox - rect.min[0]) % spacing + spacing) % spacing;
    while x < rect.right() {
        surface.line([x, rect.min[1]], [x, rect.bottom()], 1.0, colors.grid);
        x += spacing;
    }

    // 横线
    let mut y = rect.min[1] + ((oy - rect.min[1]) % spacing + spacing) % spacing;
    while y < rect.bottom() {
        surface.line([rect.min[0], y], [rect.right(), y], 1.0, colors.grid);
        y += spacing;
    }

    // x 轴刻度数字（0 不标，留给原点）
    let i_min = ((rect.min[0] - ox) / spacing).ceil() as i32;
    let i_max = ((rect.right() - ox) / spacing).floor() as i32;
    for i in i_min..=i_max {
        if i == 0 {
            continue;
        }
        let x = ox + i as f32 * spacing;
        surface.text([x + 3.0, oy - 8.0], 10.0, &i.to_string(), colors.grid_label);
    }

    // y 轴刻度数字
    let j_min = ((oy - rect.bottom()) / spacing).ceil() as i32;
    let j_max = ((oy - rect.min[1]) / spacing).floor() as i32;
    for j in j_min..=j_max {
        if j == 0 {
            continue;
        }
        let y = oy - j as f32 * spacing;
        surface.text([ox + 5.0, y], 10.0, &j.to_string(), colors.grid_label);
    }
}

/// 过变换后原点的两条坐标轴与 X/Y/O 标注
fn draw_axes(
    surface: &mut dyn DrawSurface,
    vt: &ViewTransform,
    rect: CanvasRect,
    colors: &ColorsConfig,
) {
    let [ox, oy] = vt.origin(rect.center());

    surface.line([rect.min[0], oy], [rect.right(), oy], 2.0, colors.axis);
    surface.line([ox, rect.min[1]], [ox, rect.bottom()], 2.0, colors.axis);

    surface.text([rect.right() - 25.0, oy - 10.0], 14.0, "X", colors.axis_label);
    surface.text([ox + 10.0, rect.min[1] + 20.0], 14.0, "Y", colors.axis_label);
    surface.text([ox + 10.0, oy - 10.0], 14.0, "O", colors.axis_label);
}

/// 一支向量：箭头 + 名字标签 + 坐标读数。
/// x、y 皆为零的向量不画（没有方向可言）。
/// `label_offset` 把标签在竖向上错开，避免多支向量标签重叠。
fn draw_vector(
    surface: &mut dyn DrawSurface,
    vt: &ViewTransform,
    rect: CanvasRect,
    v: Vec3,
    color: Rgba,
    label: &str,
    label_offset: f32,
    coord_color: Rgba,
) {
    if v.is_zero_2d() {
        return;
    }
    let center = rect.center();
    let from = vt.origin(center);
    let to = vt.to_screen(v.x, v.y, center);

    draw_arrow(surface, from, to, 3.0, color);

    surface.text([to[0] + 12.0, to[1] - 6.0 + label_offset], 16.0, label, color);
    surface.text(
        [to[0] + 12.0, to[1] + 12.0 + label_offset],
        12.0,
        &format!("({:.1}, {:.1})", v.x, v.y),
        coord_color,
    );
}

/// 整个 2D 场景。`result` 为求和/求差的结果向量及其标签。
pub fn draw_scene2d(
    surface: &mut dyn DrawSurface,
    vt: &ViewTransform,
    rect: CanvasRect,
    a: Vec3,
    b: Vec3,
    result: Option<(Vec3, &str)>,
    show_grid: bool,
    colors: &ColorsConfig,
) {
    if show_grid {
        draw_grid(surface, vt, rect, colors);
    }
    draw_axes(surface, vt, rect, colors);

    draw_vector(surface, vt, rect, a, colors.vector_a, "A", 0.0, colors.coord_label);
    draw_vector(surface, vt, rect, b, colors.vector_b, "B", 25.0, colors.coord_label);
    if let Some((r, label)) = result {
        draw_vector(surface, vt, rect, r, colors.result, label, 50.0, colors.coord_label);
    }

    // 原点标记
    let origin = vt.origin(rect.center());
    surface.circle(origin, 6.0, colors.origin_fill, 2.0, colors.origin_stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::display::load_display_config;
    use crate::rendering::surface::{DrawCmd, RecordingSurface};

    fn colors() -> ColorsConfig {
        load_display_config().unwrap().colors
    }

    fn rect() -> CanvasRect {
        CanvasRect::new([0.0, 0.0], [800.0, 600.0])
    }

    fn render(a: Vec3, b: Vec3, result: Option<(Vec3, &str)>, grid: bool) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        let vt = ViewTransform::default();
        draw_scene2d(&mut surface, &vt, rect(), a, b, result, grid, &colors());
        surface
    }

    #[test]
    fn zero_vectors_draw_no_arrows() {
        let surface = render(Vec3::ZERO, Vec3::ZERO, None, false);
        assert!(surface.polygons().is_empty());
        // 只剩坐标轴两条线
        assert_eq!(surface.lines().len(), 2);
    }

    #[test]
    fn each_visible_vector_gets_arrowhead_and_labels() {
        let surface = render(
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, 0.0),
            Some((Vec3::new(2.0, 6.0, 0.0), "A+B")),
            false,
        );
        assert_eq!(surface.polygons().len(), 3);
        let texts = surface.texts();
        assert!(texts.contains(&"A"));
        assert!(texts.contains(&"B"));
        assert!(texts.contains(&"A+B"));
        assert!(texts.contains(&"(3.0, 4.0)"));
    }

    #[test]
    fn result_vector_uses_distinct_color() {
        let c = colors();
        let surface = render(
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::ZERO,
            Some((Vec3::new(1.0, 1.0, 0.0), "A+B")),
            false,
        );
        let polygon_colors: Vec<_> = surface
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Polygon { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert!(polygon_colors.contains(&c.vector_a));
        assert!(polygon_colors.contains(&c.result));
    }

    #[test]
    fn rendering_is_idempotent() {
        let a = Vec3::new(2.0, -3.0, 0.0);
        let b = Vec3::new(1.0, 1.0, 0.0);
        let first = render(a, b, Some((a.add(b), "A+B")), true);
        let second = render(a, b, Some((a.add(b), "A+B")), true);
        assert_eq!(first.commands, second.commands);
    }

    #[test]
    fn grid_lines_are_spaced_by_scale_and_follow_pan() {
        let c = colors();
        let grid_verticals = |s: &RecordingSurface| -> Vec<f32> {
            s.commands
                .iter()
                .filter_map(|cmd| match cmd {
                    DrawCmd::Line { from, to, color } if from[0] == to[0] && *color == c.grid => {
                        Some(from[0])
                    }
                    _ => None,
                })
                .collect()
        };

        let mut surface = RecordingSurface::new();
        let mut vt = ViewTransform::default();
        draw_scene2d(
            &mut surface,
            &vt,
            rect(),
            Vec3::ZERO,
            Vec3::ZERO,
            None,
            true,
            &colors(),
        );
        let vertical_xs = grid_verticals(&surface);
        // 间距恒等于 scale
        for pair in vertical_xs.windows(2) {
            assert!((pair[1] - pair[0] - vt.scale).abs() < 1e-3);
        }

        // 平移整格后网格位置不变（模 scale 对齐）
        vt.pan(vt.scale, 0.0);
        let mut shifted = RecordingSurface::new();
        draw_scene2d(
            &mut shifted,
            &vt,
            rect(),
            Vec3::ZERO,
            Vec3::ZERO,
            None,
            true,
            &colors(),
        );
        assert_eq!(vertical_xs, grid_verticals(&shifted));
    }

    #[test]
    fn arrowhead_never_exceeds_cap_or_fraction_of_length() {
        let mut surface = RecordingSurface::new();
        // 长向量：头部应封顶在 20px
        draw_arrow(&mut surface, [0.0, 0.0], [400.0, 0.0], 3.0, [255, 0, 0, 255]);
        // 短向量：头部应是线长的 30%
        draw_arrow(&mut surface, [0.0, 0.0], [10.0, 0.0], 3.0, [255, 0, 0, 255]);

        let heads: Vec<f32> = surface
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Polygon { points, .. } => {
                    let tip = points[0];
                    let base = points[1];
                    let d = (tip[0] - base[0]).hypot(tip[1] - base[1]);
                    Some(d)
                }
                _ => None,
            })
            .collect();
        assert!((heads[0] - 20.0).abs() < 1e-3);
        assert!((heads[1] - 3.0).abs() < 1e-3);
    }
}
