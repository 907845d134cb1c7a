//! # 2D 视图变换
//!
//! 逻辑坐标（向量单位）与画布像素坐标之间的映射，以及平移/缩放状态。
//! 完全不依赖渲染表面，可脱离 UI 单测。
//!
//! 约定：
//! - `px = center.x + offset.x + x * scale`
//! - `py = center.y + offset.y - y * scale`（屏幕 y 轴向下，翻转）
//! - `scale` 在任何变更后都被夹在 `[min_scale, max_scale]`
//! - 平移无界，随拖拽累积

use crate::core::vector::Vec3;

#[derive(Debug, Clone)]
pub struct ViewTransform {
    /// 像素平移（加在画布中心上）
    pub offset: [f32; 2],
    /// 像素/单位
    pub scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    default_scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(40.0, 10.0, 200.0)
    }
}

impl ViewTransform {
    pub fn new(default_scale: f32, min_scale: f32, max_scale: f32) -> Self {
        Self {
            offset: [0.0, 0.0],
            scale: default_scale.clamp(min_scale, max_scale),
            min_scale,
            max_scale,
            default_scale,
        }
    }

    /// 逻辑点 → 像素点。`center` 为画布中心（像素）。
    pub fn to_screen(&self, x: f64, y: f64, center: [f32; 2]) -> [f32; 2] {
        [
            center[0] + self.offset[0] + x as f32 * self.scale,
            center[1] + self.offset[1] - y as f32 * self.scale,
        ]
    }

    /// 像素点 → 逻辑点（`to_screen` 的逆）。
    pub fn to_logical(&self, px: f32, py: f32, center: [f32; 2]) -> (f64, f64) {
        (
            ((px - center[0] - self.offset[0]) / self.scale) as f64,
            (-(py - center[1] - self.offset[1]) / self.scale) as f64,
        )
    }

    /// 变换后的原点（网格与坐标轴都从这里出发）
    pub fn origin(&self, center: [f32; 2]) -> [f32; 2] {
        [center[0] + self.offset[0], center[1] + self.offset[1]]
    }

    /// 拖拽平移：增量直接累加
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset[0] += dx;
        self.offset[1] += dy;
    }

    /// 以光标为锚点缩放。
    ///
    /// 滚轮向下 `factor = 0.9`，向上 `1.1`。先夹紧新 scale，
    /// 再补偿 offset 使光标下的逻辑点保持不动：
    /// `offset += (cursor − 变换后原点) × (1 − new/old)`
    pub fn zoom_at(&mut self, factor: f32, cursor: [f32; 2], center: [f32; 2]) {
        let old = self.scale;
        let new = (old * factor).clamp(self.min_scale, self.max_scale);
        if new == old {
            return;
        }
        let [ox, oy] = self.origin(center);
        self.offset[0] += (cursor[0] - ox) * (1.0 - new / old);
        self.offset[1] += (cursor[1] - oy) * (1.0 - new / old);
        self.scale = new;
    }

    /// 复位到默认缩放、零平移
    pub fn reset(&mut self) {
        self.offset = [0.0, 0.0];
        self.scale = self.default_scale.clamp(self.min_scale, self.max_scale);
    }

    /// 自适应：取 A、B、A+B、A−B 的最大坐标绝对值，
    /// 让该范围映射到画布较短边的约 1/3，平移归零。
    /// 全零向量时不动（避免除零）。
    pub fn auto_fit(&mut self, a: Vec3, b: Vec3, canvas_w: f32, canvas_h: f32) {
        let candidates = [a, b, a.add(b), a.subtract(b)];
        let mut extent = 0.0f64;
        for v in candidates {
            extent = extent.max(v.x.abs()).max(v.y.abs());
        }
        if extent <= 0.0 {
            return;
        }
        let fitted = canvas_w.min(canvas_h) / (extent as f32 * 3.0);
        self.scale = fitted.clamp(self.min_scale, self.max_scale);
        self.offset = [0.0, 0.0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: [f32; 2] = [400.0, 300.0];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn screen_mapping_inverts_y() {
        let vt = ViewTransform::default();
        let p = vt.to_screen(1.0, 1.0, CENTER);
        assert_eq!(p, [440.0, 260.0]);
    }

    #[test]
    fn round_trip_is_identity() {
        let mut vt = ViewTransform::default();
        vt.pan(37.0, -12.5);
        vt.zoom_at(1.1, [500.0, 100.0], CENTER);

        for (x, y) in [(0.0, 0.0), (3.0, -4.0), (-1.25, 2.75), (10.0, 10.0)] {
            let [px, py] = vt.to_screen(x, y, CENTER);
            let (lx, ly) = vt.to_logical(px, py, CENTER);
            assert!(close(lx, x), "x: {lx} != {x}");
            assert!(close(ly, y), "y: {ly} != {y}");
        }
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let mut vt = ViewTransform::default();
        vt.pan(20.0, 40.0);
        let cursor = [520.0, 180.0];

        let before = vt.to_logical(cursor[0], cursor[1], CENTER);
        vt.zoom_at(1.1, cursor, CENTER);
        let after = vt.to_logical(cursor[0], cursor[1], CENTER);

        assert!(close(before.0, after.0));
        assert!(close(before.1, after.1));
    }

    #[test]
    fn scale_never_leaves_bounds() {
        let mut vt = ViewTransform::default();
        for _ in 0..100 {
            vt.zoom_at(1.1, [0.0, 0.0], CENTER);
        }
        assert_eq!(vt.scale, vt.max_scale);
        for _ in 0..200 {
            vt.zoom_at(0.9, [0.0, 0.0], CENTER);
        }
        assert_eq!(vt.scale, vt.min_scale);
    }

    #[test]
    fn zoom_at_clamp_boundary_leaves_offset_untouched() {
        let mut vt = ViewTransform::default();
        vt.scale = vt.max_scale;
        vt.pan(5.0, 5.0);
        let offset = vt.offset;
        // 已到上界，再放大应当是 no-op
        vt.zoom_at(1.1, [600.0, 400.0], CENTER);
        assert_eq!(vt.offset, offset);
        assert_eq!(vt.scale, vt.max_scale);
    }

    #[test]
    fn pan_accumulates_without_bounds() {
        let mut vt = ViewTransform::default();
        for _ in 0..1000 {
            vt.pan(50.0, -30.0);
        }
        assert_eq!(vt.offset, [50_000.0, -30_000.0]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut vt = ViewTransform::default();
        vt.pan(99.0, 99.0);
        vt.zoom_at(0.9, [0.0, 0.0], CENTER);
        vt.reset();
        assert_eq!(vt.offset, [0.0, 0.0]);
        assert_eq!(vt.scale, 40.0);
    }

    #[test]
    fn auto_fit_covers_sum_and_difference_extents() {
        let mut vt = ViewTransform::default();
        vt.pan(10.0, 10.0);
        let a = Vec3::new(2.0, 1.0, 0.0);
        let b = Vec3::new(3.0, -1.0, 0.0);
        // 最大范围来自 A+B 的 x 分量 = 5
        vt.auto_fit(a, b, 600.0, 900.0);
        assert_eq!(vt.offset, [0.0, 0.0]);
        assert!((vt.scale - 600.0 / 15.0).abs() < 1e-4);
    }

    #[test]
    fn auto_fit_clamps_and_ignores_zero_vectors() {
        let mut vt = ViewTransform::default();
        let tiny = Vec3::new(0.001, 0.0, 0.0);
        vt.auto_fit(tiny, Vec3::ZERO, 800.0, 600.0);
        assert_eq!(vt.scale, vt.max_scale);

        let before = vt.scale;
        vt.auto_fit(Vec3::ZERO, Vec3::ZERO, 800.0, 600.0);
        assert_eq!(vt.scale, before);
    }
}
