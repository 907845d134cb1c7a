//! # 3D 轨道相机
//!
//! 球坐标（yaw/pitch/distance）围绕原点旋转，拖拽增量驱动角度，
//! 滚轮缩放相机距离并夹在 `[min_distance, max_distance]`。
//! 投影是简单的「旋转到视空间 + 透视除法」，z 轴朝上。

use crate::core::vector::Vec3;

/// 视野系数：distance − depth 处 1 个单位占 `FOCAL × 短边` 像素
const FOCAL: f32 = 0.85;

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// 绕 z（上）轴的方位角，弧度
    pub yaw: f32,
    /// 俯仰角，弧度，夹在极点之外
    pub pitch: f32,
    /// 相机到原点的距离（单位）
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    default_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(17.3, 5.0, 50.0)
    }
}

impl OrbitCamera {
    pub fn new(default_distance: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.6,
            distance: default_distance.clamp(min_distance, max_distance),
            min_distance,
            max_distance,
            default_distance,
        }
    }

    /// 拖拽增量 → 角度。pitch 留 0.1 rad 余量避免翻越极点。
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        const POLE_MARGIN: f32 = std::f32::consts::FRAC_PI_2 - 0.1;
        self.yaw -= dx * 0.01;
        self.pitch = (self.pitch + dy * 0.01).clamp(-POLE_MARGIN, POLE_MARGIN);
    }

    /// 滚轮缩放：向下拉远 ×1.1，向上拉近 ×0.9
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// 自适应：距离取最长向量模长的 3 倍（再夹界）
    pub fn auto_fit(&mut self, a: Vec3, b: Vec3) {
        let reach = a.magnitude().max(b.magnitude()) as f32;
        if reach > 0.0 {
            self.distance = (reach * 3.0).clamp(self.min_distance, self.max_distance);
        }
    }

    pub fn reset(&mut self) {
        self.yaw = std::f32::consts::FRAC_PI_4;
        self.pitch = 0.6;
        self.distance = self.default_distance.clamp(self.min_distance, self.max_distance);
    }

    /// 世界点 → 视空间 (横, 深, 纵)。深度为正表示朝向相机。
    fn to_view(&self, v: Vec3) -> [f32; 3] {
        let (x, y, z) = (v.x as f32, v.y as f32, v.z as f32);
        let (cy, sy) = (self.yaw.cos(), self.yaw.sin());
        let (cp, sp) = (self.pitch.cos(), self.pitch.sin());

        // 绕 z 轴转 yaw
        let x1 = x * cy + y * sy;
        let y1 = -x * sy + y * cy;
        // 绕横轴转 pitch；y2 为深度，z2 为屏幕纵向
        let y2 = y1 * cp - z * sp;
        let z2 = y1 * sp + z * cp;
        [x1, y2, z2]
    }

    /// 世界点 → 像素点。`min_dim` 为画布短边长度。
    pub fn project(&self, v: Vec3, center: [f32; 2], min_dim: f32) -> [f32; 2] {
        let [vx, depth, vz] = self.to_view(v);
        let factor = FOCAL * min_dim / (self.distance - depth).max(0.1);
        [center[0] + vx * factor, center[1] - vz * factor]
    }
}
