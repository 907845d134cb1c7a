//! # 绘制表面抽象
//!
//! 场景绘制代码（scene2d / scene3d）只依赖 [`DrawSurface`] 这组
//! 原语，不直接触碰 egui。真正的绘制由 [`PainterSurface`] 适配到
//! `egui::Painter`；测试用 `RecordingSurface` 收集绘制指令断言。

/// RGBA 颜色
pub type Rgba = [u8; 4];

/// 画布矩形（像素），场景代码用它求中心与边界
#[derive(Debug, Clone, Copy)]
pub struct CanvasRect {
    pub min: [f32; 2],
    pub size: [f32; 2],
}

impl CanvasRect {
    pub fn new(min: [f32; 2], size: [f32; 2]) -> Self {
        Self { min, size }
    }

    pub fn center(&self) -> [f32; 2] {
        [
            self.min[0] + self.size[0] / 2.0,
            self.min[1] + self.size[1] / 2.0,
        ]
    }

    pub fn right(&self) -> f32 {
        self.min[0] + self.size[0]
    }

    pub fn bottom(&self) -> f32 {
        self.min[1] + self.size[1]
    }

    pub fn min_dim(&self) -> f32 {
        self.size[0].min(self.size[1])
    }
}

/// 绘制原语。坐标均为像素。
pub trait DrawSurface {
    fn line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Rgba);
    /// 凸多边形填充（箭头头部等）
    fn polygon(&mut self, points: &[[f32; 2]], color: Rgba);
    fn circle(&mut self, center: [f32; 2], radius: f32, fill: Rgba, stroke_width: f32, stroke: Rgba);
    /// 文本，锚点在左侧垂直居中
    fn text(&mut self, pos: [f32; 2], size: f32, text: &str, color: Rgba);
}

// ═══════════════════════════════════════════════════════════
// egui 适配层
// ═══════════════════════════════════════════════════════════

fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

/// 把 [`DrawSurface`] 原语转发给 `egui::Painter`
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Rgba) {
        self.painter.line_segment(
            [egui::pos2(from[0], from[1]), egui::pos2(to[0], to[1])],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn polygon(&mut self, points: &[[f32; 2]], color: Rgba) {
        self.painter.add(egui::Shape::convex_polygon(
            points.iter().map(|p| egui::pos2(p[0], p[1])).collect(),
            to_color32(color),
            egui::Stroke::NONE,
        ));
    }

    fn circle(
        &mut self,
        center: [f32; 2],
        radius: f32,
        fill: Rgba,
        stroke_width: f32,
        stroke: Rgba,
    ) {
        self.painter.circle(
            egui::pos2(center[0], center[1]),
            radius,
            to_color32(fill),
            egui::Stroke::new(stroke_width, to_color32(stroke)),
        );
    }

    fn text(&mut self, pos: [f32; 2], size: f32, text: &str, color: Rgba) {
        self.painter.text(
            egui::pos2(pos[0], pos[1]),
            egui::Align2::LEFT_CENTER,
            text,
            egui::FontId::proportional(size),
            to_color32(color),
        );
    }
}

// ═══════════════════════════════════════════════════════════
// 测试用记录表面
// ═══════════════════════════════════════════════════════════

/// 一条被记录的绘制指令
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        from: [f32; 2],
        to: [f32; 2],
        color: Rgba,
    },
    Polygon {
        points: Vec<[f32; 2]>,
        color: Rgba,
    },
    Circle {
        center: [f32; 2],
        radius: f32,
    },
    Text {
        pos: [f32; 2],
        text: String,
        color: Rgba,
    },
}

/// 无头测试表面：把指令收进 Vec 供断言
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn polygons(&self) -> Vec<&DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Polygon { .. }))
            .collect()
    }
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn line(&mut self, from: [f32; 2], to: [f32; 2], _width: f32, color: Rgba) {
        self.commands.push(DrawCmd::Line { from, to, color });
    }

    fn polygon(&mut self, points: &[[f32; 2]], color: Rgba) {
        self.commands.push(DrawCmd::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn circle(
        &mut self,
        center: [f32; 2],
        radius: f32,
        _fill: Rgba,
        _stroke_width: f32,
        _stroke: Rgba,
    ) {
        self.commands.push(DrawCmd::Circle { center, radius });
    }

    fn text(&mut self, pos: [f32; 2], size: f32, text: &str, color: Rgba) {
        let _ = size;
        self.commands.push(DrawCmd::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }
}
