use egui::{TextEdit, Ui};
use rand::Rng;

use crate::core::operation::{Mode, Operation};
use crate::core::vector::{parse_component, Vec3};

// ── action returned to the app ──────────────────────────────

#[derive(Debug, Clone)]
pub struct ControlAction {
    pub operation: Option<Operation>,
    pub reset_view: bool,
    pub auto_fit: bool,
    pub randomize: bool,
}

impl ControlAction {
    pub fn none() -> Self {
        Self {
            operation: None,
            reset_view: false,
            auto_fit: false,
            randomize: false,
        }
    }
}

// ── vector input buffers ────────────────────────────────────

/// 一组分量输入框的文本缓冲。
/// 解析放在读取时：非法/空文本静默归零（见 `parse_component`）。
#[derive(Debug, Clone)]
pub struct VectorInput {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl VectorInput {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        }
    }

    /// 当前向量值
    pub fn value(&self) -> Vec3 {
        Vec3::new(
            parse_component(&self.x),
            parse_component(&self.y),
            parse_component(&self.z),
        )
    }

    pub fn set(&mut self, v: Vec3) {
        self.x = v.x.to_string();
        self.y = v.y.to_string();
        self.z = v.z.to_string();
    }

    /// 随机分量：[-5, 5]，步长 0.5
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        let mut pick = || rng.gen_range(-10..=10) as f64 * 0.5;
        self.set(Vec3::new(pick(), pick(), pick()));
    }
}

// ── panel rendering ─────────────────────────────────────────

fn vector_row(ui: &mut Ui, name: &str, input: &mut VectorInput, three_d: bool) {
    ui.horizontal(|ui| {
        ui.label(name);
        ui.add(TextEdit::singleline(&mut input.x).desired_width(48.0));
        ui.add(TextEdit::singleline(&mut input.y).desired_width(48.0));
        if three_d {
            ui.add(TextEdit::singleline(&mut input.z).desired_width(48.0));
        }
    });
}

pub fn show_control_panel(
    ui: &mut Ui,
    mode: &mut Mode,
    input_a: &mut VectorInput,
    input_b: &mut VectorInput,
    input_c: &mut VectorInput,
    show_grid: &mut bool,
) -> ControlAction {
    let mut action = ControlAction::none();

    ui.heading("向量运算室");
    ui.separator();

    // ── mode ──
    ui.label("模式");
    ui.horizontal(|ui| {
        ui.radio_value(mode, Mode::TwoD, "2D 平面");
        ui.radio_value(mode, Mode::ThreeD, "3D 空间");
    });

    ui.separator();

    // ── vector inputs ──
    ui.label("向量分量");
    let three_d = *mode == Mode::ThreeD;
    vector_row(ui, "A", input_a, three_d);
    vector_row(ui, "B", input_b, three_d);
    if three_d {
        // 三重积的第三向量，只在 3D 模式下有意义
        vector_row(ui, "C", input_c, true);
    }
    if ui.button("🎲 随机向量").clicked() {
        action.randomize = true;
    }

    ui.separator();

    // ── operations ──
    ui.label("运算");
    for &op in Operation::all() {
        if !op.available_in(*mode) {
            continue;
        }
        if ui.button(op.display_name()).clicked() {
            action.operation = Some(op);
        }
    }

    ui.separator();

    // ── view controls ──
    ui.label("视图");
    ui.checkbox(show_grid, "显示网格");
    ui.horizontal(|ui| {
        if ui.button("⟲ 重置视图").clicked() {
            action.reset_view = true;
        }
        if ui.button("⤢ 自适应").clicked() {
            action.auto_fit = true;
        }
    });

    action
}
