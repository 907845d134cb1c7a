use eframe::egui;

use crate::config::display::{load_display_config, DisplayConfig};
use crate::core::operation::{evaluate, Mode, OpReport, Operation};
use crate::core::vector::Vec3;
use crate::ui::canvas_view::show_canvas2d;
use crate::ui::control_panel::{show_control_panel, ControlAction, VectorInput};
use crate::ui::results_panel::show_results;
use crate::ui::status_bar::show_status_bar;
use crate::ui::view3d::show_canvas3d;
use crate::view::camera::OrbitCamera;
use crate::view::transform::ViewTransform;

pub struct VectorLabApp {
    mode: Mode,
    input_a: VectorInput,
    input_b: VectorInput,
    input_c: VectorInput,
    /// 最近一次点击的运算；结果每帧随当前输入重算
    last_op: Option<Operation>,
    show_grid: bool,
    transform: ViewTransform,
    camera: OrbitCamera,
    display: DisplayConfig,
    last_status: String,
}

impl VectorLabApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let display = load_display_config().expect("display.json 加载失败");

        let transform = ViewTransform::new(
            display.scale.default,
            display.scale.min,
            display.scale.max,
        );
        let camera = OrbitCamera::new(
            display.camera.default_distance,
            display.camera.min_distance,
            display.camera.max_distance,
        );

        Self {
            mode: Mode::TwoD,
            input_a: VectorInput::new(3.0, 4.0, 0.0),
            input_b: VectorInput::new(-2.0, 1.0, 0.0),
            input_c: VectorInput::new(0.0, 0.0, 1.0),
            last_op: None,
            show_grid: true,
            transform,
            camera,
            display,
            last_status: "就绪：编辑分量或选择运算".to_string(),
        }
    }

    fn handle_action(&mut self, action: &ControlAction) {
        if action.randomize {
            let mut rng = rand::thread_rng();
            self.input_a.randomize(&mut rng);
            self.input_b.randomize(&mut rng);
            self.input_c.randomize(&mut rng);
            self.last_status = "已生成随机向量".to_string();
        }

        if let Some(op) = action.operation {
            self.last_op = Some(op);
            self.last_status = format!("计算 {}", op.display_name());
        }

        if action.reset_view {
            match self.mode {
                Mode::TwoD => self.transform.reset(),
                Mode::ThreeD => self.camera.reset(),
            }
            self.last_status = "视图已重置".to_string();
        }
    }

    /// 画布上叠加的结果向量：2D 只画求和/求差，3D 连叉积一起画
    fn result_overlay(&self, report: Option<&OpReport>) -> Option<(Vec3, &'static str)> {
        let report = report?;
        let op = report.operation;
        let visible = match self.mode {
            Mode::TwoD => matches!(op, Operation::Sum | Operation::Difference),
            Mode::ThreeD => op.draws_result_vector(),
        };
        if !visible {
            return None;
        }
        report.result_vector.map(|v| (v, op.result_label()))
    }
}

impl eframe::App for VectorLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = ControlAction::none();

        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                action = show_control_panel(
                    ui,
                    &mut self.mode,
                    &mut self.input_a,
                    &mut self.input_b,
                    &mut self.input_c,
                    &mut self.show_grid,
                );
                ui.separator();
                ui.label(format!("缩放: {:.0} 像素/单位", self.transform.scale));
                ui.label(format!("相机距离: {:.1}", self.camera.distance));
            });

        self.handle_action(&action);

        // 向量与结果每帧从输入重算（输入即时生效）
        let a = self.input_a.value();
        let b = self.input_b.value();
        let c = self.input_c.value();
        let report = self
            .last_op
            .map(|op| evaluate(op, a, b, c, self.mode));

        egui::SidePanel::right("results_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                show_results(ui, report.as_ref());
            });

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .min_height(28.0)
            .show(ctx, |ui| {
                let fps = ctx.input(|i| {
                    if i.stable_dt > 0.0 {
                        1.0 / i.stable_dt
                    } else {
                        0.0
                    }
                });
                show_status_bar(ui, fps, self.mode, &self.last_status);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let overlay = self.result_overlay(report.as_ref());

            // 自适应要用到画布实际尺寸，在这里处理
            if action.auto_fit {
                let size = ui.available_size();
                match self.mode {
                    Mode::TwoD => self.transform.auto_fit(a, b, size.x, size.y),
                    Mode::ThreeD => self.camera.auto_fit(a, b),
                }
                self.last_status = "视图已自适应".to_string();
            }

            match self.mode {
                Mode::TwoD => {
                    if let Some(hover) = show_canvas2d(
                        ui,
                        &mut self.transform,
                        a,
                        b,
                        overlay,
                        self.show_grid,
                        &self.display.colors,
                    ) {
                        self.last_status = format!("悬停: ({:.2}, {:.2})", hover.x, hover.y);
                    }
                }
                Mode::ThreeD => {
                    show_canvas3d(
                        ui,
                        &mut self.camera,
                        a,
                        b,
                        overlay,
                        self.show_grid,
                        &self.display.colors,
                    );
                }
            }
        });
    }
}
