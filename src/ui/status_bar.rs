use egui::Ui;

use crate::core::operation::Mode;

pub fn show_status_bar(ui: &mut Ui, fps: f32, mode: Mode, message: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("状态: {message}"));
        ui.separator();
        let mode_name = match mode {
            Mode::TwoD => "2D",
            Mode::ThreeD => "3D",
        };
        ui.label(format!("模式: {mode_name}"));
        ui.separator();
        ui.label(format!("FPS: {:.0}", fps));
    });
}
