mod config;
mod core;
mod rendering;
mod ui;
mod view;

use ui::app::VectorLabApp;

fn main() {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Vector Lab 向量运算可视化")
            .with_inner_size([1280.0, 800.0])
            .with_app_id("vector-lab"),
        ..Default::default()
    };

    eframe::run_native(
        "Vector Lab 向量运算可视化",
        options,
        Box::new(|cc| Box::new(VectorLabApp::new(cc))),
    )
    .expect("窗口启动失败");
}
