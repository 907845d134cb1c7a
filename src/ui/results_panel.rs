use egui::{RichText, Ui};

use crate::core::operation::OpReport;

/// 结果面板：标题 + 数值行 + 一句解释
pub fn show_results(ui: &mut Ui, report: Option<&OpReport>) {
    ui.heading("📋 结果");
    match report {
        Some(report) => {
            ui.label(RichText::new(&report.title).strong().size(16.0));
            for line in &report.values {
                ui.label(line);
            }
            ui.label(RichText::new(&report.note).weak().italics());
        }
        None => {
            ui.label(RichText::new("选择一种运算查看结果").weak());
        }
    }
}
