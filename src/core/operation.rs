//! # 运算分发与结果报告
//!
//! 把一次用户选择的运算（求和/求差/点积/叉积/模长/三重积）
//! 变成一份结构化的 [`OpReport`]：标题 + 数值行 + 一句解释，
//! 以及可选的「结果向量」供画布叠加绘制。
//!
//! 数值行在这里统一舍入到两位小数；运算本身走 f64 全精度。

use super::vector::Vec3;

/// 显示模式。切换只影响渲染与格式化，向量数据本身共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TwoD,
    ThreeD,
}

/// 用户可选的向量运算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sum,
    Difference,
    Dot,
    Cross,
    MagnitudeA,
    MagnitudeB,
    Triple,
}

impl Operation {
    /// 全部运算（控制面板按此顺序排按钮）
    pub fn all() -> &'static [Operation] {
        &[
            Operation::Sum,
            Operation::Difference,
            Operation::Dot,
            Operation::Cross,
            Operation::MagnitudeA,
            Operation::MagnitudeB,
            Operation::Triple,
        ]
    }

    /// 按钮文字
    pub fn display_name(self) -> &'static str {
        match self {
            Operation::Sum => "➕ 求和 A+B",
            Operation::Difference => "➖ 求差 A−B",
            Operation::Dot => "• 点积 A·B",
            Operation::Cross => "✖ 叉积 A×B",
            Operation::MagnitudeA => "‖ 模长 |A|",
            Operation::MagnitudeB => "‖ 模长 |B|",
            Operation::Triple => "◇ 三重积 A·(B×C)",
        }
    }

    /// 叉积与三重积是三维概念，2D 模式下不提供
    pub fn available_in(self, mode: Mode) -> bool {
        match self {
            Operation::Cross | Operation::Triple => mode == Mode::ThreeD,
            _ => true,
        }
    }

    /// 运算结果是否作为额外向量画到画布上
    pub fn draws_result_vector(self) -> bool {
        matches!(
            self,
            Operation::Sum | Operation::Difference | Operation::Cross
        )
    }

    /// 结果向量的图例标签
    pub fn result_label(self) -> &'static str {
        match self {
            Operation::Sum => "A+B",
            Operation::Difference => "A−B",
            Operation::Cross => "A×B",
            _ => "",
        }
    }
}

/// 一次运算的结构化结果（由 `ui::results_panel` 渲染）
#[derive(Debug, Clone)]
pub struct OpReport {
    pub operation: Operation,
    pub title: String,
    /// 数值行（已做两位小数显示舍入）
    pub values: Vec<String>,
    /// 一句话解释
    pub note: String,
    /// 可画的结果向量（仅求和/求差/叉积）
    pub result_vector: Option<Vec3>,
}

/// 标量两位小数
fn fmt_scalar(v: f64) -> String {
    format!("{:.2}", v)
}

/// 向量坐标两位小数；2D 模式省略 z 分量
fn fmt_vec(v: Vec3, mode: Mode) -> String {
    match mode {
        Mode::TwoD => format!("({:.2}, {:.2})", v.x, v.y),
        Mode::ThreeD => format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z),
    }
}

/// 执行一次运算并生成报告。
///
/// `c` 是三重积用的第三向量；其他运算不读它。
pub fn evaluate(op: Operation, a: Vec3, b: Vec3, c: Vec3, mode: Mode) -> OpReport {
    match op {
        Operation::Sum => {
            let r = a.add(b);
            OpReport {
                operation: op,
                title: "A + B".to_string(),
                values: vec![format!("A + B = {}", fmt_vec(r, mode))],
                note: "向量求和：逐分量相加".to_string(),
                result_vector: Some(r),
            }
        }
        Operation::Difference => {
            let r = a.subtract(b);
            OpReport {
                operation: op,
                title: "A − B".to_string(),
                values: vec![format!("A − B = {}", fmt_vec(r, mode))],
                note: "向量求差：逐分量相减".to_string(),
                result_vector: Some(r),
            }
        }
        Operation::Dot => {
            let dot = a.dot(b);
            let angle_line = match a.angle_between(b) {
                Some(deg) => format!("夹角 = {}°", fmt_scalar(deg)),
                // 零向量没有方向，夹角无定义
                None => "夹角 = N/A".to_string(),
            };
            OpReport {
                operation: op,
                title: "A · B".to_string(),
                values: vec![format!("A · B = {}", fmt_scalar(dot)), angle_line],
                note: "点积是标量：|A||B|cosθ".to_string(),
                result_vector: None,
            }
        }
        Operation::Cross => {
            let r = a.cross(b);
            OpReport {
                operation: op,
                title: "A × B".to_string(),
                values: vec![
                    format!("A × B = {}", fmt_vec(r, Mode::ThreeD)),
                    format!("模长 = {}", fmt_scalar(r.magnitude())),
                ],
                note: "叉积垂直于 A 与 B，模长等于二者张成平行四边形的面积".to_string(),
                result_vector: Some(r),
            }
        }
        Operation::MagnitudeA => magnitude_report(op, "A", a, mode),
        Operation::MagnitudeB => magnitude_report(op, "B", b, mode),
        Operation::Triple => {
            let volume = a.scalar_triple(b, c);
            OpReport {
                operation: op,
                title: "A · (B × C)".to_string(),
                values: vec![format!("A · (B × C) = {}", fmt_scalar(volume))],
                note: "标量三重积：三向量张成平行六面体的有向体积".to_string(),
                result_vector: None,
            }
        }
    }
}

fn magnitude_report(op: Operation, name: &str, v: Vec3, mode: Mode) -> OpReport {
    let formula = match mode {
        Mode::TwoD => format!("√({:.2}² + {:.2}²)", v.x, v.y),
        Mode::ThreeD => format!("√({:.2}² + {:.2}² + {:.2}²)", v.x, v.y, v.z),
    };
    OpReport {
        operation: op,
        title: format!("|{name}|"),
        values: vec![
            format!("|{name}| = {}", fmt_scalar(v.magnitude())),
            format!("公式: {formula}"),
        ],
        note: format!("向量 {name} 的长度"),
        result_vector: None,
    }
}
