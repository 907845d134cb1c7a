//! # 向量类型与纯运算
//!
//! 所有向量运算的唯一实现处。`Vec3` 是不可变值类型（Copy），
//! 分量恒为有限数——从输入框构造时经过 [`sanitize`] 清洗，
//! 非法/非有限输入一律归零，绝不向上层抛错。
//!
//! 内部计算保持 f64 全精度；两位小数的舍入只发生在显示层
//! （见 `core::operation`）。

/// 三分量向量。2D 模式下 z 分量不参与绘制但仍参与运算。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 非有限分量归零（NaN / ±Inf → 0.0）
fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    /// 构造时清洗分量，保证不变式「分量恒为有限数」。
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: sanitize(x),
            y: sanitize(y),
            z: sanitize(z),
        }
    }

    /// 逐分量相加：a + b
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// 逐分量相减：a - b
    pub fn subtract(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// 点积（标量）
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// 叉积（右手系行列式展开），|a×b| = |a||b|sinθ
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// 模长 √(x²+y²+z²)
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// 两向量夹角（度）。
    ///
    /// 任一向量模长为零时夹角无定义，返回 `None`，
    /// 由显示层渲染为 "N/A" 而不是数值错误。
    pub fn angle_between(self, other: Vec3) -> Option<f64> {
        let ma = self.magnitude();
        let mb = other.magnitude();
        if ma == 0.0 || mb == 0.0 {
            return None;
        }
        // 浮点误差可能把余弦推出 [-1, 1]，先夹紧再取 acos
        let cos = (self.dot(other) / (ma * mb)).clamp(-1.0, 1.0);
        Some(cos.acos().to_degrees())
    }

    /// 标量三重积 a · (b × c)：三向量张成平行六面体的有向体积
    pub fn scalar_triple(self, b: Vec3, c: Vec3) -> f64 {
        self.dot(b.cross(c))
    }

    /// 2D 投影意义下是否为零向量（x、y 皆为零，不看 z）
    pub fn is_zero_2d(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// 是否为严格零向量
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// 取反
    pub fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// 从输入框文本解析分量：空串/非法/非有限 → 0.0。
///
/// 输入错误在此就地消化，不向上层传播。
pub fn parse_component(text: &str) -> f64 {
    sanitize(text.trim().parse::<f64>().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn add_is_commutative() {
        let a = Vec3::new(1.5, -2.0, 3.25);
        let b = Vec3::new(-0.5, 4.0, 1.0);
        assert_eq!(a.add(b), b.add(a));
    }

    #[test]
    fn subtract_is_antisymmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.subtract(b), b.subtract(a).neg());
    }

    #[test]
    fn cross_is_antisymmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 7.0);
        assert_eq!(a.cross(b), b.cross(a).neg());
    }

    #[test]
    fn cross_is_orthogonal_to_operands() {
        let a = Vec3::new(3.0, -1.0, 2.0);
        let b = Vec3::new(0.5, 4.0, -6.0);
        let c = a.cross(b);
        assert!(close(a.dot(c), 0.0));
        assert!(close(b.dot(c), 0.0));
    }

    #[test]
    fn cross_unit_axes() {
        // a=(1,0,0), b=(0,1,0) → a×b=(0,0,1)，夹角 90°
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(a.cross(b), Vec3::new(0.0, 0.0, 1.0));
        assert!(close(a.dot(b), 0.0));
        assert!(close(a.angle_between(b).unwrap(), 90.0));
    }

    #[test]
    fn magnitude_is_nonnegative_and_zero_at_origin() {
        assert_eq!(Vec3::ZERO.magnitude(), 0.0);
        assert!(Vec3::new(-3.0, 4.0, 0.0).magnitude() >= 0.0);
        assert!(close(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0));
    }

    #[test]
    fn angle_with_zero_vector_is_undefined() {
        let a = Vec3::new(3.0, 4.0, 0.0);
        assert!(a.angle_between(Vec3::ZERO).is_none());
        assert!(Vec3::ZERO.angle_between(a).is_none());
        assert!(close(a.dot(Vec3::ZERO), 0.0));
    }

    #[test]
    fn worked_example_sum_diff_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.add(b), Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.subtract(b), Vec3::new(-3.0, -3.0, -3.0));
        assert!(close(a.dot(b), 32.0));
    }

    #[test]
    fn scalar_triple_of_coplanar_vectors_is_zero() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        let c = Vec3::new(7.0, 8.0, 9.0);
        // 三个共面向量，体积为 0
        assert!(close(a.scalar_triple(b, c), 0.0));
        // 单位正交基，体积为 1
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert!(close(x.scalar_triple(y, z), 1.0));
    }

    #[test]
    fn nonfinite_components_collapse_to_zero() {
        let v = Vec3::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn parse_component_defaults_to_zero() {
        assert_eq!(parse_component("2.5"), 2.5);
        assert_eq!(parse_component("  -3 "), -3.0);
        assert_eq!(parse_component(""), 0.0);
        assert_eq!(parse_component("abc"), 0.0);
        assert_eq!(parse_component("inf"), 0.0);
        assert_eq!(parse_component("NaN"), 0.0);
    }
}
