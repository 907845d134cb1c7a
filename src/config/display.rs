//! # 显示配置
//!
//! 颜色、缩放范围、相机距离范围等显示调优参数，
//! 编译期嵌入 `display.json`，启动时反序列化一次。

use serde::Deserialize;

use crate::config::ConfigError;

const DISPLAY_JSON: &str = include_str!("../assets/display.json");

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub scale: ScaleConfig,
    pub camera: CameraConfig,
    pub colors: ColorsConfig,
}

/// 2D 视图缩放（像素/单位）的默认值与上下界
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfig {
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

/// 3D 相机距离的默认值与上下界
#[derive(Debug, Clone, Deserialize)]
pub struct CameraConfig {
    pub default_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

/// 所有绘制颜色，RGBA
#[derive(Debug, Clone, Deserialize)]
pub struct ColorsConfig {
    pub background: [u8; 4],
    pub grid: [u8; 4],
    pub grid_label: [u8; 4],
    pub axis: [u8; 4],
    pub axis_label: [u8; 4],
    pub coord_label: [u8; 4],
    pub vector_a: [u8; 4],
    pub vector_b: [u8; 4],
    pub result: [u8; 4],
    pub origin_fill: [u8; 4],
    pub origin_stroke: [u8; 4],
}

pub fn load_display_config() -> Result<DisplayConfig, ConfigError> {
    let config: DisplayConfig = serde_json::from_str(DISPLAY_JSON)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_with_expected_bounds() {
        let cfg = load_display_config().expect("display.json 应当合法");
        assert_eq!(cfg.scale.min, 10.0);
        assert_eq!(cfg.scale.max, 200.0);
        assert!(cfg.scale.min <= cfg.scale.default && cfg.scale.default <= cfg.scale.max);
        assert_eq!(cfg.camera.min_distance, 5.0);
        assert_eq!(cfg.camera.max_distance, 50.0);
    }
}
