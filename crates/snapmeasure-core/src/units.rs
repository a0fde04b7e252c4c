//! 场景单位设置
//!
//! 几何内部以米为单位，显示时按场景的长度单位和单位缩放换算。

use serde::{Deserialize, Serialize};

/// 单位制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitSystem {
    None,
    #[default]
    Metric,
    Imperial,
}

/// 长度单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    Adaptive,
    Micrometers,
    Millimeters,
    Centimeters,
    #[default]
    Meters,
    Kilometers,
    Inches,
    Feet,
    Miles,
}

impl LengthUnit {
    /// 从米换算到该单位的系数
    ///
    /// 只有测量工具识别的六种单位有系数，其余单位按米处理。
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1000.0,
            LengthUnit::Centimeters => 100.0,
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 0.001,
            LengthUnit::Inches => 39.3701,
            LengthUnit::Feet => 3.28084,
            _ => 1.0,
        }
    }

    /// 单位缩写，与 `factor` 使用同一套回退规则
    pub fn abbreviation(&self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
            _ => "m",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LengthUnit::Adaptive => "Adaptive",
            LengthUnit::Micrometers => "Micrometers",
            LengthUnit::Millimeters => "Millimeters",
            LengthUnit::Centimeters => "Centimeters",
            LengthUnit::Meters => "Meters",
            LengthUnit::Kilometers => "Kilometers",
            LengthUnit::Inches => "Inches",
            LengthUnit::Feet => "Feet",
            LengthUnit::Miles => "Miles",
        }
    }
}

/// 场景单位设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSettings {
    pub system: UnitSystem,
    pub length_unit: LengthUnit,
    /// 单位缩放
    pub scale_length: f64,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            system: UnitSystem::Metric,
            length_unit: LengthUnit::Meters,
            scale_length: 1.0,
        }
    }
}

impl UnitSettings {
    pub fn new(length_unit: LengthUnit, scale_length: f64) -> Self {
        Self {
            length_unit,
            scale_length,
            ..Default::default()
        }
    }

    /// 把米制距离换算成显示值，缩放为零时返回 None
    pub fn to_display(&self, meters: f64) -> Option<f64> {
        if self.scale_length == 0.0 {
            return None;
        }
        Some(meters * self.length_unit.factor() * self.scale_length)
    }
}
