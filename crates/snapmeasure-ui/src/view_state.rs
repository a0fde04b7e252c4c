//! 视图状态
//!
//! 跨命令保留的会话状态：最后一次测量结果、状态栏消息、命令行输入。

use crate::command::{Report, ReportLevel};
use snapmeasure_core::units::LengthUnit;
use std::fmt;

/// 最后一次测量的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceReadout {
    /// 已换算到场景单位的距离
    Measured { value: f64, unit: LengthUnit },
    WrongMode,
    WrongSelection,
    ZeroScale,
}

impl DistanceReadout {
    pub fn is_measured(&self) -> bool {
        matches!(self, DistanceReadout::Measured { .. })
    }
}

impl fmt::Display for DistanceReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceReadout::Measured { value, unit } => {
                write!(f, "{:.2} {}", value, unit.abbreviation())
            }
            DistanceReadout::WrongMode => f.write_str("Wrong mode"),
            DistanceReadout::WrongSelection => f.write_str("Select 2 vertices"),
            DistanceReadout::ZeroScale => f.write_str("Error: Unit Scale = 0"),
        }
    }
}

/// 测量按钮的默认文字
pub const MEASURE_LABEL: &str = "Measure";

#[derive(Debug, Clone)]
pub struct ViewState {
    pub last_distance: Option<DistanceReadout>,
    /// 状态栏消息
    pub status_message: String,
    pub status_level: ReportLevel,
    /// 命令行输入
    pub command_input: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            last_distance: None,
            status_message: "Ready".to_string(),
            status_level: ReportLevel::Info,
            command_input: String::new(),
        }
    }
}

impl ViewState {
    /// 测量按钮文字：有测量值时显示数值，否则显示默认文字
    pub fn measure_label(&self) -> String {
        match self.last_distance {
            Some(readout) if readout.is_measured() => readout.to_string(),
            _ => MEASURE_LABEL.to_string(),
        }
    }

    pub fn set_status(&mut self, report: &Report) {
        self.status_message = report.message.clone();
        self.status_level = report.level;
    }
}
