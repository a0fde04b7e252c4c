//! Command 系统
//!
//! 每个工具是一个独立的 Command 实现：读取当前选区，计算或修改，返回状态消息。
//! 错误不会越过命令边界，`CommandRegistry::invoke` 把它们转换成取消状态和报告。

use crate::view_state::ViewState;
use snapmeasure_core::error::SceneError;
use snapmeasure_core::scene::Scene;
use thiserror::Error;

/// 报告级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

/// 显示给用户的消息
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Error,
            message: message.into(),
        }
    }
}

/// 命令执行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Finished,
    Cancelled,
}

/// 一次调用的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub status: CommandStatus,
    pub report: Option<Report>,
}

impl Invocation {
    pub fn is_finished(&self) -> bool {
        self.status == CommandStatus::Finished
    }

    pub fn message(&self) -> Option<&str> {
        self.report.as_ref().map(|r| r.message.as_str())
    }
}

/// 命令错误
#[derive(Error, Debug)]
pub enum CommandError {
    /// 没有活动对象或类型不对
    #[error("{0}")]
    NoObject(&'static str),

    /// 交互模式不对
    #[error("{0}")]
    Mode(&'static str),

    /// 选中元素数量不对
    #[error("{0}")]
    Selection(&'static str),

    #[error("The unit scale is zero. Cannot compute the distance.")]
    ZeroScale,

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

impl CommandError {
    pub fn report_level(&self) -> ReportLevel {
        match self {
            CommandError::ZeroScale | CommandError::Scene(_) => ReportLevel::Error,
            _ => ReportLevel::Warning,
        }
    }

    pub fn to_report(&self) -> Report {
        Report {
            level: self.report_level(),
            message: self.to_string(),
        }
    }
}

/// 成功时可以附带一条信息消息
pub type CommandResult = Result<Option<String>, CommandError>;

/// 命令上下文 - 执行期间独占场景和视图状态
pub struct CommandContext<'a> {
    pub scene: &'a mut Scene,
    pub view: &'a mut ViewState,
}

impl<'a> CommandContext<'a> {
    pub fn new(scene: &'a mut Scene, view: &'a mut ViewState) -> Self {
        Self { scene, view }
    }
}

/// Command trait - 所有工具的核心接口
pub trait Command {
    /// 唯一标识符，如 "mesh.measure_distance"
    fn id(&self) -> &'static str;

    /// 显示名称
    fn label(&self) -> &'static str;

    /// 悬停提示
    fn description(&self) -> &'static str;

    /// 头部按钮图标
    fn icon(&self) -> &'static str;

    /// 成功执行后是否记录为一步撤销
    fn undoable(&self) -> bool {
        false
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult;
}
