//! SnapMeasure 工具集
//!
//! 挂在编辑器头部菜单上的一组网格工具：
//! - 两顶点距离测量（带单位换算）
//! - 顶点捕捉开关
//! - 由选中边设置原点并添加镜像修改器
//! - 由选区中心设置原点
//! - 选中顶点对齐到 X = 0
//!
//! 每个工具是一个实现 `Command` 的类型，通过 `CommandRegistry` 按标识符调用。

pub mod addon;
pub mod command;
pub mod command_line;
pub mod command_registry;
pub mod commands;
pub mod header;
pub mod view_state;

pub use addon::{register, unregister, AddonInfo, ADDON_INFO, HEADER_CALLBACK};
pub use command::{
    Command, CommandContext, CommandError, CommandResult, CommandStatus, Invocation, Report,
    ReportLevel,
};
pub use command_registry::CommandRegistry;
pub use commands::create_commands;
pub use header::{HeaderContext, HeaderItem, HeaderMenu, HeaderResponse};
pub use view_state::{DistanceReadout, ViewState};
