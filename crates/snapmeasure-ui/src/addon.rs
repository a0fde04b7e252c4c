//! 工具集注册
//!
//! 加载时注册全部命令并把绘制回调追加到头部菜单；
//! 卸载时先移除回调，再按相反顺序注销命令。

use crate::command_registry::CommandRegistry;
use crate::commands::{
    create_commands, AlignXZeroCommand, MeasureDistanceCommand, OriginFromEdgeCommand,
    OriginFromSelectionCommand, ToggleSnapVertexCommand,
};
use crate::header::{HeaderContext, HeaderItem, HeaderMenu};
use snapmeasure_core::snap::SnapTarget;
use tracing::info;

/// 工具集元数据
#[derive(Debug, Clone, Copy)]
pub struct AddonInfo {
    pub name: &'static str,
    pub version: (u32, u32),
    pub location: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const ADDON_INFO: AddonInfo = AddonInfo {
    name: "Measure with Snap",
    version: (1, 14),
    location: "View3D > Header",
    description: "Measure distances, control snapping and apply Mirror from the selected edge",
    category: "Mesh",
};

/// 头部绘制回调名称
pub const HEADER_CALLBACK: &str = "snapmeasure.header";

/// 工具集的头部绘制回调
///
/// 测量按钮只在网格编辑模式下出现，其余按钮总是出现。
pub fn draw_toolset_buttons(ctx: &HeaderContext, items: &mut Vec<HeaderItem>) {
    let editing_mesh = ctx
        .scene
        .active_object()
        .is_some_and(|obj| obj.is_editing_mesh());

    if editing_mesh {
        items.push(HeaderItem::Separator);
        items.push(HeaderItem::Operator {
            command: MeasureDistanceCommand::ID,
            text: ctx.view.measure_label(),
        });
    }

    items.push(HeaderItem::Separator);
    items.push(HeaderItem::Operator {
        command: ToggleSnapVertexCommand::ID,
        text: "VERTEX".to_string(),
    });
    items.push(HeaderItem::SnapTarget {
        target: SnapTarget::Closest,
        icon: "C",
    });
    items.push(HeaderItem::SnapTarget {
        target: SnapTarget::Active,
        icon: "A",
    });

    items.push(HeaderItem::Separator);
    items.push(HeaderItem::Operator {
        command: OriginFromEdgeCommand::ID,
        text: "Mirror".to_string(),
    });
    items.push(HeaderItem::Operator {
        command: OriginFromSelectionCommand::ID,
        text: "SnapO".to_string(),
    });
    items.push(HeaderItem::Operator {
        command: AlignXZeroCommand::ID,
        text: "X = 0".to_string(),
    });
}

/// 注册全部命令，然后追加头部回调
pub fn register(registry: &mut CommandRegistry, header: &mut HeaderMenu) {
    let commands = create_commands();
    let count = commands.len();
    for command in commands {
        registry.register(command);
    }
    header.append(HEADER_CALLBACK, draw_toolset_buttons);
    info!(
        "Registered {} v{}.{} ({} commands)",
        ADDON_INFO.name, ADDON_INFO.version.0, ADDON_INFO.version.1, count
    );
}

/// 先移除头部回调，再按相反顺序注销命令
pub fn unregister(registry: &mut CommandRegistry, header: &mut HeaderMenu) {
    header.remove(HEADER_CALLBACK);
    for command in create_commands().iter().rev() {
        registry.unregister(command.id());
    }
    info!("Unregistered {}", ADDON_INFO.name);
}
