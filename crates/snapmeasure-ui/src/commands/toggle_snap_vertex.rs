//! 顶点捕捉开关

use crate::command::{Command, CommandContext, CommandResult};
use snapmeasure_core::snap::{SnapElement, SnapElements};

/// 两态切换：顶点捕捉开启时清空全部捕捉元素，否则只启用顶点捕捉
pub struct ToggleSnapVertexCommand;

impl ToggleSnapVertexCommand {
    pub const ID: &'static str = "mesh.toggle_snap_vertex";
}

impl Command for ToggleSnapVertexCommand {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Toggle Vertex Snap"
    }

    fn description(&self) -> &'static str {
        "Turn snapping on or off, vertex elements only"
    }

    fn icon(&self) -> &'static str {
        "⊙"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let settings = &mut ctx.scene.tool_settings;

        if settings.snap_elements.contains(SnapElement::Vertex) {
            settings.snap_elements.clear();
            Ok(Some("Vertex snap disabled".to_string()))
        } else {
            settings.snap_elements = SnapElements::only(SnapElement::Vertex);
            Ok(Some("Vertex snap enabled".to_string()))
        }
    }
}
