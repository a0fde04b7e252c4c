//! 选中顶点对齐到 X = 0

use crate::command::{Command, CommandContext, CommandError, CommandResult};
use snapmeasure_core::object::ObjectMode;

/// 把选中顶点的局部 X 坐标设为 0，Y/Z 不变
pub struct AlignXZeroCommand;

impl AlignXZeroCommand {
    pub const ID: &'static str = "mesh.snap_x_zero";
}

impl Command for AlignXZeroCommand {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Align to X = 0"
    }

    fn description(&self) -> &'static str {
        "Move the selected vertices to X = 0"
    }

    fn icon(&self) -> &'static str {
        "⇥"
    }

    fn undoable(&self) -> bool {
        true
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let obj = match ctx.scene.active_object_mut() {
            Some(obj) if obj.is_mesh() => obj,
            _ => return Err(CommandError::NoObject("Select a mesh")),
        };
        if obj.mode() != ObjectMode::Edit {
            return Err(CommandError::Mode("You must be in Edit Mode"));
        }

        let mesh = obj.require_mesh_mut()?;
        for v in mesh.verts_mut().iter_mut().filter(|v| v.select) {
            v.co.x = 0.0;
        }

        Ok(Some("Vertices aligned to X = 0".to_string()))
    }
}
