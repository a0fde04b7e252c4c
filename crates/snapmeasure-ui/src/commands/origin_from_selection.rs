//! 由选区中心设置原点

use super::active_mesh;
use crate::command::{Command, CommandContext, CommandError, CommandResult};
use snapmeasure_core::error::SceneError;
use snapmeasure_core::math::centroid;
use snapmeasure_core::object::ObjectMode;

const NO_MESH: &str = "Select a mesh object";

/// 把原点放到选中顶点的平均位置
///
/// 借用 3D 游标定位原点，结束时游标恢复到执行前的位置，对象回到编辑模式。
pub struct OriginFromSelectionCommand;

impl OriginFromSelectionCommand {
    pub const ID: &'static str = "mesh.origin_from_selection";
}

impl Command for OriginFromSelectionCommand {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Origin from Selection"
    }

    fn description(&self) -> &'static str {
        "Place the origin at the center of the current selection"
    }

    fn icon(&self) -> &'static str {
        "⌖"
    }

    fn undoable(&self) -> bool {
        true
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let world = {
            let obj = active_mesh(ctx.scene, NO_MESH)?;
            obj.set_mode(ObjectMode::Edit)?;

            let mesh = obj
                .mesh()
                .ok_or_else(|| SceneError::NotAMesh(obj.name.clone()))?;
            let center = centroid(mesh.selected_vertices().map(|v| &v.co))
                .ok_or(CommandError::Selection("No vertices selected"))?;
            obj.to_world(&center)
        };

        let saved = ctx.scene.cursor;
        ctx.scene.cursor.location = world;
        let placed = active_mesh(ctx.scene, NO_MESH).and_then(|obj| {
            obj.set_mode(ObjectMode::Object)?;
            let placed = obj.set_origin(&world);
            obj.set_mode(ObjectMode::Edit)?;
            Ok(placed?)
        });
        // 游标只是定位工具，必须原样恢复
        ctx.scene.cursor = saved;
        placed?;

        Ok(None)
    }
}
