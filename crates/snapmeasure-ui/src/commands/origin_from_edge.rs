//! 由选中边设置原点并添加镜像修改器

use super::active_mesh;
use crate::command::{Command, CommandContext, CommandError, CommandResult};
use snapmeasure_core::error::SceneError;
use snapmeasure_core::modifier::{MirrorSettings, ModifierKind};
use snapmeasure_core::object::{ObjectMode, SelectMode};

/// 镜像修改器名称
pub const MIRROR_MODIFIER: &str = "Mirror";

const NO_MESH: &str = "Select a mesh object";

/// 把原点放到唯一选中边的中点，并确保对象有一个位于栈顶的 X 轴镜像修改器
///
/// 进入时强制编辑模式 + 边选择模式；选择不合法时对象保持在该状态。
/// 成功后 3D 游标停在边的中点。无论原点能否放置，对象都回到编辑模式。
pub struct OriginFromEdgeCommand;

impl OriginFromEdgeCommand {
    pub const ID: &'static str = "mesh.mirror_selection";
}

impl Command for OriginFromEdgeCommand {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Origin from Edge + Mirror"
    }

    fn description(&self) -> &'static str {
        "Place the origin at the center of the selected edge and add a Mirror modifier"
    }

    fn icon(&self) -> &'static str {
        "◂▸"
    }

    fn undoable(&self) -> bool {
        true
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let world = {
            let obj = active_mesh(ctx.scene, NO_MESH)?;
            obj.set_mode(ObjectMode::Edit)?;
            obj.set_select_mode(SelectMode::Edge);

            let mesh = obj
                .mesh()
                .ok_or_else(|| SceneError::NotAMesh(obj.name.clone()))?;
            let selected: Vec<_> = mesh.selected_edges().collect();
            let [edge] = selected.as_slice() else {
                return Err(CommandError::Selection("Select only one edge"));
            };
            let center = mesh.edge_midpoint(edge);
            obj.to_world(&center)
        };

        let obj = active_mesh(ctx.scene, NO_MESH)?;
        obj.set_mode(ObjectMode::Object)?;
        let placed = obj.set_origin(&world);
        obj.set_mode(ObjectMode::Edit)?;
        placed?;

        // 原点放置成功后游标才移到边的中点
        ctx.scene.cursor.location = world;

        let obj = active_mesh(ctx.scene, NO_MESH)?;
        if obj.modifiers.get(MIRROR_MODIFIER).is_some() {
            return Ok(Some("Already has a Mirror modifier".to_string()));
        }

        let settings = MirrorSettings {
            use_axis: [true, false, false],
        };
        let name = obj
            .modifiers
            .add(MIRROR_MODIFIER, ModifierKind::Mirror(settings))
            .name
            .clone();
        while obj.modifiers.move_up(&name)? {}

        Ok(None)
    }
}
