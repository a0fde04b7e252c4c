//! 具体的 Command 实现
//!
//! 每个头部按钮对应一个 Command 实现

mod align_x_zero;
mod measure_distance;
mod origin_from_edge;
mod origin_from_selection;
mod toggle_snap_vertex;

pub use align_x_zero::AlignXZeroCommand;
pub use measure_distance::MeasureDistanceCommand;
pub use origin_from_edge::OriginFromEdgeCommand;
pub use origin_from_selection::OriginFromSelectionCommand;
pub use toggle_snap_vertex::ToggleSnapVertexCommand;

use crate::command::{Command, CommandError};
use snapmeasure_core::object::SceneObject;
use snapmeasure_core::scene::Scene;

/// 创建工具集的全部命令，按注册顺序
pub fn create_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(MeasureDistanceCommand),
        Box::new(ToggleSnapVertexCommand),
        Box::new(OriginFromEdgeCommand),
        Box::new(OriginFromSelectionCommand),
        Box::new(AlignXZeroCommand),
    ]
}

/// 活动的网格对象，没有或类型不对时返回 `NoObject`
fn active_mesh<'a>(
    scene: &'a mut Scene,
    message: &'static str,
) -> Result<&'a mut SceneObject, CommandError> {
    match scene.active_object_mut() {
        Some(obj) if obj.is_mesh() => Ok(obj),
        _ => Err(CommandError::NoObject(message)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use snapmeasure_core::prelude::*;

    /// 单个网格对象的场景，`selected` 中的顶点被选中
    pub fn mesh_scene(
        positions: &[(f64, f64, f64)],
        edges: &[[usize; 2]],
        selected: &[usize],
        mode: ObjectMode,
    ) -> (Scene, ObjectId) {
        let mut mesh = EditMesh::from_geometry(
            positions.iter().map(|&(x, y, z)| Point3::new(x, y, z)),
            edges.iter().copied(),
        )
        .unwrap();
        for &i in selected {
            mesh.select_vertex(i, true).unwrap();
        }

        let mut scene = Scene::new();
        let id = scene.add_object(SceneObject::new_mesh("Mesh", mesh));
        scene.set_active(id).unwrap();
        scene.object_mut(id).unwrap().set_mode(mode).unwrap();
        (scene, id)
    }

    /// 选中了 `selected` 的立方体（边长 2，编辑模式）
    pub fn cube_scene(selected: &[usize]) -> (Scene, ObjectId) {
        let mut scene = Scene::new();
        let id = scene.add_object(SceneObject::new_mesh("Cube", EditMesh::cube(2.0)));
        scene.set_active(id).unwrap();
        let obj = scene.object_mut(id).unwrap();
        obj.set_mode(ObjectMode::Edit).unwrap();
        let mesh = obj.mesh_mut().unwrap();
        for &i in selected {
            mesh.select_vertex(i, true).unwrap();
        }
        (scene, id)
    }
}
