//! 场景
//!
//! 编辑会话拥有的全部状态。工具集的命令每次执行时都从这里重新读取。

use crate::error::SceneError;
use crate::history::{EditHistory, MeshEdit, MeshSnapshot};
use crate::math::Point3;
use crate::object::{ObjectId, SceneObject};
use crate::snap::ToolSettings;
use crate::units::UnitSettings;
use tracing::debug;

/// 3D 游标
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    /// 世界坐标
    pub location: Point3,
}

/// 场景
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    active: Option<ObjectId>,
    next_id: u64,
    pub cursor: Cursor,
    pub unit_settings: UnitSettings,
    pub tool_settings: ToolSettings,
    history: EditHistory,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加对象并分配 ID
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        object.id = id;
        debug!("Added {} '{}' as {}", object.type_name(), object.name, id);
        self.objects.push(object);
        id
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    // ========== 活动对象 ==========

    pub fn set_active(&mut self, id: ObjectId) -> Result<(), SceneError> {
        if self.object(id).is_none() {
            return Err(SceneError::ObjectNotFound(id.0));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn active_id(&self) -> Option<ObjectId> {
        self.active
    }

    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active.and_then(|id| self.object(id))
    }

    pub fn active_object_mut(&mut self) -> Option<&mut SceneObject> {
        let id = self.active?;
        self.object_mut(id)
    }

    // ========== 撤销 ==========

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// 记录网格对象当前的顶点坐标、世界变换和修改器
    pub fn snapshot_mesh(&self, id: ObjectId) -> Option<MeshSnapshot> {
        let object = self.object(id)?;
        let mesh = object.mesh()?;
        Some(MeshSnapshot {
            object: id,
            positions: mesh.positions(),
            matrix_world: object.matrix_world,
            modifiers: object.modifiers.clone(),
        })
    }

    /// 以 `before` 为起点记录一步撤销，对象没有变化时不记录
    pub fn record_edit(&mut self, label: &str, before: MeshSnapshot) -> bool {
        let Some(after) = self.snapshot_mesh(before.object) else {
            return false;
        };
        if after == before {
            return false;
        }
        self.history.push(MeshEdit {
            label: label.to_string(),
            before,
            after,
        });
        true
    }

    /// 撤销一步，返回该步的名称
    pub fn undo(&mut self) -> Result<Option<String>, SceneError> {
        let Some(edit) = self.history.undo().cloned() else {
            return Ok(None);
        };
        self.apply_snapshot(&edit.before)?;
        Ok(Some(edit.label))
    }

    /// 重做一步，返回该步的名称
    pub fn redo(&mut self) -> Result<Option<String>, SceneError> {
        let Some(edit) = self.history.redo().cloned() else {
            return Ok(None);
        };
        self.apply_snapshot(&edit.after)?;
        Ok(Some(edit.label))
    }

    fn apply_snapshot(&mut self, snapshot: &MeshSnapshot) -> Result<(), SceneError> {
        let object = self
            .object_mut(snapshot.object)
            .ok_or(SceneError::ObjectNotFound(snapshot.object.0))?;
        object
            .require_mesh_mut()?
            .restore_positions(&snapshot.positions)?;
        object.matrix_world = snapshot.matrix_world;
        object.modifiers = snapshot.modifiers.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vector3, EPSILON};
    use crate::mesh::EditMesh;

    fn world_positions(scene: &Scene, id: ObjectId) -> Vec<Point3> {
        let obj = scene.object(id).unwrap();
        obj.mesh()
            .unwrap()
            .verts()
            .iter()
            .map(|v| obj.to_world(&v.co))
            .collect()
    }

    #[test]
    fn test_active_object() {
        let mut scene = Scene::new();
        assert!(scene.active_object().is_none());

        let cube = scene.add_object(SceneObject::new_mesh("Cube", EditMesh::cube(1.0)));
        let empty = scene.add_object(SceneObject::new_empty("Empty"));
        assert_ne!(cube, empty);

        scene.set_active(empty).unwrap();
        assert_eq!(scene.active_object().unwrap().name, "Empty");
        assert!(matches!(
            scene.set_active(ObjectId(99)),
            Err(SceneError::ObjectNotFound(99))
        ));
        assert_eq!(scene.active_id(), Some(empty));
    }

    #[test]
    fn test_record_and_undo_edit() {
        let mut scene = Scene::new();
        let id = scene.add_object(SceneObject::new_mesh("Cube", EditMesh::cube(2.0)));

        let before = scene.snapshot_mesh(id).unwrap();
        // 未修改时不记录
        assert!(!scene.record_edit("noop", before.clone()));

        scene.object_mut(id).unwrap().mesh_mut().unwrap().verts_mut()[0].co.x = 0.0;
        assert!(scene.record_edit("edit", before));

        assert_eq!(scene.undo().unwrap().as_deref(), Some("edit"));
        assert_eq!(scene.object(id).unwrap().mesh().unwrap().verts()[0].co.x, -1.0);

        assert_eq!(scene.redo().unwrap().as_deref(), Some("edit"));
        assert_eq!(scene.object(id).unwrap().mesh().unwrap().verts()[0].co.x, 0.0);

        assert_eq!(scene.redo().unwrap(), None);
    }

    #[test]
    fn test_undo_across_origin_change() {
        let mut scene = Scene::new();
        let id = scene.add_object(SceneObject::new_mesh("Cube", EditMesh::cube(2.0)));
        let original = world_positions(&scene, id);

        // 第一步：移动一个顶点
        let before = scene.snapshot_mesh(id).unwrap();
        scene.object_mut(id).unwrap().mesh_mut().unwrap().verts_mut()[1].co.x = 0.0;
        assert!(scene.record_edit("align", before));
        let aligned = world_positions(&scene, id);

        // 第二步：移动原点，局部坐标整体平移
        let before = scene.snapshot_mesh(id).unwrap();
        scene
            .object_mut(id)
            .unwrap()
            .set_origin(&Point3::new(0.0, 0.0, -1.0))
            .unwrap();
        assert!(scene.record_edit("origin", before));

        assert_eq!(scene.undo().unwrap().as_deref(), Some("origin"));
        assert_eq!(scene.object(id).unwrap().location(), Point3::origin());
        for (a, b) in aligned.iter().zip(world_positions(&scene, id)) {
            assert!((a - b).norm() < EPSILON);
        }

        assert_eq!(scene.undo().unwrap().as_deref(), Some("align"));
        for (a, b) in original.iter().zip(world_positions(&scene, id)) {
            assert!((a - b).norm() < EPSILON);
        }

        scene.redo().unwrap();
        scene.redo().unwrap();
        let obj = scene.object(id).unwrap();
        assert!((obj.location() - Point3::new(0.0, 0.0, -1.0)).norm() < EPSILON);
        assert!((obj.matrix_world.transform_vector(&Vector3::x()) - Vector3::x()).norm() < EPSILON);
    }
}
