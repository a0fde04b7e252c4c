//! 场景对象

use crate::error::SceneError;
use crate::math::{Matrix4, Point3};
use crate::mesh::EditMesh;
use crate::modifier::ModifierStack;
use std::fmt;

/// 对象唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 交互模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectMode {
    #[default]
    Object,
    Edit,
}

impl ObjectMode {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectMode::Object => "Object Mode",
            ObjectMode::Edit => "Edit Mode",
        }
    }
}

/// 编辑模式下的元素选择模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    #[default]
    Vertex,
    Edge,
    Face,
}

/// 对象数据
#[derive(Debug, Clone)]
pub enum ObjectData {
    Mesh(EditMesh),
    /// 空对象，没有几何
    Empty,
}

/// 场景对象
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub data: ObjectData,
    mode: ObjectMode,
    select_mode: SelectMode,
    /// 局部 -> 世界变换
    pub matrix_world: Matrix4,
    pub modifiers: ModifierStack,
}

impl SceneObject {
    fn with_data(name: &str, data: ObjectData) -> Self {
        Self {
            // 加入场景时分配
            id: ObjectId(0),
            name: name.to_string(),
            data,
            mode: ObjectMode::Object,
            select_mode: SelectMode::Vertex,
            matrix_world: Matrix4::identity(),
            modifiers: ModifierStack::new(),
        }
    }

    pub fn new_mesh(name: &str, mesh: EditMesh) -> Self {
        Self::with_data(name, ObjectData::Mesh(mesh))
    }

    pub fn new_empty(name: &str) -> Self {
        Self::with_data(name, ObjectData::Empty)
    }

    pub fn with_matrix(mut self, matrix_world: Matrix4) -> Self {
        self.matrix_world = matrix_world;
        self
    }

    pub fn type_name(&self) -> &'static str {
        match self.data {
            ObjectData::Mesh(_) => "MESH",
            ObjectData::Empty => "EMPTY",
        }
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.data, ObjectData::Mesh(_))
    }

    pub fn mesh(&self) -> Option<&EditMesh> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            ObjectData::Empty => None,
        }
    }

    pub fn mesh_mut(&mut self) -> Option<&mut EditMesh> {
        match &mut self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            ObjectData::Empty => None,
        }
    }

    /// 网格访问，非网格对象返回 `NotAMesh`
    pub fn require_mesh_mut(&mut self) -> Result<&mut EditMesh, SceneError> {
        let name = self.name.clone();
        self.mesh_mut().ok_or(SceneError::NotAMesh(name))
    }

    // ========== 模式 ==========

    pub fn mode(&self) -> ObjectMode {
        self.mode
    }

    pub fn is_editing_mesh(&self) -> bool {
        self.is_mesh() && self.mode == ObjectMode::Edit
    }

    /// 切换交互模式，只有网格对象可以进入编辑模式
    pub fn set_mode(&mut self, mode: ObjectMode) -> Result<(), SceneError> {
        if mode == ObjectMode::Edit && !self.is_mesh() {
            return Err(SceneError::NotAMesh(self.name.clone()));
        }
        if self.mode != mode {
            tracing::debug!("{}: {} -> {}", self.name, self.mode.name(), mode.name());
        }
        self.mode = mode;
        Ok(())
    }

    pub fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    /// 切换选择模式，切到边模式时刷新顶点选择
    pub fn set_select_mode(&mut self, select_mode: SelectMode) {
        self.select_mode = select_mode;
        if select_mode == SelectMode::Edge {
            if let Some(mesh) = self.mesh_mut() {
                mesh.flush_edge_selection();
            }
        }
    }

    // ========== 变换 ==========

    pub fn location(&self) -> Point3 {
        self.matrix_world.transform_point(&Point3::origin())
    }

    pub fn to_world(&self, local: &Point3) -> Point3 {
        self.matrix_world.transform_point(local)
    }

    /// 把对象原点移到给定世界坐标，几何的世界位置保持不变
    pub fn set_origin(&mut self, world: &Point3) -> Result<(), SceneError> {
        let inverse = self
            .matrix_world
            .try_inverse()
            .ok_or_else(|| SceneError::SingularTransform(self.name.clone()))?;
        let offset = inverse.transform_point(world).coords;
        if let Some(mesh) = self.mesh_mut() {
            mesh.translate(&-offset);
        }
        self.matrix_world *= Matrix4::new_translation(&offset);
        Ok(())
    }
}
