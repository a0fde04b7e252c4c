//! SnapMeasure 宿主模型
//!
//! 工具集运行在一个网格编辑会话中，本 crate 提供该会话拥有的全部状态：
//! - `Scene`: 对象、活动对象、3D 游标、单位设置、捕捉设置、撤销历史
//! - `SceneObject`: 模式、选择模式、世界变换、修改器栈
//! - `EditMesh`: 顶点坐标与选择标记、边
//!
//! 工具集只通过这些公开访问器读写状态。
//!
//! # 示例
//!
//! ```rust
//! use snapmeasure_core::prelude::*;
//!
//! let mut scene = Scene::new();
//! let id = scene.add_object(SceneObject::new_mesh("Cube", EditMesh::cube(2.0)));
//! scene.set_active(id).unwrap();
//!
//! let obj = scene.active_object().unwrap();
//! println!("{} has {} vertices", obj.name, obj.mesh().unwrap().vertex_count());
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod math;
pub mod mesh;
pub mod modifier;
pub mod object;
pub mod scene;
pub mod snap;
pub mod units;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::config::SceneConfig;
    pub use crate::error::{ConfigError, SceneError};
    pub use crate::history::{EditHistory, MeshEdit, MeshSnapshot};
    pub use crate::math::{Matrix4, Point3, Vector3, EPSILON};
    pub use crate::mesh::{Edge, EditMesh, Vertex};
    pub use crate::modifier::{MirrorSettings, Modifier, ModifierKind, ModifierStack};
    pub use crate::object::{ObjectData, ObjectId, ObjectMode, SceneObject, SelectMode};
    pub use crate::scene::{Cursor, Scene};
    pub use crate::snap::{SnapElement, SnapElements, SnapTarget, ToolSettings};
    pub use crate::units::{LengthUnit, UnitSettings, UnitSystem};
}
