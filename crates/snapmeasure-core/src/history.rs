//! 网格编辑撤销历史
//!
//! 每个可撤销命令记录一步：执行前后的对象快照。
//! 顶点坐标是局部坐标，只有和世界变换一起恢复才有意义。

use crate::math::{Matrix4, Point3};
use crate::modifier::ModifierStack;
use crate::object::ObjectId;

/// 某个网格对象的快照：局部顶点坐标、世界变换和修改器栈
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSnapshot {
    pub object: ObjectId,
    pub positions: Vec<Point3>,
    pub matrix_world: Matrix4,
    pub modifiers: ModifierStack,
}

/// 一步网格编辑
#[derive(Debug, Clone)]
pub struct MeshEdit {
    /// 显示在历史面板中的名称
    pub label: String,
    pub before: MeshSnapshot,
    pub after: MeshSnapshot,
}

/// 撤销历史
#[derive(Debug, Clone)]
pub struct EditHistory {
    items: Vec<MeshEdit>,
    /// 指向最后一个已应用的步骤，-1 表示全部已撤销
    index: isize,
    max_depth: usize,
}

impl EditHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            items: Vec::new(),
            index: -1,
            max_depth: max_depth.max(1),
        }
    }

    pub fn push(&mut self, edit: MeshEdit) {
        // 截断 redo 历史
        let new_len = (self.index + 1) as usize;
        self.items.truncate(new_len);

        self.items.push(edit);
        if self.items.len() > self.max_depth {
            self.items.remove(0);
        }
        self.index = self.items.len() as isize - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.index >= 0
    }

    pub fn can_redo(&self) -> bool {
        (self.index + 1) < self.items.len() as isize
    }

    /// 撤销一步，返回需要恢复的编辑
    pub fn undo(&mut self) -> Option<&MeshEdit> {
        if self.can_undo() {
            let item = &self.items[self.index as usize];
            self.index -= 1;
            Some(item)
        } else {
            None
        }
    }

    /// 重做一步，返回需要重新应用的编辑
    pub fn redo(&mut self) -> Option<&MeshEdit> {
        if self.can_redo() {
            self.index += 1;
            Some(&self.items[self.index as usize])
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index = -1;
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(label: &str, x: f64) -> MeshEdit {
        let snap = |x: f64| MeshSnapshot {
            object: ObjectId(1),
            positions: vec![Point3::new(x, 0.0, 0.0)],
            matrix_world: Matrix4::identity(),
            modifiers: ModifierStack::new(),
        };
        MeshEdit {
            label: label.to_string(),
            before: snap(x),
            after: snap(x + 1.0),
        }
    }

    #[test]
    fn test_undo_redo() {
        let mut history = EditHistory::default();
        history.push(edit("a", 0.0));
        history.push(edit("b", 1.0));

        assert_eq!(history.undo().unwrap().label, "b");
        assert_eq!(history.undo().unwrap().label, "a");
        assert!(history.undo().is_none());
        assert_eq!(history.redo().unwrap().label, "a");
        assert!(history.can_redo());
    }

    #[test]
    fn test_push_truncates_redo() {
        let mut history = EditHistory::default();
        history.push(edit("a", 0.0));
        history.push(edit("b", 1.0));
        history.undo();
        history.push(edit("c", 2.0));

        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo().unwrap().label, "c");
    }

    #[test]
    fn test_max_depth() {
        let mut history = EditHistory::new(2);
        for (i, label) in ["a", "b", "c"].iter().enumerate() {
            history.push(edit(label, i as f64));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo().unwrap().label, "c");
        assert_eq!(history.undo().unwrap().label, "b");
        assert!(history.undo().is_none());
    }
}
