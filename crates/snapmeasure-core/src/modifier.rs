//! 修改器栈
//!
//! 每个对象持有一个有序的修改器列表，按名称查找、按顺序求值。

use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 镜像修改器参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorSettings {
    /// 沿 X/Y/Z 轴镜像
    pub use_axis: [bool; 3],
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            use_axis: [true, false, false],
        }
    }
}

/// 修改器类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModifierKind {
    Mirror(MirrorSettings),
    Subdivision { levels: u32 },
}

impl ModifierKind {
    pub fn mirror() -> Self {
        ModifierKind::Mirror(MirrorSettings::default())
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierKind::Mirror(settings) => {
                let axes: String = ['X', 'Y', 'Z']
                    .iter()
                    .zip(settings.use_axis)
                    .filter(|(_, on)| *on)
                    .map(|(axis, _)| *axis)
                    .collect();
                write!(f, "Mirror {}", axes)
            }
            ModifierKind::Subdivision { levels } => write!(f, "Subdivision {}", levels),
        }
    }
}

/// 修改器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub kind: ModifierKind,
}

/// 修改器栈（索引 0 最先求值）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierStack {
    modifiers: Vec<Modifier>,
}

impl ModifierStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在栈尾追加修改器，名称冲突时追加 ".001" 形式的后缀
    pub fn add(&mut self, name: &str, kind: ModifierKind) -> &mut Modifier {
        let name = self.unique_name(name);
        self.modifiers.push(Modifier { name, kind });
        let last = self.modifiers.len() - 1;
        &mut self.modifiers[last]
    }

    fn unique_name(&self, base: &str) -> String {
        if self.get(base).is_none() {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{}.{:03}", base, n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    pub fn get(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Modifier> {
        self.modifiers.iter_mut().find(|m| m.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.modifiers.iter().position(|m| m.name == name)
    }

    /// 上移一位，已在栈顶时返回 false
    pub fn move_up(&mut self, name: &str) -> Result<bool, SceneError> {
        let index = self
            .position(name)
            .ok_or_else(|| SceneError::ModifierNotFound(name.to_string()))?;
        if index == 0 {
            return Ok(false);
        }
        self.modifiers.swap(index, index - 1);
        Ok(true)
    }

    /// 下移一位，已在栈底时返回 false
    pub fn move_down(&mut self, name: &str) -> Result<bool, SceneError> {
        let index = self
            .position(name)
            .ok_or_else(|| SceneError::ModifierNotFound(name.to_string()))?;
        if index + 1 >= self.modifiers.len() {
            return Ok(false);
        }
        self.modifiers.swap(index, index + 1);
        Ok(true)
    }

    pub fn remove(&mut self, name: &str) -> Option<Modifier> {
        let index = self.position(name)?;
        Some(self.modifiers.remove(index))
    }

    pub fn first(&self) -> Option<&Modifier> {
        self.modifiers.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> ModifierStack {
        let mut stack = ModifierStack::new();
        stack.add("Subdivision", ModifierKind::Subdivision { levels: 2 });
        stack.add("Subdivision", ModifierKind::Subdivision { levels: 1 });
        stack
    }

    #[test]
    fn test_unique_names() {
        let mut stack = stack();
        stack.add("Mirror", ModifierKind::mirror());
        let second = stack.add("Mirror", ModifierKind::mirror());
        assert_eq!(second.name, "Mirror.001");
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn test_move_up_to_top() {
        let mut stack = stack();
        stack.add("Mirror", ModifierKind::mirror());
        assert_eq!(stack.position("Mirror"), Some(2));

        while stack.move_up("Mirror").unwrap() {}

        assert_eq!(stack.first().unwrap().name, "Mirror");
        let names: Vec<_> = stack.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Mirror", "Subdivision", "Subdivision.001"]);
    }

    #[test]
    fn test_move_down_and_missing() {
        let mut stack = stack();
        assert!(stack.move_down("Subdivision").unwrap());
        assert!(!stack.move_down("Subdivision").unwrap());
        assert!(matches!(
            stack.move_up("Nope"),
            Err(SceneError::ModifierNotFound(_))
        ));
    }

    #[test]
    fn test_kind_display() {
        let mirror = ModifierKind::Mirror(MirrorSettings {
            use_axis: [true, false, true],
        });
        assert_eq!(mirror.to_string(), "Mirror XZ");
        assert_eq!(ModifierKind::Subdivision { levels: 2 }.to_string(), "Subdivision 2");
    }
}
