//! 场景配置
//!
//! 单位设置与捕捉设置，以 JSON 文件保存和加载。

use crate::error::ConfigError;
use crate::scene::Scene;
use crate::snap::ToolSettings;
use crate::units::UnitSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub unit_settings: UnitSettings,
    pub tool_settings: ToolSettings,
}

impl SceneConfig {
    /// 从场景当前设置生成配置
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            unit_settings: scene.unit_settings.clone(),
            tool_settings: scene.tool_settings.clone(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        tracing::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn apply(&self, scene: &mut Scene) {
        scene.unit_settings = self.unit_settings.clone();
        scene.tool_settings = self.tool_settings.clone();
    }
}
