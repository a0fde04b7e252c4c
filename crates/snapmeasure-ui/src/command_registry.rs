//! 命令注册表
//!
//! 标识符 -> 命令对象的映射，支持别名和 Tab 补全。
//! 所有调用都经过 `invoke`，它负责撤销记录、日志和错误转换。

use crate::command::{Command, CommandContext, CommandStatus, Invocation, Report, ReportLevel};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// 命令注册表
pub struct CommandRegistry {
    /// 标识符 -> 命令
    commands: HashMap<String, Box<dyn Command>>,
    /// 注册顺序
    order: Vec<String>,
    /// 用户别名 -> 标识符
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    /// 创建空的命令注册表
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
            aliases: HashMap::new(),
        }
    }

    /// 注册命令，同名命令会被替换
    pub fn register(&mut self, command: Box<dyn Command>) {
        let id = command.id().to_lowercase();
        if self.commands.insert(id.clone(), command).is_some() {
            warn!("Command {} registered twice, replacing", id);
        } else {
            self.order.push(id.clone());
        }
        debug!("Registered command {}", id);
    }

    /// 注销命令，同时移除指向它的别名
    pub fn unregister(&mut self, id: &str) -> Option<Box<dyn Command>> {
        let id = id.to_lowercase();
        let command = self.commands.remove(&id)?;
        self.order.retain(|c| *c != id);
        self.aliases.retain(|_, target| *target != id);
        debug!("Unregistered command {}", id);
        Some(command)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(&id.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// 解析输入（标识符或别名，不区分大小写）为标识符
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let key = input.trim().to_lowercase();

        // 1. 先查标识符
        if let Some((id, _)) = self.commands.get_key_value(&key) {
            return Some(id.as_str());
        }

        // 2. 再查别名
        let target = self.aliases.get(&key)?;
        self.commands.get_key_value(target).map(|(id, _)| id.as_str())
    }

    /// 查找命令
    pub fn lookup(&self, input: &str) -> Option<&dyn Command> {
        let id = self.resolve(input)?;
        self.commands.get(id).map(|c| &**c)
    }

    /// Tab 补全
    ///
    /// 返回所有以 prefix 开头的标识符和别名
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim().to_lowercase();
        let mut results: Vec<String> = self
            .commands
            .keys()
            .chain(self.aliases.keys())
            .filter(|name| name.starts_with(&prefix))
            .cloned()
            .collect();

        results.sort();
        results
    }

    /// 按注册顺序遍历命令
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.order
            .iter()
            .filter_map(|id| self.commands.get(id).map(|c| &**c))
    }

    // ========== 别名 ==========

    /// 添加用户别名
    pub fn add_alias(&mut self, alias: &str, command: &str) -> bool {
        let alias = alias.to_lowercase();
        let command = command.to_lowercase();

        // 不允许覆盖现有命令，目标命令必须存在
        if self.commands.contains_key(&alias) || !self.commands.contains_key(&command) {
            return false;
        }

        self.aliases.insert(alias, command);
        true
    }

    pub fn remove_alias(&mut self, alias: &str) {
        self.aliases.remove(&alias.to_lowercase());
    }

    /// 从文件加载别名
    ///
    /// 文件格式：每行 "alias<空白>command"，以 # 开头的行是注释。
    /// 返回成功加载的别名数量。
    pub fn load_aliases(&mut self, path: &Path) -> Result<usize, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let mut loaded = 0;

        for line in content.lines() {
            let line = line.trim();

            // 跳过注释和空行
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 2 && self.add_alias(parts[0], parts[1]) {
                loaded += 1;
            } else {
                warn!("Ignoring alias line: {}", line);
            }
        }

        info!("Loaded {} aliases from {}", loaded, path.display());
        Ok(loaded)
    }

    /// 保存别名到文件
    pub fn save_aliases(&self, path: &Path) -> Result<(), std::io::Error> {
        let mut content = String::new();
        content.push_str("# SnapMeasure Command Aliases\n");
        content.push_str("# Format: alias\\tcommand\n\n");

        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort();
        for (alias, command) in aliases {
            content.push_str(&format!("{}\t{}\n", alias, command));
        }

        std::fs::write(path, content)
    }

    // ========== 调用 ==========

    /// 调用命令
    ///
    /// 可撤销命令在执行前记录活动网格快照，成功后压入一步撤销。
    pub fn invoke(&self, input: &str, ctx: &mut CommandContext) -> Invocation {
        let Some(command) = self.lookup(input) else {
            let report = Report::error(format!("Unknown command: {}", input.trim()));
            warn!("{}", report.message);
            ctx.view.set_status(&report);
            return Invocation {
                status: CommandStatus::Cancelled,
                report: Some(report),
            };
        };

        let before = if command.undoable() {
            ctx.scene
                .active_id()
                .and_then(|id| ctx.scene.snapshot_mesh(id))
        } else {
            None
        };

        let invocation = match command.execute(ctx) {
            Ok(message) => {
                if let Some(before) = before {
                    ctx.scene.record_edit(command.label(), before);
                }
                info!(
                    "{} finished{}",
                    command.id(),
                    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
                );
                Invocation {
                    status: CommandStatus::Finished,
                    report: message.map(Report::info),
                }
            }
            Err(err) => {
                let report = err.to_report();
                match report.level {
                    ReportLevel::Error => error!("{} cancelled: {}", command.id(), err),
                    _ => warn!("{} cancelled: {}", command.id(), err),
                }
                Invocation {
                    status: CommandStatus::Cancelled,
                    report: Some(report),
                }
            }
        };

        if let Some(report) = &invocation.report {
            ctx.view.set_status(report);
        }
        invocation
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandError, CommandResult};
    use crate::commands::create_commands;
    use crate::commands::fixtures::cube_scene;
    use crate::view_state::ViewState;
    use snapmeasure_core::prelude::*;
    use tempfile::TempDir;

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for command in create_commands() {
            registry.register(command);
        }
        registry
    }

    struct Failing;

    impl Command for Failing {
        fn id(&self) -> &'static str {
            "test.failing"
        }
        fn label(&self) -> &'static str {
            "Failing"
        }
        fn description(&self) -> &'static str {
            "Always fails"
        }
        fn icon(&self) -> &'static str {
            "!"
        }
        fn execute(&self, _ctx: &mut CommandContext) -> CommandResult {
            Err(CommandError::ZeroScale)
        }
    }

    #[test]
    fn test_lookup() {
        let registry = registry();

        assert_eq!(
            registry.lookup("mesh.measure_distance").map(|c| c.id()),
            Some("mesh.measure_distance")
        );
        assert_eq!(
            registry.resolve("  MESH.SNAP_X_ZERO "),
            Some("mesh.snap_x_zero")
        );

        // 不存在的命令
        assert!(registry.lookup("mesh.nothing").is_none());
    }

    #[test]
    fn test_registration_order() {
        let registry = registry();
        let ids: Vec<_> = registry.commands().map(|c| c.id()).collect();
        assert_eq!(
            ids,
            [
                "mesh.measure_distance",
                "mesh.toggle_snap_vertex",
                "mesh.mirror_selection",
                "mesh.origin_from_selection",
                "mesh.snap_x_zero",
            ]
        );
    }

    #[test]
    fn test_complete() {
        let mut registry = registry();
        registry.add_alias("mirror", "mesh.mirror_selection");

        let completions = registry.complete("mesh.o");
        assert_eq!(completions, ["mesh.origin_from_selection"]);
        assert_eq!(registry.complete("mi"), ["mirror"]);
    }

    #[test]
    fn test_alias() {
        let mut registry = registry();

        assert!(registry.add_alias("MD", "mesh.measure_distance"));
        assert_eq!(registry.resolve("md"), Some("mesh.measure_distance"));

        // 不能覆盖命令，目标必须存在
        assert!(!registry.add_alias("mesh.snap_x_zero", "mesh.measure_distance"));
        assert!(!registry.add_alias("zz", "mesh.nothing"));

        registry.remove_alias("md");
        assert!(registry.resolve("md").is_none());
    }

    #[test]
    fn test_unregister_drops_aliases() {
        let mut registry = registry();
        registry.add_alias("x0", "mesh.snap_x_zero");

        assert!(registry.unregister("mesh.snap_x_zero").is_some());
        assert!(registry.unregister("mesh.snap_x_zero").is_none());
        assert!(registry.resolve("x0").is_none());
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_alias_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("aliases.txt");
        std::fs::write(
            &path,
            "# comment\n\nmd mesh.measure_distance\nsnap\tmesh.toggle_snap_vertex\nbroken\nzz mesh.nothing\n",
        )
        .unwrap();

        let mut registry = registry();
        assert_eq!(registry.load_aliases(&path).unwrap(), 2);
        assert_eq!(registry.resolve("snap"), Some("mesh.toggle_snap_vertex"));

        let saved = temp_dir.path().join("saved.txt");
        registry.save_aliases(&saved).unwrap();
        let mut reloaded = super::CommandRegistry::new();
        for command in create_commands() {
            reloaded.register(command);
        }
        assert_eq!(reloaded.load_aliases(&saved).unwrap(), 2);
        assert_eq!(reloaded.resolve("md"), Some("mesh.measure_distance"));
    }

    #[test]
    fn test_invoke_unknown() {
        let registry = registry();
        let mut scene = Scene::new();
        let mut view = ViewState::default();

        let result = registry.invoke("mesh.nothing", &mut CommandContext::new(&mut scene, &mut view));
        assert_eq!(result.status, CommandStatus::Cancelled);
        assert_eq!(view.status_message, "Unknown command: mesh.nothing");
    }

    #[test]
    fn test_invoke_maps_errors_to_reports() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(Failing));
        let mut scene = Scene::new();
        let mut view = ViewState::default();

        let result = registry.invoke("test.failing", &mut CommandContext::new(&mut scene, &mut view));
        assert_eq!(result.status, CommandStatus::Cancelled);
        let report = result.report.unwrap();
        assert_eq!(report.level, ReportLevel::Error);
        assert_eq!(view.status_level, ReportLevel::Error);
        assert_eq!(view.status_message, report.message);
    }

    #[test]
    fn test_invoke_undoable_records_one_step() {
        let registry = registry();
        let mut scene = Scene::new();
        let id = scene.add_object(SceneObject::new_mesh("Cube", EditMesh::cube(2.0)));
        scene.set_active(id).unwrap();
        {
            let obj = scene.active_object_mut().unwrap();
            obj.set_mode(ObjectMode::Edit).unwrap();
            let mesh = obj.mesh_mut().unwrap();
            mesh.select_vertex(0, true).unwrap();
            mesh.select_vertex(4, true).unwrap();
        }
        let mut view = ViewState::default();

        let result = registry.invoke("mesh.snap_x_zero", &mut CommandContext::new(&mut scene, &mut view));
        assert!(result.is_finished());
        assert_eq!(scene.history().len(), 1);
        assert_eq!(scene.object(id).unwrap().mesh().unwrap().verts()[4].co.x, 0.0);

        scene.undo().unwrap();
        let mesh = scene.object(id).unwrap().mesh().unwrap();
        assert_eq!(mesh.verts()[0].co.x, -1.0);
        assert_eq!(mesh.verts()[4].co.x, -1.0);

        // 非撤销命令不记录
        registry.invoke("mesh.toggle_snap_vertex", &mut CommandContext::new(&mut scene, &mut view));
        assert_eq!(scene.history().len(), 1);
    }

    fn world_positions(scene: &Scene, id: ObjectId) -> Vec<Point3> {
        let obj = scene.object(id).unwrap();
        obj.mesh()
            .unwrap()
            .verts()
            .iter()
            .map(|v| obj.to_world(&v.co))
            .collect()
    }

    fn assert_same_geometry(expected: &[Point3], actual: &[Point3]) {
        assert_eq!(expected.len(), actual.len());
        for (a, b) in expected.iter().zip(actual) {
            assert!((a - b).norm() < EPSILON, "{} != {}", a, b);
        }
    }

    #[test]
    fn test_undo_align_after_origin_change() {
        let registry = registry();
        let (mut scene, id) = cube_scene(&[1, 2]);
        let mut view = ViewState::default();
        let original = world_positions(&scene, id);

        let aligned = registry.invoke("mesh.snap_x_zero", &mut CommandContext::new(&mut scene, &mut view));
        assert!(aligned.is_finished());
        let after_align = world_positions(&scene, id);

        let placed = registry.invoke(
            "mesh.origin_from_selection",
            &mut CommandContext::new(&mut scene, &mut view),
        );
        assert!(placed.is_finished());
        assert_eq!(scene.history().len(), 2);
        // 选中顶点 1、2 对齐后的中心
        let origin = Point3::new(0.0, 0.0, -1.0);
        assert!((scene.object(id).unwrap().location() - origin).norm() < EPSILON);

        assert_eq!(scene.undo().unwrap().as_deref(), Some("Origin from Selection"));
        assert_same_geometry(&after_align, &world_positions(&scene, id));
        assert_eq!(scene.object(id).unwrap().location(), Point3::origin());

        assert_eq!(scene.undo().unwrap().as_deref(), Some("Align to X = 0"));
        assert_same_geometry(&original, &world_positions(&scene, id));

        scene.redo().unwrap();
        scene.redo().unwrap();
        assert_same_geometry(&after_align, &world_positions(&scene, id));
        assert!((scene.object(id).unwrap().location() - origin).norm() < EPSILON);
    }

    #[test]
    fn test_undo_origin_from_edge_removes_mirror() {
        let registry = registry();
        let (mut scene, id) = cube_scene(&[1, 2]);
        let mut view = ViewState::default();
        let original = world_positions(&scene, id);

        let result = registry.invoke(
            "mesh.mirror_selection",
            &mut CommandContext::new(&mut scene, &mut view),
        );
        assert!(result.is_finished());
        assert_eq!(scene.object(id).unwrap().modifiers.len(), 1);

        scene.undo().unwrap();
        let obj = scene.object(id).unwrap();
        assert!(obj.modifiers.is_empty());
        assert_eq!(obj.location(), Point3::origin());
        assert_same_geometry(&original, &world_positions(&scene, id));
    }
}
