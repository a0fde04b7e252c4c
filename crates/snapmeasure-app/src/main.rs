//! SnapMeasure 演示应用程序
//! 使用 eframe 作为应用框架，头部菜单挂载测量与捕捉工具集

use std::path::Path;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use snapmeasure_core::config::SceneConfig;
use snapmeasure_core::math::{Matrix4, Point3, Vector3};
use snapmeasure_core::mesh::EditMesh;
use snapmeasure_core::modifier::ModifierKind;
use snapmeasure_core::object::{ObjectMode, SceneObject};
use snapmeasure_core::scene::Scene;
use snapmeasure_ui::command::{CommandContext, Report};
use snapmeasure_ui::command_line::show_command_line;
use snapmeasure_ui::header::{show_header, HeaderContext, HeaderResponse};
use snapmeasure_ui::{CommandRegistry, HeaderMenu, ViewState};

/// 配置文件（工作目录下，可选）
const CONFIG_FILE: &str = "snapmeasure.json";
const ALIAS_FILE: &str = "snapmeasure_aliases.txt";

/// 视口缩放（像素 / 单位）
const VIEW_SCALE: f32 = 60.0;
/// 点选顶点的像素容差
const PICK_RADIUS: f32 = 8.0;

struct SnapMeasureApp {
    scene: Scene,
    view: ViewState,
    registry: CommandRegistry,
    header: HeaderMenu,
}

impl Default for SnapMeasureApp {
    fn default() -> Self {
        let mut app = Self {
            scene: Scene::new(),
            view: ViewState::default(),
            registry: CommandRegistry::new(),
            header: HeaderMenu::new(),
        };
        snapmeasure_ui::register(&mut app.registry, &mut app.header);
        app.load_settings();
        app.create_demo_content();
        app
    }
}

impl Drop for SnapMeasureApp {
    fn drop(&mut self) {
        snapmeasure_ui::unregister(&mut self.registry, &mut self.header);
    }
}

impl SnapMeasureApp {
    fn load_settings(&mut self) {
        let config = Path::new(CONFIG_FILE);
        if config.exists() {
            match SceneConfig::load(config) {
                Ok(config) => config.apply(&mut self.scene),
                Err(e) => warn!("Failed to load {}: {}", CONFIG_FILE, e),
            }
        }

        let aliases = Path::new(ALIAS_FILE);
        if aliases.exists() {
            if let Err(e) = self.registry.load_aliases(aliases) {
                warn!("Failed to load {}: {}", ALIAS_FILE, e);
            }
        }
    }

    fn create_demo_content(&mut self) {
        let mut cube = SceneObject::new_mesh("Cube", EditMesh::cube(2.0))
            .with_matrix(Matrix4::new_translation(&Vector3::new(1.5, 0.0, 0.5)));
        cube.modifiers
            .add("Subdivision", ModifierKind::Subdivision { levels: 1 });
        let id = self.scene.add_object(cube);
        self.scene.add_object(SceneObject::new_empty("Empty"));

        if let Err(e) = self.scene.set_active(id) {
            warn!("Failed to activate demo cube: {}", e);
        }
        info!("Created {} demo objects", self.scene.objects().len());
    }

    fn invoke(&mut self, input: &str) {
        let mut ctx = CommandContext::new(&mut self.scene, &mut self.view);
        self.registry.invoke(input, &mut ctx);
    }

    // ========== 撤销/重做支持 ==========

    fn undo(&mut self) {
        let report = match self.scene.undo() {
            Ok(Some(label)) => Report::info(format!("Undo: {}", label)),
            Ok(None) => Report::info("Nothing to undo"),
            Err(e) => Report::error(format!("Undo failed: {}", e)),
        };
        self.view.set_status(&report);
    }

    fn redo(&mut self) {
        let report = match self.scene.redo() {
            Ok(Some(label)) => Report::info(format!("Redo: {}", label)),
            Ok(None) => Report::info("Nothing to redo"),
            Err(e) => Report::error(format!("Redo failed: {}", e)),
        };
        self.view.set_status(&report);
    }

    fn toggle_edit_mode(&mut self) {
        let Some(obj) = self.scene.active_object_mut() else {
            return;
        };
        let target = match obj.mode() {
            ObjectMode::Object => ObjectMode::Edit,
            ObjectMode::Edit => ObjectMode::Object,
        };
        let report = match obj.set_mode(target) {
            Ok(()) => Report::info(target.name()),
            Err(e) => Report::warning(e.to_string()),
        };
        self.view.set_status(&report);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (undo, redo, tab) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::Z),
                i.modifiers.command && i.key_pressed(egui::Key::Y),
                i.key_pressed(egui::Key::Tab),
            )
        });
        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if tab {
            self.toggle_edit_mode();
        }
    }

    // ========== 视口 ==========

    /// 正视图投影：X 向右，Z 向上
    fn project(center: egui::Pos2, p: &Point3) -> egui::Pos2 {
        egui::pos2(
            center.x + p.x as f32 * VIEW_SCALE,
            center.y - p.z as f32 * VIEW_SCALE,
        )
    }

    fn show_viewport(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let rect = response.rect;
            let center = rect.center();

            painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));
            painter.line_segment(
                [egui::pos2(center.x, rect.top()), egui::pos2(center.x, rect.bottom())],
                egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 40, 40)),
            );

            let Some(obj) = self.scene.active_object() else {
                return;
            };
            let Some(mesh) = obj.mesh() else {
                return;
            };
            let editing = obj.is_editing_mesh();
            let screen: Vec<egui::Pos2> = mesh
                .verts()
                .iter()
                .map(|v| Self::project(center, &obj.to_world(&v.co)))
                .collect();

            for edge in mesh.edges() {
                let [a, b] = edge.verts;
                let color = if editing && mesh.is_edge_selected(edge) {
                    egui::Color32::from_rgb(255, 160, 40)
                } else {
                    egui::Color32::LIGHT_GRAY
                };
                painter.line_segment([screen[a], screen[b]], egui::Stroke::new(1.5, color));
            }

            if editing {
                for (v, pos) in mesh.verts().iter().zip(&screen) {
                    let color = if v.select {
                        egui::Color32::from_rgb(255, 160, 40)
                    } else {
                        egui::Color32::BLACK
                    };
                    painter.circle_filled(*pos, 3.5, color);
                }
            }

            // 对象原点
            painter.circle_filled(
                Self::project(center, &obj.location()),
                3.0,
                egui::Color32::from_rgb(255, 200, 0),
            );

            // 3D 游标
            let cursor = Self::project(center, &self.scene.cursor.location);
            let stroke = egui::Stroke::new(1.0, egui::Color32::RED);
            painter.circle_stroke(cursor, 6.0, stroke);
            painter.line_segment([cursor - egui::vec2(10.0, 0.0), cursor + egui::vec2(10.0, 0.0)], stroke);
            painter.line_segment([cursor - egui::vec2(0.0, 10.0), cursor + egui::vec2(0.0, 10.0)], stroke);

            // 点选顶点
            if !editing || !response.clicked() {
                return;
            }
            let Some(click) = response.interact_pointer_pos() else {
                return;
            };
            let picked = screen
                .iter()
                .enumerate()
                .map(|(i, p)| (i, p.distance(click)))
                .filter(|(_, d)| *d <= PICK_RADIUS)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i);

            if let Some(index) = picked {
                if let Some(mesh) = self.scene.active_object_mut().and_then(|o| o.mesh_mut()) {
                    if let Err(e) = mesh.toggle_vertex(index) {
                        warn!("Failed to select vertex {}: {}", index, e);
                    }
                }
            }
        });
    }
}

impl eframe::App for SnapMeasureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        let items = self.header.build(&HeaderContext {
            scene: &self.scene,
            view: &self.view,
        });
        match show_header(ctx, &items, &self.registry, self.scene.tool_settings.snap_target) {
            Some(HeaderResponse::Invoke(id)) => self.invoke(id),
            Some(HeaderResponse::SetSnapTarget(target)) => {
                self.scene.tool_settings.snap_target = target;
                self.view.set_status(&Report::info(format!("Snap target: {}", target.name())));
            }
            None => {}
        }

        if let Some(input) = show_command_line(ctx, &mut self.view, &self.scene, &self.registry) {
            self.invoke(&input);
        }

        self.show_viewport(ctx);
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    info!("Starting SnapMeasure...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("SnapMeasure"),
        ..Default::default()
    };

    eframe::run_native(
        "SnapMeasure",
        native_options,
        Box::new(|_cc| Ok(Box::new(SnapMeasureApp::default()))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
