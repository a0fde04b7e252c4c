//! 命令行界面

use crate::command::ReportLevel;
use crate::command_registry::CommandRegistry;
use crate::view_state::ViewState;
use snapmeasure_core::scene::Scene;

/// 渲染命令行，回车时返回输入的命令
pub fn show_command_line(
    ctx: &egui::Context,
    view: &mut ViewState,
    scene: &Scene,
    registry: &CommandRegistry,
) -> Option<String> {
    let mut command = None;

    egui::TopBottomPanel::bottom("command_line")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // 状态消息
                let color = match view.status_level {
                    ReportLevel::Info => ui.visuals().text_color(),
                    ReportLevel::Warning => egui::Color32::YELLOW,
                    ReportLevel::Error => egui::Color32::RED,
                };
                ui.label(egui::RichText::new(&view.status_message).color(color));

                ui.separator();
                ui.label("Command:");

                let response = ui.add(
                    egui::TextEdit::singleline(&mut view.command_input)
                        .desired_width(260.0)
                        .hint_text("mesh.measure_distance"),
                );

                // Tab 补全唯一匹配
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Tab)) {
                    if let [only] = registry.complete(&view.command_input).as_slice() {
                        view.command_input = only.clone();
                    }
                }

                // 回车执行命令
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    let input = std::mem::take(&mut view.command_input);
                    if !input.trim().is_empty() {
                        command = Some(input);
                    }
                    response.request_focus();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let c = scene.cursor.location;
                    ui.label(format!("Cursor: {:.3}, {:.3}, {:.3}", c.x, c.y, c.z));

                    ui.separator();

                    // 模式指示器
                    let snap = &scene.tool_settings.snap_elements;
                    if !snap.is_empty() {
                        let names: Vec<_> = snap.iter().map(|e| e.name()).collect();
                        ui.label(
                            egui::RichText::new(format!("SNAP {}", names.join("+")))
                                .color(egui::Color32::YELLOW),
                        );
                    }
                    if let Some(obj) = scene.active_object() {
                        // 修改器栈，求值顺序从左到右
                        if !obj.modifiers.is_empty() {
                            let stack: Vec<_> =
                                obj.modifiers.iter().map(|m| m.kind.to_string()).collect();
                            ui.label(stack.join(" › "));
                        }
                        ui.label(format!("{} · {}", obj.name, obj.mode().name()));
                    }
                });
            });
        });

    command
}
