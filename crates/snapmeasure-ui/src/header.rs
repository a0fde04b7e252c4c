//! 头部菜单
//!
//! 头部菜单由一条绘制回调链构成，每个回调向菜单追加条目。
//! 条目是纯数据，`show_header` 负责用 egui 绘制并返回点击结果。

use crate::command_registry::CommandRegistry;
use crate::view_state::ViewState;
use snapmeasure_core::scene::Scene;
use snapmeasure_core::snap::SnapTarget;
use tracing::warn;

/// 绘制回调可见的状态
pub struct HeaderContext<'a> {
    pub scene: &'a Scene,
    pub view: &'a ViewState,
}

/// 菜单条目
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderItem {
    Separator,
    /// 调用命令的按钮，图标取自命令本身
    Operator { command: &'static str, text: String },
    /// 捕捉基准单选按钮
    SnapTarget { target: SnapTarget, icon: &'static str },
}

pub type HeaderDrawFn = fn(&HeaderContext, &mut Vec<HeaderItem>);

/// 头部菜单绘制链
#[derive(Default)]
pub struct HeaderMenu {
    callbacks: Vec<(&'static str, HeaderDrawFn)>,
}

impl HeaderMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加绘制回调，同名回调只保留一个
    pub fn append(&mut self, name: &'static str, draw: HeaderDrawFn) {
        if self.contains(name) {
            warn!("Header callback {} already appended", name);
            return;
        }
        self.callbacks.push((name, draw));
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let len = self.callbacks.len();
        self.callbacks.retain(|(n, _)| *n != name);
        self.callbacks.len() != len
    }

    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.iter().any(|(n, _)| *n == name)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// 依次运行所有回调，收集菜单条目
    pub fn build(&self, ctx: &HeaderContext) -> Vec<HeaderItem> {
        let mut items = Vec::new();
        for (_, draw) in &self.callbacks {
            draw(ctx, &mut items);
        }
        items
    }
}

/// 命令按钮的文字（图标 + 文本），命令未注册时返回 None
pub fn operator_text(registry: &CommandRegistry, command: &str, text: &str) -> Option<String> {
    let cmd = registry.lookup(command)?;
    Some(format!("{} {}", cmd.icon(), text))
}

/// 头部菜单的点击结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderResponse {
    Invoke(&'static str),
    SetSnapTarget(SnapTarget),
}

/// 渲染头部菜单
///
/// 未注册的命令不会绘制。
pub fn show_header(
    ctx: &egui::Context,
    items: &[HeaderItem],
    registry: &CommandRegistry,
    snap_target: SnapTarget,
) -> Option<HeaderResponse> {
    let mut response = None;

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;

            for item in items {
                match item {
                    HeaderItem::Separator => {
                        ui.separator();
                    }
                    HeaderItem::Operator { command, text } => {
                        let (Some(cmd), Some(label)) = (
                            registry.lookup(command),
                            operator_text(registry, command, text),
                        ) else {
                            warn!("Header references unregistered command {}", command);
                            continue;
                        };
                        if ui
                            .button(label)
                            .on_hover_text(cmd.description())
                            .clicked()
                        {
                            response = Some(HeaderResponse::Invoke(*command));
                        }
                    }
                    HeaderItem::SnapTarget { target, icon } => {
                        let button = egui::Button::new(*icon).selected(snap_target == *target);
                        if ui.add(button).on_hover_text(target.name()).clicked() {
                            response = Some(HeaderResponse::SetSnapTarget(*target));
                        }
                    }
                }
            }
        });
    });

    response
}
