//! 两顶点距离测量

use crate::command::{Command, CommandContext, CommandError, CommandResult};
use crate::view_state::DistanceReadout;
use snapmeasure_core::scene::Scene;

/// 测量两个选中顶点之间的距离
///
/// 前置条件：活动对象是处于编辑模式的网格，恰好选中两个顶点。
/// 每次执行（无论成败）都会覆盖 `ViewState::last_distance`。
pub struct MeasureDistanceCommand;

impl MeasureDistanceCommand {
    pub const ID: &'static str = "mesh.measure_distance";

    fn measure(scene: &Scene) -> Result<DistanceReadout, CommandError> {
        let mesh = scene
            .active_object()
            .filter(|obj| obj.is_editing_mesh())
            .and_then(|obj| obj.mesh())
            .ok_or(CommandError::Mode(
                "You must be in Edit Mode with a MESH object",
            ))?;

        let selected: Vec<_> = mesh.selected_vertices().collect();
        let [a, b] = selected.as_slice() else {
            return Err(CommandError::Selection("Select exactly 2 vertices"));
        };

        // 局部空间距离
        let meters = (a.co - b.co).norm();
        let settings = &scene.unit_settings;
        let value = settings
            .to_display(meters)
            .ok_or(CommandError::ZeroScale)?;

        Ok(DistanceReadout::Measured {
            value,
            unit: settings.length_unit,
        })
    }
}

impl Command for MeasureDistanceCommand {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Measure Distance"
    }

    fn description(&self) -> &'static str {
        "Measure the distance between two selected vertices"
    }

    fn icon(&self) -> &'static str {
        "📏"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        match Self::measure(ctx.scene) {
            Ok(readout) => {
                ctx.view.last_distance = Some(readout);
                Ok(Some(format!("Distance: {}", readout)))
            }
            Err(err) => {
                let readout = match err {
                    CommandError::Selection(_) => DistanceReadout::WrongSelection,
                    CommandError::ZeroScale => DistanceReadout::ZeroScale,
                    _ => DistanceReadout::WrongMode,
                };
                ctx.view.last_distance = Some(readout);
                Err(err)
            }
        }
    }
}
