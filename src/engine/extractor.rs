// ==========================================
// 轧制道次仿真编排系统 - 结果/轮廓提取器
// ==========================================
// 职责: 遍历已求解序列,生成逐机组结果记录
// 规则:
// - 序号从 1 开始;无标签时使用 "Pass {序号}"
// - 所有机组输出入/出口应变、温度、高、宽、断面积
// - 仅轧制道次输出力能参数、流动应力、压下率与轮廓
// - 压下率 = (入口断面积 - 出口断面积) / 入口断面积
// 红线: 只读,同一输入重复提取结果完全一致
// ==========================================

use crate::domain::report::{PassResult, RollPassMechanics, SimulationReport};
use crate::domain::solved::{ProfileState, RollPassOutcome, SolvedSequence, SolvedUnit};
use crate::domain::unit::RollPass;
use crate::engine::contour::{place_profile_contour, place_roll_contour};
use tracing::debug;

/// 提取仿真报告
pub fn extract(solved: &SolvedSequence) -> SimulationReport {
    let passes: Vec<PassResult> = solved
        .units
        .iter()
        .enumerate()
        .map(|(index, unit)| extract_unit(index + 1, unit))
        .collect();

    debug!(units = passes.len(), "结果提取完成");
    SimulationReport::new(passes)
}

/// 压下率（入口断面积非正时为 0）
pub fn reduction(in_area: f64, out_area: f64) -> f64 {
    if in_area > 0.0 {
        (in_area - out_area) / in_area
    } else {
        0.0
    }
}

fn extract_unit(pass: usize, unit: &SolvedUnit) -> PassResult {
    let in_profile = unit.in_profile();
    let out_profile = unit.out_profile();

    let mechanics = match unit {
        SolvedUnit::RollPass {
            unit,
            in_profile,
            out_profile,
            outcome,
        } => Some(roll_pass_mechanics(unit, in_profile, out_profile, outcome)),
        SolvedUnit::Transport { .. } | SolvedUnit::CoolingPipe { .. } => None,
    };

    PassResult {
        pass,
        label: unit
            .label()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Pass {}", pass)),
        unit_type: unit.kind(),
        in_strain: in_profile.strain,
        out_strain: out_profile.strain,
        in_temperature: in_profile.temperature,
        out_temperature: out_profile.temperature,
        in_height: in_profile.height,
        out_height: out_profile.height,
        in_width: in_profile.width,
        out_width: out_profile.width,
        in_cross_section_area: in_profile.cross_section_area,
        out_cross_section_area: out_profile.cross_section_area,
        mechanics,
    }
}

fn roll_pass_mechanics(
    unit: &RollPass,
    in_profile: &ProfileState,
    out_profile: &ProfileState,
    outcome: &RollPassOutcome,
) -> RollPassMechanics {
    RollPassMechanics {
        roll_force: outcome.roll_force,
        roll_torque: outcome.roll_torque,
        power: outcome.power,
        elongation_efficiency: outcome.elongation_efficiency,
        filling_ratio: outcome.filling_ratio,
        filling_error: outcome.filling_error,
        nominal_radius: unit.roll.nominal_radius,
        working_radius: outcome.working_radius,
        velocity: outcome.velocity,
        gap: outcome.gap,
        inscribed_circle_diameter: unit.inscribed_circle_diameter(),
        bite_angle: outcome.bite_angle,
        reduction: reduction(in_profile.cross_section_area, out_profile.cross_section_area),
        in_flow_stress: in_profile.flow_stress,
        out_flow_stress: out_profile.flow_stress,
        in_profile_contour: place_profile_contour(&in_profile.contour, &unit.layout),
        out_profile_contour: place_profile_contour(&out_profile.contour, &unit.layout),
        roll_contour: place_roll_contour(&outcome.groove_contour, &unit.layout),
    }
}
