// ==========================================
// 轧制道次仿真编排系统 - 结果报告
// ==========================================
// 输出形态与前端结果页一致:
// { "success": true, "units": n, "passes": [ {...}, ... ] }
// ==========================================

use crate::domain::solved::Contour;
use crate::domain::types::UnitKind;
use serde::{Deserialize, Serialize};

/// 绘图用轮廓 {"x": [...], "y": [...]}
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourXY {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl From<&Contour> for ContourXY {
    fn from(contour: &Contour) -> Self {
        let (x, y) = contour.points.iter().copied().unzip();
        Self { x, y }
    }
}

/// 轧辊孔型轮廓
///
/// 二辊: {"upper": .., "lower": ..}；多辊: {"contours": [..]}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RollContour {
    TwoRoll { upper: ContourXY, lower: ContourXY },
    MultiRoll { contours: Vec<ContourXY> },
}

impl RollContour {
    /// 轮廓条数（= 轧辊数）
    pub fn roll_count(&self) -> usize {
        match self {
            RollContour::TwoRoll { .. } => 2,
            RollContour::MultiRoll { contours } => contours.len(),
        }
    }
}

/// 轧制道次专有输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollPassMechanics {
    pub roll_force: f64,
    pub roll_torque: f64,
    pub power: f64,
    pub elongation_efficiency: f64,
    pub filling_ratio: f64,
    pub filling_error: f64,
    pub nominal_radius: f64,
    pub working_radius: f64,
    pub velocity: f64,
    pub gap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inscribed_circle_diameter: Option<f64>,
    pub bite_angle: f64,
    pub reduction: f64,
    pub in_flow_stress: Option<f64>,
    pub out_flow_stress: Option<f64>,
    pub in_profile_contour: ContourXY,
    pub out_profile_contour: ContourXY,
    pub roll_contour: RollContour,
}

/// 单机组结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassResult {
    /// 序号（从 1 开始）
    pub pass: usize,
    pub label: String,
    #[serde(rename = "type")]
    pub unit_type: UnitKind,

    pub in_strain: f64,
    pub out_strain: f64,
    pub in_temperature: f64,
    pub out_temperature: f64,
    pub in_height: f64,
    pub out_height: f64,
    pub in_width: f64,
    pub out_width: f64,
    pub in_cross_section_area: f64,
    pub out_cross_section_area: f64,

    /// 仅轧制道次有值（展开到同一层级）
    #[serde(flatten)]
    pub mechanics: Option<RollPassMechanics>,
}

/// 仿真报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub success: bool,
    pub units: usize,
    pub passes: Vec<PassResult>,
}

impl SimulationReport {
    pub fn new(passes: Vec<PassResult>) -> Self {
        Self {
            success: true,
            units: passes.len(),
            passes,
        }
    }

    /// 轧制道次结果
    pub fn roll_passes(&self) -> impl Iterator<Item = (&PassResult, &RollPassMechanics)> {
        self.passes
            .iter()
            .filter_map(|pass| pass.mechanics.as_ref().map(|m| (pass, m)))
    }
}
