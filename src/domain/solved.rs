// ==========================================
// 轧制道次仿真编排系统 - 求解结果（Solved Sequence）
// ==========================================
// 职责: 外部求解器返回的逐机组状态
// 红线: 轧制道次必带力能结果,热过程机组不带（由变体保证）
// ==========================================

use crate::domain::unit::{CoolingPipe, ProcessUnit, RollPass, Transport};
use crate::domain::types::UnitKind;
use serde::{Deserialize, Serialize};

/// 有序点列 (x, y)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<(f64, f64)>,
}

impl Contour {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 逐点变换
    pub fn map<F>(&self, f: F) -> Contour
    where
        F: Fn((f64, f64)) -> (f64, f64),
    {
        Contour {
            points: self.points.iter().copied().map(f).collect(),
        }
    }
}

/// 某一截面处的轧件状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileState {
    pub strain: f64,
    pub temperature: f64,
    pub height: f64,
    pub width: f64,
    pub cross_section_area: f64,
    pub flow_stress: Option<f64>,
    /// 断面边界（道次局部坐标系）
    pub contour: Contour,
}

/// 轧制道次力能结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollPassOutcome {
    pub roll_force: f64,
    pub roll_torque: f64,
    pub power: f64,
    pub elongation_efficiency: f64,
    pub filling_ratio: f64,
    pub filling_error: f64,
    pub working_radius: f64,
    pub velocity: f64,
    /// 实际辊缝（三辊道次由内切圆直径导出）
    pub gap: f64,
    pub bite_angle: f64,
    /// 单辊孔型轮廓线（局部坐标,未按辊缝/布置定位）
    pub groove_contour: Contour,
}

// ==========================================
// SolvedUnit - 已求解机组
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolvedUnit {
    RollPass {
        unit: RollPass,
        in_profile: ProfileState,
        out_profile: ProfileState,
        outcome: RollPassOutcome,
    },
    Transport {
        unit: Transport,
        in_profile: ProfileState,
        out_profile: ProfileState,
    },
    CoolingPipe {
        unit: CoolingPipe,
        in_profile: ProfileState,
        out_profile: ProfileState,
    },
}

impl SolvedUnit {
    /// 按机组类型组装（轧制道次必须给出力能结果）
    ///
    /// 返回 None 表示机组类型与力能结果不匹配
    pub fn from_parts(
        unit: ProcessUnit,
        in_profile: ProfileState,
        out_profile: ProfileState,
        outcome: Option<RollPassOutcome>,
    ) -> Option<Self> {
        match (unit, outcome) {
            (ProcessUnit::RollPass(unit), Some(outcome)) => Some(SolvedUnit::RollPass {
                unit,
                in_profile,
                out_profile,
                outcome,
            }),
            (ProcessUnit::Transport(unit), None) => Some(SolvedUnit::Transport {
                unit,
                in_profile,
                out_profile,
            }),
            (ProcessUnit::CoolingPipe(unit), None) => Some(SolvedUnit::CoolingPipe {
                unit,
                in_profile,
                out_profile,
            }),
            _ => None,
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            SolvedUnit::RollPass { unit, .. } => unit.kind(),
            SolvedUnit::Transport { .. } => UnitKind::Transport,
            SolvedUnit::CoolingPipe { .. } => UnitKind::CoolingPipe,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            SolvedUnit::RollPass { unit, .. } => unit.label.as_deref(),
            SolvedUnit::Transport { unit, .. } => unit.label.as_deref(),
            SolvedUnit::CoolingPipe { unit, .. } => unit.label.as_deref(),
        }
    }

    pub fn in_profile(&self) -> &ProfileState {
        match self {
            SolvedUnit::RollPass { in_profile, .. }
            | SolvedUnit::Transport { in_profile, .. }
            | SolvedUnit::CoolingPipe { in_profile, .. } => in_profile,
        }
    }

    pub fn out_profile(&self) -> &ProfileState {
        match self {
            SolvedUnit::RollPass { out_profile, .. }
            | SolvedUnit::Transport { out_profile, .. }
            | SolvedUnit::CoolingPipe { out_profile, .. } => out_profile,
        }
    }
}

/// 已求解序列（与输入序列同序）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolvedSequence {
    pub units: Vec<SolvedUnit>,
}

impl SolvedSequence {
    pub fn new(units: Vec<SolvedUnit>) -> Self {
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
