// ==========================================
// 轧制道次仿真编排系统 - 机组（Process Unit）
// ==========================================
// 职责: 构建完成、待求解的机组值对象
// 红线: 变形类（轧制道次）与热过程类（输送/水冷）由变体区分,
//       不做字段存在性探测
// ==========================================

use crate::domain::groove::Groove;
use crate::domain::types::{ThreeRollOrientation, TwoRollOrientation, UnitKind};
use serde::{Deserialize, Serialize};

// ==========================================
// 轧辊
// ==========================================

/// 轧辊速度定义（线速度与转速二选一,类型上不可能同时存在）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollSpeed {
    Velocity(f64),
    RotationalFrequency(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    pub groove: Groove,
    pub nominal_radius: f64,
    pub speed: RollSpeed,
}

impl Roll {
    pub fn velocity(&self) -> Option<f64> {
        match self.speed {
            RollSpeed::Velocity(v) => Some(v),
            RollSpeed::RotationalFrequency(_) => None,
        }
    }

    pub fn rotational_frequency(&self) -> Option<f64> {
        match self.speed {
            RollSpeed::Velocity(_) => None,
            RollSpeed::RotationalFrequency(f) => Some(f),
        }
    }
}

// ==========================================
// 轧制道次
// ==========================================

/// 机架布置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RollPassLayout {
    TwoRoll {
        gap: f64,
        orientation: TwoRollOrientation,
    },
    ThreeRoll {
        inscribed_circle_diameter: f64,
        orientation: ThreeRollOrientation,
    },
}

impl RollPassLayout {
    /// 机架轧辊数
    pub fn roll_count(&self) -> usize {
        match self {
            RollPassLayout::TwoRoll { .. } => 2,
            RollPassLayout::ThreeRoll { .. } => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollPass {
    pub label: Option<String>,
    pub roll: Roll,
    pub layout: RollPassLayout,
    pub coulomb_friction_coefficient: Option<f64>,
}

impl RollPass {
    pub fn kind(&self) -> UnitKind {
        match self.layout {
            RollPassLayout::TwoRoll { .. } => UnitKind::TwoRollPass,
            RollPassLayout::ThreeRoll { .. } => UnitKind::ThreeRollPass,
        }
    }

    /// 二辊辊缝（三辊道次返回 None）
    pub fn gap(&self) -> Option<f64> {
        match self.layout {
            RollPassLayout::TwoRoll { gap, .. } => Some(gap),
            RollPassLayout::ThreeRoll { .. } => None,
        }
    }

    /// 三辊内切圆直径（二辊道次返回 None）
    pub fn inscribed_circle_diameter(&self) -> Option<f64> {
        match self.layout {
            RollPassLayout::TwoRoll { .. } => None,
            RollPassLayout::ThreeRoll {
                inscribed_circle_diameter,
                ..
            } => Some(inscribed_circle_diameter),
        }
    }
}

// ==========================================
// 热过程机组
// ==========================================

/// 长度或时长（按定义方式二选一）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitExtent {
    Length(f64),
    Duration(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    pub label: Option<String>,
    pub extent: UnitExtent,
    pub environment_temperature: f64,
    pub heat_transfer_coefficient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingPipe {
    pub label: Option<String>,
    pub extent: UnitExtent,
    pub inner_radius: f64,
    pub coolant_temperature: f64,
    pub coolant_volume_flux: f64,
}

// ==========================================
// ProcessUnit - 机组
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProcessUnit {
    RollPass(RollPass),
    Transport(Transport),
    CoolingPipe(CoolingPipe),
}

impl ProcessUnit {
    pub fn kind(&self) -> UnitKind {
        match self {
            ProcessUnit::RollPass(pass) => pass.kind(),
            ProcessUnit::Transport(_) => UnitKind::Transport,
            ProcessUnit::CoolingPipe(_) => UnitKind::CoolingPipe,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ProcessUnit::RollPass(pass) => pass.label.as_deref(),
            ProcessUnit::Transport(transport) => transport.label.as_deref(),
            ProcessUnit::CoolingPipe(pipe) => pipe.label.as_deref(),
        }
    }
}

// ==========================================
// ProcessSequence - 有序机组序列
// ==========================================
// 顺序即物理顺序: 每个机组的入口状态是上一机组的出口状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessSequence {
    units: Vec<ProcessUnit>,
}

impl ProcessSequence {
    pub fn new(units: Vec<ProcessUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[ProcessUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessUnit> {
        self.units.iter()
    }

    /// 各机组类型（按序列顺序）
    pub fn kinds(&self) -> Vec<UnitKind> {
        self.units.iter().map(ProcessUnit::kind).collect()
    }
}
