// ==========================================
// 轧制道次仿真编排系统 - 来料断面（Profile）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 断面形状标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileShape {
    Round,
    Square,
    Box,
    Hexagon,
}

impl ProfileShape {
    pub const ALL: [ProfileShape; 4] = [
        ProfileShape::Round,
        ProfileShape::Square,
        ProfileShape::Box,
        ProfileShape::Hexagon,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|shape| shape.as_str() == tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileShape::Round => "round",
            ProfileShape::Square => "square",
            ProfileShape::Box => "box",
            ProfileShape::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for ProfileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 断面几何尺寸（按形状区分）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ProfileGeometry {
    Round {
        diameter: f64,
    },
    Square {
        side: f64,
        corner_radius: f64,
    },
    Box {
        height: f64,
        width: f64,
        corner_radius: f64,
    },
    Hexagon {
        side: f64,
        corner_radius: f64,
    },
}

impl ProfileGeometry {
    pub fn shape(&self) -> ProfileShape {
        match self {
            ProfileGeometry::Round { .. } => ProfileShape::Round,
            ProfileGeometry::Square { .. } => ProfileShape::Square,
            ProfileGeometry::Box { .. } => ProfileShape::Box,
            ProfileGeometry::Hexagon { .. } => ProfileShape::Hexagon,
        }
    }
}

/// 流动应力模型系数（如 Freiberg 模型 a, m1..m9, baseStrain, baseStrainRate）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStressCoefficients {
    pub model: String,
    pub coefficients: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub geometry: ProfileGeometry,
    pub temperature: f64,
    pub strain: f64,
    pub material: Option<String>,
    pub density: Option<f64>,
    pub specific_heat_capacity: Option<f64>,
    pub thermal_conductivity: Option<f64>,
    pub flow_stress_coefficients: Option<FlowStressCoefficients>,
}

impl Profile {
    pub fn shape(&self) -> ProfileShape {
        self.geometry.shape()
    }
}
