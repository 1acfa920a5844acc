// ==========================================
// 轧制道次仿真编排系统 - 配置记录（请求边界）
// ==========================================
// 职责: 定义前端提交的配置记录的强类型形态
// 说明: passDesignData 保持原始 JSON,由校验器先做结构检查,
//       再由序列构建器逐条解析为 ProcessUnitConfig
// ==========================================

use crate::domain::types::{ExtentDefineBy, UnitKind, VelocityDefineBy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 孔型参数表（参数名 → 数值/缺省）
///
/// 值为 null 的参数在构建孔型前会被剔除,由孔型自身的默认值生效
pub type GrooveParamMap = BTreeMap<String, Option<f64>>;

// ==========================================
// ProcessUnitConfig - 单个机组配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProcessUnitConfig {
    TwoRollPass(RollPassConfig),
    ThreeRollPass(RollPassConfig),
    Transport(TransportConfig),
    CoolingPipe(CoolingPipeConfig),
}

impl ProcessUnitConfig {
    pub fn kind(&self) -> UnitKind {
        match self {
            ProcessUnitConfig::TwoRollPass(_) => UnitKind::TwoRollPass,
            ProcessUnitConfig::ThreeRollPass(_) => UnitKind::ThreeRollPass,
            ProcessUnitConfig::Transport(_) => UnitKind::Transport,
            ProcessUnitConfig::CoolingPipe(_) => UnitKind::CoolingPipe,
        }
    }
}

/// 轧制道次配置（二辊/三辊共用）
///
/// `gap` 仅二辊道次使用,`inscribed_circle_diameter` 仅三辊道次使用
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollPassConfig {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default, rename = "grooveType")]
    pub groove_type: Option<String>,

    #[serde(default)]
    pub groove: Option<GrooveParamMap>,

    /// 二辊: horizontal / vertical；三辊: Y / AntiY
    #[serde(default)]
    pub orientation: Option<String>,

    #[serde(default)]
    pub nominal_radius: Option<f64>,

    #[serde(default, rename = "velocityDefineBy")]
    pub velocity_define_by: VelocityDefineBy,

    #[serde(default, rename = "velocityValue")]
    pub velocity_value: Option<f64>,

    /// 旧版字段（无 velocityValue 时回退读取）
    #[serde(default)]
    pub velocity: Option<f64>,

    #[serde(default)]
    pub rotational_frequency: Option<f64>,

    #[serde(default)]
    pub gap: Option<f64>,

    #[serde(default)]
    pub inscribed_circle_diameter: Option<f64>,

    #[serde(default)]
    pub coulomb_friction_coefficient: Option<f64>,
}

/// 输送段配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default, rename = "transportDefineBy")]
    pub define_by: ExtentDefineBy,

    #[serde(default, rename = "transportValue")]
    pub value: Option<f64>,

    #[serde(default)]
    pub environment_temperature: Option<f64>,

    #[serde(default)]
    pub heat_transfer_coefficient: Option<f64>,
}

/// 水冷管段配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoolingPipeConfig {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default, rename = "coolingDefineBy")]
    pub define_by: ExtentDefineBy,

    #[serde(default, rename = "coolingValue")]
    pub value: Option<f64>,

    #[serde(default)]
    pub inner_radius: Option<f64>,

    #[serde(default)]
    pub coolant_temperature: Option<f64>,

    #[serde(default)]
    pub coolant_volume_flux: Option<f64>,
}

// ==========================================
// InProfileConfig - 来料断面配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InProfileConfig {
    /// round / square / box / hexagon
    #[serde(default)]
    pub shape: String,

    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub side: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub corner_radius: Option<f64>,

    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub strain: Option<f64>,

    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub specific_heat_capacity: Option<f64>,
    #[serde(default)]
    pub thermal_conductivity: Option<f64>,

    #[serde(default, rename = "flowStressParams")]
    pub flow_stress_params: Option<BTreeMap<String, Option<f64>>>,

    #[serde(default, rename = "flowStressModel")]
    pub flow_stress_model: Option<String>,
}

// ==========================================
// SolveParams - 求解模式参数
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveParams {
    /// solve_forward: 来料速度
    #[serde(default)]
    pub in_velocity: Option<f64>,

    /// solve_backward: 成品断面积
    #[serde(default)]
    pub out_cross_section: Option<f64>,

    /// solve_backward: 成品速度
    #[serde(default)]
    pub out_velocity: Option<f64>,
}

// ==========================================
// SimulationRequest - 一次仿真请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(rename = "inProfile")]
    pub in_profile: InProfileConfig,

    #[serde(rename = "passDesignData", default)]
    pub pass_design_data: Vec<serde_json::Value>,

    #[serde(default = "default_solve_method")]
    pub solve_method: String,

    #[serde(default)]
    pub solve_params: SolveParams,
}

fn default_solve_method() -> String {
    "solve".to_string()
}
