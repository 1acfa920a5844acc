// ==========================================
// 轧制道次仿真编排系统 - 仿真默认值快照
// ==========================================
// 职责: 单次仿真使用的默认值（读取自配置层,求解期间只读）
// ==========================================

use crate::domain::types::ValidationPolicy;
use serde::{Deserialize, Serialize};

/// 输送段环境温度默认值 (K)
pub const DEFAULT_ENVIRONMENT_TEMPERATURE_K: f64 = 293.15;

/// 输送段换热系数默认值 (W·m⁻²·K⁻¹)
pub const DEFAULT_HEAT_TRANSFER_COEFFICIENT: f64 = 15.0;

/// 未指定孔型类型时的回退孔型
pub const DEFAULT_GROOVE_TYPE: &str = "BoxGroove";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDefaults {
    /// 校验策略（Strict: 校验失败中止; Advisory: 仅告警）
    pub validation_policy: ValidationPolicy,

    /// 输送段环境温度 (K)
    pub transport_environment_temperature: f64,

    /// 输送段换热系数
    pub transport_heat_transfer_coefficient: f64,

    /// 轧制道次缺省孔型类型
    pub default_groove_type: String,
}

impl Default for SimulationDefaults {
    fn default() -> Self {
        Self {
            validation_policy: ValidationPolicy::Strict,
            transport_environment_temperature: DEFAULT_ENVIRONMENT_TEMPERATURE_K,
            transport_heat_transfer_coefficient: DEFAULT_HEAT_TRANSFER_COEFFICIENT,
            default_groove_type: DEFAULT_GROOVE_TYPE.to_string(),
        }
    }
}

impl SimulationDefaults {
    /// 以 Advisory 策略构造（其余取默认）
    pub fn advisory() -> Self {
        Self {
            validation_policy: ValidationPolicy::Advisory,
            ..Self::default()
        }
    }
}
