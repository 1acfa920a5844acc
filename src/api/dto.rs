// ==========================================
// 轧制道次仿真编排系统 - API 响应信封
// ==========================================
// 形态: { "success", "input_data", "results", "errors" }
// ==========================================

use crate::domain::report::SimulationReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub success: bool,

    /// 原始请求（原样回显）
    pub input_data: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<SimulationReport>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl SimulationResponse {
    pub fn succeeded(input_data: Value, report: SimulationReport) -> Self {
        Self {
            success: true,
            input_data,
            results: Some(report),
            errors: None,
        }
    }

    pub fn failed(input_data: Value, message: impl Into<String>) -> Self {
        Self {
            success: false,
            input_data,
            results: None,
            errors: Some(message.into()),
        }
    }
}
