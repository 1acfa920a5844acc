// ==========================================
// 轧制道次仿真编排系统 - API 层
// ==========================================
// 职责: 对外提供仿真与轮廓预览接口,负责响应信封与错误映射
// ==========================================

pub mod dto;
pub mod error;
pub mod simulation_api;

// 重导出核心类型
pub use dto::SimulationResponse;
pub use error::{ApiError, ApiResult};
pub use simulation_api::SimulationApi;
