// ==========================================
// 轧制道次仿真编排系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎错误为用户可读的错误消息
// 说明: 错误消息直接进入响应信封的 errors 字段
// ==========================================

use crate::engine::error::EngineError;
use crate::engine::sequence_validator::ValidationIssue;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 机组配置结构校验失败（带逐条原因）
    #[error("配置校验失败: {reason}")]
    ValidationError {
        reason: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("求解参数错误: {0}")]
    SolveParameterError(String),

    // ==========================================
    // 求解错误
    // ==========================================
    #[error("求解失败: {0}")]
    SolverFailure(String),

    // ==========================================
    // 基础设施错误
    // ==========================================
    #[error("配置读取失败: {0}")]
    ConfigError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            // 配置翻译错误
            EngineError::UnknownGrooveKind(_)
            | EngineError::GrooveConstruction { .. }
            | EngineError::UnknownProfileShape(_)
            | EngineError::InvalidProfile { .. }
            | EngineError::InvalidUnitConfig { .. } => ApiError::InvalidInput(message),

            // 校验错误
            EngineError::ValidationFailure { reason, issues } => {
                ApiError::ValidationError { reason, issues }
            }

            // 求解分派错误
            EngineError::MissingSolveParameter { .. } | EngineError::UnknownSolveMode(_) => {
                ApiError::SolveParameterError(message)
            }

            // 求解器错误（消息原样保留）
            EngineError::Solver(_) | EngineError::SolverOutputMismatch { .. } => {
                ApiError::SolverFailure(message)
            }
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
