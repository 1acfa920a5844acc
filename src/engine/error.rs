// ==========================================
// 轧制道次仿真编排系统 - 引擎层错误类型
// ==========================================
// 职责: 配置翻译、序列构建、求解分派过程中的全部失败类型
// 红线: 检测到即返回,不产生部分报告;求解器错误原样透传
// ==========================================

use crate::domain::types::SolveMethod;
use crate::engine::sequence_validator::ValidationIssue;
use crate::engine::solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    // ==========================================
    // 配置翻译错误
    // ==========================================
    #[error("未知孔型类型: {0}")]
    UnknownGrooveKind(String),

    #[error("孔型构建失败: kind={kind}, reason={reason}")]
    GrooveConstruction { kind: String, reason: String },

    #[error("未知断面形状: {0}")]
    UnknownProfileShape(String),

    #[error("来料断面参数无效: shape={shape}, reason={reason}")]
    InvalidProfile { shape: String, reason: String },

    #[error("机组配置无效: unit={index}, reason={reason}")]
    InvalidUnitConfig { index: usize, reason: String },

    // ==========================================
    // 校验错误
    // ==========================================
    /// 配置列表结构不完整（issues 为逐条原因）
    #[error("{reason}")]
    ValidationFailure {
        reason: String,
        issues: Vec<ValidationIssue>,
    },

    // ==========================================
    // 求解分派错误
    // ==========================================
    #[error("缺少求解参数: mode={mode}, parameter={parameter}")]
    MissingSolveParameter {
        mode: SolveMethod,
        parameter: &'static str,
    },

    #[error("未知求解模式: {0}")]
    UnknownSolveMode(String),

    #[error(transparent)]
    Solver(#[from] SolverError),

    /// 求解结果与机组序列不一一对应（缺失、多出或顺序错位）
    #[error("求解结果与机组序列不一致: unit={index}, expected={expected}, actual={actual}")]
    SolverOutputMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
