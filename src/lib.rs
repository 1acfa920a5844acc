// ==========================================
// 轧制道次仿真编排系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite（配置库）
// 系统定位: 编排核心 (配置翻译 → 序列构建 → 求解分派 → 结果提取)
// 数值求解与孔型几何由外部协作者提供
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 配置记录、孔型/机组/断面、结果
pub mod domain;

// 引擎层 - 工厂、校验、构建、分派、提取
pub mod engine;

// 配置层 - 仿真默认值
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 仿真接口与响应信封
pub mod api;

// 结果导出
pub mod output;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{SolveMethod, UnitKind, ValidationPolicy};

// 领域对象
pub use domain::{
    GrooveKind, PassResult, ProcessSequence, ProcessUnit, Profile, SimulationReport,
    SimulationRequest, SolvedSequence, SolvedUnit,
};

// 引擎
pub use engine::{
    ContourProvider, EngineError, EngineResult, ProcessSolver, SequenceBuilder,
    SequenceValidator, SimulationOrchestrator, SolverError,
};

// 配置
pub use config::{ConfigManager, SimulationConfigReader, SimulationDefaults};

// API
pub use api::{ApiError, ApiResult, SimulationApi, SimulationResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "轧制道次仿真编排系统";
