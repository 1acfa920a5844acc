// ==========================================
// 轧制道次仿真编排系统 - 引擎层
// ==========================================
// 职责: 配置翻译、序列构建、求解分派、结果提取
// 红线: 不做数值计算（交给外部求解器）, 所有失败必须带原因
// ==========================================
// 依赖顺序（叶子在前）:
//   groove_factory → unit_factory / profile_factory
//   → sequence_validator → sequence_builder
//   → dispatcher → extractor(contour) → orchestrator
// ==========================================

pub mod contour;
pub mod dispatcher;
pub mod error;
pub mod extractor;
pub mod groove_factory;
pub mod orchestrator;
pub mod preview;
pub mod profile_factory;
pub mod sequence_builder;
pub mod sequence_validator;
pub mod solver;
pub mod unit_factory;

// 重导出核心引擎
pub use dispatcher::{dispatch, solve, SolveInstruction};
pub use error::{EngineError, EngineResult};
pub use extractor::{extract, reduction};
pub use groove_factory::build_groove;
pub use orchestrator::SimulationOrchestrator;
pub use preview::{preview_in_profile, preview_roll_pass, ProfilePreview, RollPassPreview};
pub use profile_factory::build_profile;
pub use sequence_builder::{BuiltSequence, SequenceBuilder, SkippedEntry};
pub use sequence_validator::{SequenceValidator, ValidationIssue, ValidationReport};
pub use solver::{ContourProvider, ProcessSolver, SolverError};
pub use unit_factory::UnitFactory;
