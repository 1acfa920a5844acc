// ==========================================
// 轧制道次仿真编排系统 - 领域模型层
// ==========================================
// 职责: 定义配置记录、孔型/机组/断面值对象、求解结果与报告
// 红线: 不含求解逻辑,不含持久化逻辑
// ==========================================

pub mod config;
pub mod groove;
pub mod profile;
pub mod report;
pub mod solved;
pub mod types;
pub mod unit;

// 重导出核心类型
pub use config::{
    CoolingPipeConfig, GrooveParamMap, InProfileConfig, ProcessUnitConfig, RollPassConfig,
    SimulationRequest, SolveParams, TransportConfig,
};
pub use groove::{Groove, GrooveKind, GrooveParameters, GrooveSchema};
pub use profile::{FlowStressCoefficients, Profile, ProfileGeometry, ProfileShape};
pub use report::{ContourXY, PassResult, RollContour, RollPassMechanics, SimulationReport};
pub use solved::{Contour, ProfileState, RollPassOutcome, SolvedSequence, SolvedUnit};
pub use types::{
    ExtentDefineBy, SolveMethod, ThreeRollOrientation, TwoRollOrientation, UnitKind,
    ValidationPolicy, VelocityDefineBy,
};
pub use unit::{
    CoolingPipe, ProcessSequence, ProcessUnit, Roll, RollPass, RollPassLayout, RollSpeed,
    Transport, UnitExtent,
};
