// ==========================================
// 轧制道次仿真编排系统 - 仿真编排器
// ==========================================
// 用途: 协调一次仿真的完整流程
// 流程: 序列校验 → 求解指令解析 → 来料断面 → 机组序列 → 求解分派 → 结果提取
// 红线: 单次调用独占全部中间对象,不跨请求保留状态;任一步失败即中止
// ==========================================

use crate::config::SimulationDefaults;
use crate::domain::config::SimulationRequest;
use crate::domain::report::SimulationReport;
use crate::domain::solved::{SolvedSequence, SolvedUnit};
use crate::domain::types::{UnitKind, ValidationPolicy};
use crate::domain::unit::ProcessSequence;
use crate::engine::dispatcher::{dispatch, SolveInstruction};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::extractor::extract;
use crate::engine::profile_factory::build_profile;
use crate::engine::sequence_builder::SequenceBuilder;
use crate::engine::sequence_validator::{SequenceValidator, ValidationIssue};
use crate::engine::solver::ProcessSolver;
use std::sync::Arc;
use tracing::{debug, info, warn};

// ==========================================
// SimulationOrchestrator - 仿真编排器
// ==========================================
pub struct SimulationOrchestrator<S>
where
    S: ProcessSolver + ?Sized,
{
    solver: Arc<S>,
    policy: ValidationPolicy,
    builder: SequenceBuilder,
}

impl<S> SimulationOrchestrator<S>
where
    S: ProcessSolver + ?Sized,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - solver: 外部求解器
    /// - defaults: 本次仿真使用的默认值快照
    pub fn new(solver: Arc<S>, defaults: SimulationDefaults) -> Self {
        Self {
            solver,
            policy: defaults.validation_policy,
            builder: SequenceBuilder::new(defaults),
        }
    }

    /// 执行一次完整仿真
    ///
    /// # 返回
    /// - Ok(SimulationReport): 逐机组结果
    /// - Err(EngineError): 任一步失败（不产生部分报告）
    pub fn run(&self, request: &SimulationRequest) -> EngineResult<SimulationReport> {
        info!(
            units_configured = request.pass_design_data.len(),
            solve_method = %request.solve_method,
            validation_policy = %self.policy,
            "开始执行仿真流程"
        );

        // ==========================================
        // 步骤1: 序列校验
        // ==========================================
        debug!("步骤1: 校验机组配置");
        let validation = SequenceValidator::validate(&request.pass_design_data);
        if !validation.is_ok() {
            match self.policy {
                ValidationPolicy::Strict => validation.into_result()?,
                ValidationPolicy::Advisory => {
                    for issue in &validation.issues {
                        warn!(
                            unit_index = ?issue.index,
                            reason = %issue.reason,
                            "配置校验未通过（仅告警）"
                        );
                    }
                }
            }
        }

        // ==========================================
        // 步骤2: 求解指令解析（先于任何求解调用）
        // ==========================================
        let instruction = SolveInstruction::resolve(&request.solve_method, &request.solve_params)?;
        debug!(solve_method = %instruction.method(), "步骤2: 求解指令解析完成");

        // ==========================================
        // 步骤3: 来料断面
        // ==========================================
        let in_profile = build_profile(&request.in_profile)?;
        debug!(shape = %in_profile.shape(), "步骤3: 来料断面构建完成");

        // ==========================================
        // 步骤4: 机组序列
        // ==========================================
        let built = self.builder.build_sequence(&request.pass_design_data)?;
        if built.sequence.is_empty() {
            return Err(EngineError::ValidationFailure {
                reason: "No Units defined".to_string(),
                issues: vec![ValidationIssue {
                    index: None,
                    reason: "No Units defined".to_string(),
                }],
            });
        }
        info!(
            units = built.sequence.len(),
            skipped = built.skipped.len(),
            "步骤4: 机组序列构建完成"
        );

        // ==========================================
        // 步骤5: 求解分派
        // ==========================================
        let solved = dispatch(self.solver.as_ref(), &built.sequence, &in_profile, instruction)?;
        check_solved_matches(&built.sequence, &solved)?;
        info!(solved_units = solved.len(), "步骤5: 求解完成");

        // ==========================================
        // 步骤6: 结果提取
        // ==========================================
        let report = extract(&solved);
        info!(units = report.units, "仿真流程完成");

        Ok(report)
    }
}

/// 求解结果必须与机组序列逐位对应（数量、顺序、类型）
fn check_solved_matches(sequence: &ProcessSequence, solved: &SolvedSequence) -> EngineResult<()> {
    let expected = sequence.kinds();
    let actual: Vec<UnitKind> = solved.units.iter().map(SolvedUnit::kind).collect();

    for index in 0..expected.len().max(actual.len()) {
        let (want, got) = (expected.get(index), actual.get(index));
        if want != got {
            warn!(
                unit_index = index,
                expected_units = expected.len(),
                solved_units = actual.len(),
                "求解结果与机组序列不一致"
            );
            return Err(EngineError::SolverOutputMismatch {
                index,
                expected: describe_kind(want),
                actual: describe_kind(got),
            });
        }
    }
    Ok(())
}

fn describe_kind(kind: Option<&UnitKind>) -> String {
    kind.map(UnitKind::to_string)
        .unwrap_or_else(|| "<none>".to_string())
}
