// ==========================================
// 轧制道次仿真编排系统 - 求解分派器
// ==========================================
// 职责: 选择求解模式,校验模式参数,转发给外部求解器
// 状态机:
//   solve          → ProcessSolver::solve
//   solve_forward  → ProcessSolver::solve_forward(in_velocity)
//   solve_backward → ProcessSolver::solve_backward(out_cross_section, out_velocity)
// 红线: 不做数值计算;求解器错误原样透传,不重试
// ==========================================

use crate::domain::config::SolveParams;
use crate::domain::profile::Profile;
use crate::domain::solved::SolvedSequence;
use crate::domain::types::SolveMethod;
use crate::domain::unit::ProcessSequence;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::solver::ProcessSolver;
use tracing::info;

/// 已完成参数校验的求解指令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveInstruction {
    Solve,
    SolveForward {
        in_velocity: f64,
    },
    SolveBackward {
        out_cross_section: f64,
        out_velocity: f64,
    },
}

impl SolveInstruction {
    /// 解析求解模式与参数
    ///
    /// # 返回
    /// - Err(UnknownSolveMode): 模式标签未知
    /// - Err(MissingSolveParameter): 模式所需参数缺失
    pub fn resolve(mode: &str, params: &SolveParams) -> EngineResult<Self> {
        let method = SolveMethod::from_tag(mode.trim())
            .ok_or_else(|| EngineError::UnknownSolveMode(mode.to_string()))?;

        let require = |value: Option<f64>, parameter: &'static str| {
            value.ok_or(EngineError::MissingSolveParameter {
                mode: method,
                parameter,
            })
        };

        let instruction = match method {
            SolveMethod::Solve => SolveInstruction::Solve,
            SolveMethod::SolveForward => SolveInstruction::SolveForward {
                in_velocity: require(params.in_velocity, "in_velocity")?,
            },
            SolveMethod::SolveBackward => SolveInstruction::SolveBackward {
                out_cross_section: require(params.out_cross_section, "out_cross_section")?,
                out_velocity: require(params.out_velocity, "out_velocity")?,
            },
        };

        Ok(instruction)
    }

    pub fn method(&self) -> SolveMethod {
        match self {
            SolveInstruction::Solve => SolveMethod::Solve,
            SolveInstruction::SolveForward { .. } => SolveMethod::SolveForward,
            SolveInstruction::SolveBackward { .. } => SolveMethod::SolveBackward,
        }
    }
}

/// 按指令调用求解器
pub fn dispatch<S>(
    solver: &S,
    sequence: &ProcessSequence,
    in_profile: &Profile,
    instruction: SolveInstruction,
) -> EngineResult<SolvedSequence>
where
    S: ProcessSolver + ?Sized,
{
    info!(
        solve_method = %instruction.method(),
        units = sequence.len(),
        "调用外部求解器"
    );

    let solved = match instruction {
        SolveInstruction::Solve => solver.solve(sequence, in_profile)?,
        SolveInstruction::SolveForward { in_velocity } => {
            solver.solve_forward(sequence, in_profile, in_velocity)?
        }
        SolveInstruction::SolveBackward {
            out_cross_section,
            out_velocity,
        } => solver.solve_backward(sequence, in_profile, out_cross_section, out_velocity)?,
    };

    Ok(solved)
}

/// 解析模式并求解（resolve + dispatch）
pub fn solve<S>(
    solver: &S,
    sequence: &ProcessSequence,
    in_profile: &Profile,
    mode: &str,
    params: &SolveParams,
) -> EngineResult<SolvedSequence>
where
    S: ProcessSolver + ?Sized,
{
    let instruction = SolveInstruction::resolve(mode, params)?;
    dispatch(solver, sequence, in_profile, instruction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_solve_needs_no_parameters() {
        let instruction = SolveInstruction::resolve("solve", &SolveParams::default()).unwrap();
        assert_eq!(instruction, SolveInstruction::Solve);
    }

    #[test]
    fn test_forward_requires_in_velocity() {
        let err = SolveInstruction::resolve("solve_forward", &SolveParams::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingSolveParameter {
                mode: SolveMethod::SolveForward,
                parameter: "in_velocity"
            }
        ));

        let params = SolveParams {
            in_velocity: Some(1.5),
            ..SolveParams::default()
        };
        assert_eq!(
            SolveInstruction::resolve("solve_forward", &params).unwrap(),
            SolveInstruction::SolveForward { in_velocity: 1.5 }
        );
    }

    #[test]
    fn test_backward_requires_both_parameters() {
        let params = SolveParams {
            out_cross_section: Some(1e-4),
            ..SolveParams::default()
        };
        let err = SolveInstruction::resolve("solve_backward", &params).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingSolveParameter {
                parameter: "out_velocity",
                ..
            }
        ));

        let params = SolveParams {
            out_cross_section: Some(1e-4),
            out_velocity: Some(12.0),
            ..SolveParams::default()
        };
        assert_eq!(
            SolveInstruction::resolve("solve_backward", &params)
                .unwrap()
                .method(),
            SolveMethod::SolveBackward
        );
    }

    #[test]
    fn test_unknown_mode() {
        let err = SolveInstruction::resolve("solve_sideways", &SolveParams::default()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownSolveMode(mode) if mode == "solve_sideways"));
    }
}
