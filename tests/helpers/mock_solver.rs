// ==========================================
// Mock 求解器 / 几何协作者 - 用于集成测试
// ==========================================
// 物理模型极简化:
// - 轧制道次: 断面积按固定压下率减小,高度同比例减小,温度降 10 K
// - 输送段: 温度降 5 K
// - 水冷管段: 温度降 20 K
// ==========================================

use rolling_sim::domain::groove::Groove;
use rolling_sim::domain::profile::{Profile, ProfileGeometry};
use rolling_sim::domain::solved::{
    Contour, ProfileState, RollPassOutcome, SolvedSequence, SolvedUnit,
};
use rolling_sim::domain::types::SolveMethod;
use rolling_sim::domain::unit::{ProcessSequence, ProcessUnit};
use rolling_sim::engine::{ContourProvider, ProcessSolver, SolverError};
use std::f64::consts::PI;
use std::sync::Mutex;

/// 返回结果的完整性（用于模拟行为异常的求解器）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolvedOutput {
    Complete,
    /// 只返回前 n 个机组
    Truncated(usize),
    /// 机组顺序倒置
    Reversed,
}

/// Mock 求解器
pub struct MockSolver {
    /// 每个轧制道次的压下率
    pub reduction_per_pass: f64,
    /// 设置后所有求解调用均失败
    pub fail_with: Option<String>,
    pub output: SolvedOutput,
    calls: Mutex<Vec<(SolveMethod, Option<f64>)>>,
}

impl MockSolver {
    pub fn new() -> Self {
        Self {
            reduction_per_pass: 0.2,
            fail_with: None,
            output: SolvedOutput::Complete,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_output(output: SolvedOutput) -> Self {
        Self {
            output,
            ..Self::new()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// 已发生的求解调用（模式 + 速度参数）
    pub fn calls(&self) -> Vec<(SolveMethod, Option<f64>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: SolveMethod, velocity: Option<f64>) {
        self.calls.lock().unwrap().push((method, velocity));
    }

    fn run(
        &self,
        sequence: &ProcessSequence,
        in_profile: &Profile,
        velocity: f64,
    ) -> Result<SolvedSequence, SolverError> {
        if let Some(message) = &self.fail_with {
            return Err(SolverError::msg(message.clone()));
        }

        let mut state = initial_state(in_profile);
        let mut units = Vec::with_capacity(sequence.len());

        for unit in sequence.iter() {
            let entry = state.clone();
            let (exit, outcome) = match unit {
                ProcessUnit::RollPass(pass) => {
                    let keep = 1.0 - self.reduction_per_pass;
                    let area = entry.cross_section_area * keep;
                    let exit = ProfileState {
                        strain: entry.strain + (entry.cross_section_area / area).ln(),
                        temperature: entry.temperature - 10.0,
                        height: entry.height * keep,
                        width: entry.width,
                        cross_section_area: area,
                        flow_stress: Some(120e6),
                        contour: scale_y(&entry.contour, keep),
                    };
                    let outcome = RollPassOutcome {
                        roll_force: 150e3,
                        roll_torque: 4e3,
                        power: 80e3,
                        elongation_efficiency: 0.9,
                        filling_ratio: 0.95,
                        filling_error: -0.05,
                        working_radius: pass.roll.nominal_radius * 0.95,
                        velocity,
                        gap: pass
                            .gap()
                            .or(pass.inscribed_circle_diameter())
                            .unwrap_or(0.0),
                        bite_angle: 0.3,
                        groove_contour: groove_line(&pass.roll.groove),
                    };
                    (exit, Some(outcome))
                }
                ProcessUnit::Transport(_) => (cooled(&entry, 5.0), None),
                ProcessUnit::CoolingPipe(_) => (cooled(&entry, 20.0), None),
            };

            let solved = SolvedUnit::from_parts(unit.clone(), entry, exit.clone(), outcome)
                .ok_or_else(|| SolverError::msg("unit kind and outcome mismatch"))?;
            units.push(solved);
            state = exit;
        }

        match self.output {
            SolvedOutput::Complete => {}
            SolvedOutput::Truncated(n) => units.truncate(n),
            SolvedOutput::Reversed => units.reverse(),
        }
        Ok(SolvedSequence::new(units))
    }
}

impl ProcessSolver for MockSolver {
    fn solve(
        &self,
        sequence: &ProcessSequence,
        in_profile: &Profile,
    ) -> Result<SolvedSequence, SolverError> {
        self.record(SolveMethod::Solve, None);
        self.run(sequence, in_profile, 1.0)
    }

    fn solve_forward(
        &self,
        sequence: &ProcessSequence,
        in_profile: &Profile,
        in_velocity: f64,
    ) -> Result<SolvedSequence, SolverError> {
        self.record(SolveMethod::SolveForward, Some(in_velocity));
        self.run(sequence, in_profile, in_velocity)
    }

    fn solve_backward(
        &self,
        sequence: &ProcessSequence,
        in_profile: &Profile,
        _out_cross_section: f64,
        out_velocity: f64,
    ) -> Result<SolvedSequence, SolverError> {
        self.record(SolveMethod::SolveBackward, Some(out_velocity));
        self.run(sequence, in_profile, out_velocity)
    }
}

impl ContourProvider for MockSolver {
    fn groove_contour(&self, groove: &Groove) -> Result<Contour, SolverError> {
        Ok(groove_line(groove))
    }

    fn profile_contour(&self, profile: &Profile) -> Result<Contour, SolverError> {
        Ok(initial_state(profile).contour)
    }
}

// ==========================================
// 简化几何
// ==========================================

fn initial_state(profile: &Profile) -> ProfileState {
    let (height, width, area, contour) = match profile.geometry {
        ProfileGeometry::Round { diameter } => {
            let r = diameter / 2.0;
            let points = (0..72)
                .map(|i| {
                    let t = i as f64 * 2.0 * PI / 72.0;
                    (r * t.cos(), r * t.sin())
                })
                .collect();
            (diameter, diameter, PI * r * r, Contour::new(points))
        }
        ProfileGeometry::Square { side, .. } => (side, side, side * side, rectangle(side, side)),
        ProfileGeometry::Box { height, width, .. } => {
            (height, width, height * width, rectangle(height, width))
        }
        ProfileGeometry::Hexagon { side, .. } => {
            let height = 3f64.sqrt() * side;
            (height, 2.0 * side, 1.5 * 3f64.sqrt() * side * side, rectangle(height, 2.0 * side))
        }
    };

    ProfileState {
        strain: profile.strain,
        temperature: profile.temperature,
        height,
        width,
        cross_section_area: area,
        flow_stress: None,
        contour,
    }
}

fn rectangle(height: f64, width: f64) -> Contour {
    let (h, w) = (height / 2.0, width / 2.0);
    Contour::new(vec![(-w, -h), (w, -h), (w, h), (-w, h)])
}

fn scale_y(contour: &Contour, factor: f64) -> Contour {
    contour.map(|(x, y)| (x, y * factor))
}

fn cooled(state: &ProfileState, delta: f64) -> ProfileState {
    ProfileState {
        temperature: state.temperature - delta,
        ..state.clone()
    }
}

fn groove_line(groove: &Groove) -> Contour {
    let half_width = groove
        .usable_width()
        .or(groove.params.r1)
        .unwrap_or(0.01)
        / 2.0;
    let depth = groove.depth().unwrap_or(half_width / 2.0);
    Contour::new(vec![
        (-2.0 * half_width, 0.0),
        (-half_width, 0.0),
        (0.0, depth),
        (half_width, 0.0),
        (2.0 * half_width, 0.0),
    ])
}
