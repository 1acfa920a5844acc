// ==========================================
// 轧制道次仿真编排系统 - 外部求解协作者接口
// ==========================================
// 职责: 定义数值求解器与几何协作者的调用边界
// 红线: 编排层不做数值计算;求解器错误不屏蔽、不重试
// ==========================================

use crate::domain::groove::Groove;
use crate::domain::profile::Profile;
use crate::domain::solved::{Contour, SolvedSequence};
use crate::domain::unit::ProcessSequence;
use thiserror::Error;

/// 求解器内部错误（收敛失败、几何不可行等）
///
/// 对编排层不透明,消息原样透传
#[derive(Error, Debug)]
#[error(transparent)]
pub struct SolverError(#[from] anyhow::Error);

impl SolverError {
    pub fn msg<M>(message: M) -> Self
    where
        M: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        Self(anyhow::Error::msg(message))
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

// ==========================================
// ProcessSolver - 数值求解器
// ==========================================
// 三个入口对应三种求解模式;均为阻塞调用
pub trait ProcessSolver: Send + Sync {
    /// 标准求解
    fn solve(
        &self,
        sequence: &ProcessSequence,
        in_profile: &Profile,
    ) -> Result<SolvedSequence, SolverError>;

    /// 正向速度传递求解
    ///
    /// # 参数
    /// - in_velocity: 来料速度
    fn solve_forward(
        &self,
        sequence: &ProcessSequence,
        in_profile: &Profile,
        in_velocity: f64,
    ) -> Result<SolvedSequence, SolverError>;

    /// 反向速度传递求解
    ///
    /// # 参数
    /// - out_cross_section: 成品断面积
    /// - out_velocity: 成品速度
    fn solve_backward(
        &self,
        sequence: &ProcessSequence,
        in_profile: &Profile,
        out_cross_section: f64,
        out_velocity: f64,
    ) -> Result<SolvedSequence, SolverError>;
}

// ==========================================
// ContourProvider - 几何协作者
// ==========================================
// 仅用于求解前的轮廓预览
pub trait ContourProvider: Send + Sync {
    /// 单辊孔型轮廓线（局部坐标,未按辊缝定位）
    fn groove_contour(&self, groove: &Groove) -> Result<Contour, SolverError>;

    /// 断面边界（闭合点列,断面中心为原点）
    fn profile_contour(&self, profile: &Profile) -> Result<Contour, SolverError>;
}
