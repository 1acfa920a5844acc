// ==========================================
// 轧制道次仿真编排系统 - 领域类型定义
// ==========================================
// 职责: 闭合的标签枚举（机组类型、速度定义方式、长度定义方式、
//       轧制方向、求解模式、校验策略）
// 红线: 标签解析只在边界处进行一次,下游只使用强类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 机组类型 (Unit Kind)
// ==========================================
// 序列化格式: 与前端 passDesignData.type 一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    TwoRollPass,   // 二辊孔型道次
    ThreeRollPass, // 三辊孔型道次
    Transport,     // 机架间输送
    CoolingPipe,   // 水冷管段
}

impl UnitKind {
    /// 全部已知类型（注册表顺序）
    pub const ALL: [UnitKind; 4] = [
        UnitKind::TwoRollPass,
        UnitKind::ThreeRollPass,
        UnitKind::Transport,
        UnitKind::CoolingPipe,
    ];

    /// 从标签解析（未知标签返回 None）
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::TwoRollPass => "TwoRollPass",
            UnitKind::ThreeRollPass => "ThreeRollPass",
            UnitKind::Transport => "Transport",
            UnitKind::CoolingPipe => "CoolingPipe",
        }
    }

    /// 是否为变形类（轧制道次）机组
    ///
    /// 变形类机组在结果中额外输出力能参数与轮廓数据
    pub fn is_mechanical(&self) -> bool {
        matches!(self, UnitKind::TwoRollPass | UnitKind::ThreeRollPass)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 轧辊速度定义方式 (velocityDefineBy)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityDefineBy {
    #[default]
    Velocity,            // 线速度
    RotationalFrequency, // 转速
}

// ==========================================
// 长度定义方式 (transportDefineBy / coolingDefineBy)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtentDefineBy {
    #[default]
    Length,   // 按长度
    Duration, // 按时长
}

// ==========================================
// 二辊轧制方向 (Two-Roll Orientation)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoRollOrientation {
    #[default]
    #[serde(alias = "h")]
    Horizontal, // 水平辊
    #[serde(alias = "v")]
    Vertical,   // 立辊
}

impl TwoRollOrientation {
    /// 从标签解析（大小写不敏感,支持 h / v 简写）
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "horizontal" | "h" => Some(TwoRollOrientation::Horizontal),
            "vertical" | "v" => Some(TwoRollOrientation::Vertical),
            _ => None,
        }
    }
}

impl fmt::Display for TwoRollOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwoRollOrientation::Horizontal => write!(f, "horizontal"),
            TwoRollOrientation::Vertical => write!(f, "vertical"),
        }
    }
}

// ==========================================
// 三辊轧制方向 (Three-Roll Orientation)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThreeRollOrientation {
    #[default]
    #[serde(alias = "y")]
    Y,     // 正 Y 布置
    #[serde(alias = "antiy", alias = "anti_y")]
    AntiY, // 倒 Y 布置
}

impl ThreeRollOrientation {
    /// 从标签解析（大小写不敏感,支持 anti_y 写法）
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "y" => Some(ThreeRollOrientation::Y),
            "antiy" | "anti_y" => Some(ThreeRollOrientation::AntiY),
            _ => None,
        }
    }
}

impl fmt::Display for ThreeRollOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreeRollOrientation::Y => write!(f, "Y"),
            ThreeRollOrientation::AntiY => write!(f, "AntiY"),
        }
    }
}

// ==========================================
// 求解模式 (Solve Method)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMethod {
    Solve,         // 标准求解
    SolveForward,  // 正向速度传递
    SolveBackward, // 反向速度传递
}

impl SolveMethod {
    /// 从标签解析（未知标签返回 None）
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "solve" => Some(SolveMethod::Solve),
            "solve_forward" => Some(SolveMethod::SolveForward),
            "solve_backward" => Some(SolveMethod::SolveBackward),
            _ => None,
        }
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMethod::Solve => write!(f, "solve"),
            SolveMethod::SolveForward => write!(f, "solve_forward"),
            SolveMethod::SolveBackward => write!(f, "solve_backward"),
        }
    }
}

// ==========================================
// 校验策略 (Validation Policy)
// ==========================================
// Strict: 校验失败即中止构建
// Advisory: 仅记录警告,继续构建
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Advisory,
}

impl ValidationPolicy {
    /// 从配置值解析（大小写不敏感）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "STRICT" => Some(ValidationPolicy::Strict),
            "ADVISORY" => Some(ValidationPolicy::Advisory),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Strict => write!(f, "STRICT"),
            ValidationPolicy::Advisory => write!(f, "ADVISORY"),
        }
    }
}
