// ==========================================
// 轧制道次仿真编排系统 - 孔型（Groove）
// ==========================================
// 职责: 孔型种类闭合枚举 + 参数约束表 + 孔型值对象
// 说明: 孔型轮廓几何由外部几何协作者计算,本模块只描述
//       "哪种孔型 + 哪些参数"
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// GrooveKind - 孔型种类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrooveKind {
    BoxGroove,
    ConstrictedBoxGroove,
    DiamondGroove,
    GothicGroove,
    SquareGroove,
    CircularOvalGroove,
    ConstrictedCircularOvalGroove,
    ConstrictedSwedishOvalGroove,
    FlatOvalGroove,
    Oval3RadiiGroove,
    Oval3RadiiFlankedGroove,
    SwedishOvalGroove,
    UpsetOvalGroove,
    RoundGroove,
    FalseRoundGroove,
    FlatGroove,
}

/// "恰好 N 个" 选择组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub count: usize,
    pub among: &'static [&'static str],
}

/// 孔型参数约束
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrooveSchema {
    /// 必填参数
    pub required: &'static [&'static str],
    /// 选择组（组内恰好 count 个参数有值）
    pub choices: &'static [ChoiceGroup],
    /// 互斥参数对（不得同时给出）
    pub exclusive: &'static [(&'static str, &'static str)],
}

/// 所有孔型都接受的参数（缺省 0）
pub const PAD_ANGLE: &str = "pad_angle";

// 角度类参数（允许为负）
const ANGLE_PARAMS: &[&str] = &["pad_angle", "flank_angle", "tip_angle"];

const BOX_LIKE_CHOICES: &[ChoiceGroup] = &[ChoiceGroup {
    count: 2,
    among: &["ground_width", "even_ground_width", "usable_width", "flank_angle"],
}];
const SWEDISH_CHOICES: &[ChoiceGroup] = &[ChoiceGroup {
    count: 1,
    among: &["ground_width", "even_ground_width", "usable_width", "flank_angle"],
}];
const TIP_CHOICES: &[ChoiceGroup] = &[ChoiceGroup {
    count: 2,
    among: &["usable_width", "tip_depth", "tip_angle"],
}];
const FLANK_GROUP: ChoiceGroup = ChoiceGroup {
    count: 1,
    among: &["flank_angle", "flank_width", "flank_height", "flank_length"],
};
const GROUND_WIDTH_EXCLUSIVE: &[(&str, &str)] = &[("ground_width", "even_ground_width")];

impl GrooveKind {
    /// 全部孔型（注册表顺序）
    pub const ALL: [GrooveKind; 16] = [
        GrooveKind::BoxGroove,
        GrooveKind::ConstrictedBoxGroove,
        GrooveKind::DiamondGroove,
        GrooveKind::GothicGroove,
        GrooveKind::SquareGroove,
        GrooveKind::CircularOvalGroove,
        GrooveKind::ConstrictedCircularOvalGroove,
        GrooveKind::ConstrictedSwedishOvalGroove,
        GrooveKind::FlatOvalGroove,
        GrooveKind::Oval3RadiiGroove,
        GrooveKind::Oval3RadiiFlankedGroove,
        GrooveKind::SwedishOvalGroove,
        GrooveKind::UpsetOvalGroove,
        GrooveKind::RoundGroove,
        GrooveKind::FalseRoundGroove,
        GrooveKind::FlatGroove,
    ];

    /// 从标签解析（未知标签返回 None）
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrooveKind::BoxGroove => "BoxGroove",
            GrooveKind::ConstrictedBoxGroove => "ConstrictedBoxGroove",
            GrooveKind::DiamondGroove => "DiamondGroove",
            GrooveKind::GothicGroove => "GothicGroove",
            GrooveKind::SquareGroove => "SquareGroove",
            GrooveKind::CircularOvalGroove => "CircularOvalGroove",
            GrooveKind::ConstrictedCircularOvalGroove => "ConstrictedCircularOvalGroove",
            GrooveKind::ConstrictedSwedishOvalGroove => "ConstrictedSwedishOvalGroove",
            GrooveKind::FlatOvalGroove => "FlatOvalGroove",
            GrooveKind::Oval3RadiiGroove => "Oval3RadiiGroove",
            GrooveKind::Oval3RadiiFlankedGroove => "Oval3RadiiFlankedGroove",
            GrooveKind::SwedishOvalGroove => "SwedishOvalGroove",
            GrooveKind::UpsetOvalGroove => "UpsetOvalGroove",
            GrooveKind::RoundGroove => "RoundGroove",
            GrooveKind::FalseRoundGroove => "FalseRoundGroove",
            GrooveKind::FlatGroove => "FlatGroove",
        }
    }

    /// 参数约束表
    pub fn schema(&self) -> GrooveSchema {
        match self {
            GrooveKind::BoxGroove => GrooveSchema {
                required: &["r1", "r2", "depth"],
                choices: BOX_LIKE_CHOICES,
                exclusive: GROUND_WIDTH_EXCLUSIVE,
            },
            GrooveKind::ConstrictedBoxGroove | GrooveKind::ConstrictedSwedishOvalGroove => {
                GrooveSchema {
                    required: &["r1", "r2", "r4", "depth", "indent"],
                    choices: BOX_LIKE_CHOICES,
                    exclusive: GROUND_WIDTH_EXCLUSIVE,
                }
            }
            GrooveKind::DiamondGroove | GrooveKind::SquareGroove => GrooveSchema {
                required: &["r1", "r2"],
                choices: TIP_CHOICES,
                exclusive: &[],
            },
            GrooveKind::GothicGroove => GrooveSchema {
                required: &["r1", "r2", "r3", "usable_width", "depth"],
                choices: &[],
                exclusive: &[],
            },
            GrooveKind::CircularOvalGroove => GrooveSchema {
                required: &["r1"],
                choices: &[ChoiceGroup {
                    count: 2,
                    among: &["r2", "usable_width", "depth"],
                }],
                exclusive: &[],
            },
            GrooveKind::ConstrictedCircularOvalGroove => GrooveSchema {
                required: &[
                    "r1",
                    "r2",
                    "r3",
                    "r4",
                    "depth",
                    "usable_width",
                    "even_ground_width",
                    "indent",
                ],
                choices: &[],
                exclusive: &[],
            },
            GrooveKind::FlatOvalGroove => GrooveSchema {
                required: &["r1", "r2", "depth"],
                choices: &[ChoiceGroup {
                    count: 1,
                    among: &["even_ground_width", "usable_width"],
                }],
                exclusive: &[],
            },
            GrooveKind::Oval3RadiiGroove | GrooveKind::UpsetOvalGroove => GrooveSchema {
                required: &["r1", "r2", "r3", "depth", "usable_width"],
                choices: &[],
                exclusive: &[],
            },
            GrooveKind::Oval3RadiiFlankedGroove => GrooveSchema {
                required: &["r1", "r2", "r3", "depth", "usable_width"],
                choices: &[FLANK_GROUP],
                exclusive: &[],
            },
            GrooveKind::SwedishOvalGroove => GrooveSchema {
                required: &["r1", "r2", "depth"],
                choices: SWEDISH_CHOICES,
                exclusive: GROUND_WIDTH_EXCLUSIVE,
            },
            GrooveKind::RoundGroove => GrooveSchema {
                required: &["r1"],
                choices: &[ChoiceGroup {
                    count: 2,
                    among: &["r2", "depth", "usable_width"],
                }],
                exclusive: &[],
            },
            GrooveKind::FalseRoundGroove => GrooveSchema {
                required: &["r1"],
                choices: &[
                    ChoiceGroup {
                        count: 2,
                        among: &["r2", "depth", "usable_width"],
                    },
                    FLANK_GROUP,
                ],
                exclusive: &[],
            },
            GrooveKind::FlatGroove => GrooveSchema {
                required: &["r1", "usable_width"],
                choices: &[],
                exclusive: &[],
            },
        }
    }
}

impl GrooveSchema {
    /// 参数名是否被该孔型接受
    pub fn accepts(&self, name: &str) -> bool {
        name == PAD_ANGLE
            || self.required.contains(&name)
            || self.choices.iter().any(|group| group.among.contains(&name))
    }
}

/// 是否为角度类参数
pub fn is_angle_param(name: &str) -> bool {
    ANGLE_PARAMS.contains(&name)
}

impl fmt::Display for GrooveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// GrooveParameters - 已校验的孔型参数
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrooveParameters {
    pub r1: Option<f64>,
    pub r2: Option<f64>,
    pub r3: Option<f64>,
    pub r4: Option<f64>,
    pub depth: Option<f64>,
    pub indent: Option<f64>,
    pub usable_width: Option<f64>,
    pub ground_width: Option<f64>,
    pub even_ground_width: Option<f64>,
    pub flank_angle: Option<f64>,
    pub flank_width: Option<f64>,
    pub flank_height: Option<f64>,
    pub flank_length: Option<f64>,
    pub tip_depth: Option<f64>,
    pub tip_angle: Option<f64>,
    pub pad_angle: f64,
}

impl GrooveParameters {
    /// 按参数名读取（pad_angle 总有值）
    pub fn value(&self, name: &str) -> Option<f64> {
        match name {
            PAD_ANGLE => Some(self.pad_angle),
            "r1" => self.r1,
            "r2" => self.r2,
            "r3" => self.r3,
            "r4" => self.r4,
            "depth" => self.depth,
            "indent" => self.indent,
            "usable_width" => self.usable_width,
            "ground_width" => self.ground_width,
            "even_ground_width" => self.even_ground_width,
            "flank_angle" => self.flank_angle,
            "flank_width" => self.flank_width,
            "flank_height" => self.flank_height,
            "flank_length" => self.flank_length,
            "tip_depth" => self.tip_depth,
            "tip_angle" => self.tip_angle,
            _ => None,
        }
    }

    /// 按参数名取槽位（未知参数名返回 None）
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Option<f64>> {
        let slot = match name {
            "r1" => &mut self.r1,
            "r2" => &mut self.r2,
            "r3" => &mut self.r3,
            "r4" => &mut self.r4,
            "depth" => &mut self.depth,
            "indent" => &mut self.indent,
            "usable_width" => &mut self.usable_width,
            "ground_width" => &mut self.ground_width,
            "even_ground_width" => &mut self.even_ground_width,
            "flank_angle" => &mut self.flank_angle,
            "flank_width" => &mut self.flank_width,
            "flank_height" => &mut self.flank_height,
            "flank_length" => &mut self.flank_length,
            "tip_depth" => &mut self.tip_depth,
            "tip_angle" => &mut self.tip_angle,
            _ => return None,
        };
        Some(slot)
    }
}

// ==========================================
// Groove - 孔型值对象
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Groove {
    pub kind: GrooveKind,
    pub params: GrooveParameters,
}

impl Groove {
    pub fn usable_width(&self) -> Option<f64> {
        self.params.usable_width
    }

    pub fn depth(&self) -> Option<f64> {
        self.params.depth
    }
}
