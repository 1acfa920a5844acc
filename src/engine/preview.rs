// ==========================================
// 轧制道次仿真编排系统 - 轮廓预览
// ==========================================
// 职责: 求解前单独预览某一道次的孔型轮廓、来料断面边界
// 依赖: ContourProvider（几何协作者）
// ==========================================

use crate::config::SimulationDefaults;
use crate::domain::config::{InProfileConfig, ProcessUnitConfig};
use crate::domain::groove::GrooveKind;
use crate::domain::profile::ProfileShape;
use crate::domain::report::{ContourXY, RollContour};
use crate::domain::types::UnitKind;
use crate::engine::contour::{place_roll_contour, polygon_area};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::profile_factory::build_profile;
use crate::engine::solver::ContourProvider;
use crate::engine::unit_factory::UnitFactory;
use serde::{Deserialize, Serialize};

/// 道次孔型预览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollPassPreview {
    #[serde(rename = "type")]
    pub unit_type: UnitKind,
    pub groove_type: GrooveKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inscribed_circle_diameter: Option<f64>,
    pub usable_width: Option<f64>,
    pub depth: Option<f64>,
    pub roll_contour: RollContour,
}

/// 来料断面预览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePreview {
    pub shape: ProfileShape,
    pub cross_section_area: f64,
    pub contour: ContourXY,
}

/// 预览单个轧制道次的孔型轮廓
///
/// # 返回
/// - Err(InvalidUnitConfig): 配置不是轧制道次
/// - Err(孔型错误): 孔型标签或参数无效
/// - Err(Solver): 几何协作者失败
pub fn preview_roll_pass<G>(
    config: &ProcessUnitConfig,
    defaults: &SimulationDefaults,
    geometry: &G,
) -> EngineResult<RollPassPreview>
where
    G: ContourProvider + ?Sized,
{
    let pass_config = match config {
        ProcessUnitConfig::TwoRollPass(pass) | ProcessUnitConfig::ThreeRollPass(pass) => pass,
        other => {
            return Err(EngineError::InvalidUnitConfig {
                index: 0,
                reason: format!("{} 不是轧制道次,无孔型轮廓", other.kind()),
            })
        }
    };

    let factory = UnitFactory::new(defaults.clone());
    let pass = factory.build_roll_pass(0, config.kind(), pass_config)?;
    let groove_line = geometry.groove_contour(&pass.roll.groove)?;

    Ok(RollPassPreview {
        unit_type: pass.kind(),
        groove_type: pass.roll.groove.kind,
        gap: pass.gap(),
        inscribed_circle_diameter: pass.inscribed_circle_diameter(),
        usable_width: pass.roll.groove.usable_width(),
        depth: pass.roll.groove.depth(),
        roll_contour: place_roll_contour(&groove_line, &pass.layout),
    })
}

/// 断面预览缺省温度 (K)
pub const PREVIEW_TEMPERATURE_K: f64 = 1200.0;

/// 预览来料断面边界
///
/// 预览只关心几何,配置中缺少 temperature 时按 PREVIEW_TEMPERATURE_K 构建
pub fn preview_in_profile<G>(config: &InProfileConfig, geometry: &G) -> EngineResult<ProfilePreview>
where
    G: ContourProvider + ?Sized,
{
    let profile = if config.temperature.is_some() {
        build_profile(config)?
    } else {
        build_profile(&InProfileConfig {
            temperature: Some(PREVIEW_TEMPERATURE_K),
            ..config.clone()
        })?
    };
    let contour = geometry.profile_contour(&profile)?;

    Ok(ProfilePreview {
        shape: profile.shape(),
        cross_section_area: polygon_area(&contour),
        contour: ContourXY::from(&contour),
    })
}
