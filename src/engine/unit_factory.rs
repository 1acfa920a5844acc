// ==========================================
// 轧制道次仿真编排系统 - 机组工厂
// ==========================================
// 职责: 单条机组配置 → 机组值对象
// 依赖: 孔型工厂（轧制道次）、仿真默认值（输送段热边界、缺省孔型）
// ==========================================
// 缺省值约定:
// - 轧制道次: 名义半径 / 辊缝 / 内切圆直径 / 速度值缺省 0
// - 输送段: 环境温度 293.15 K, 换热系数 15（可由配置覆写）
// - 水冷管段: 全部数值缺省 0
// ==========================================

use crate::config::SimulationDefaults;
use crate::domain::config::{
    CoolingPipeConfig, GrooveParamMap, ProcessUnitConfig, RollPassConfig, TransportConfig,
};
use crate::domain::types::{
    ExtentDefineBy, ThreeRollOrientation, TwoRollOrientation, UnitKind, VelocityDefineBy,
};
use crate::domain::unit::{
    CoolingPipe, ProcessUnit, Roll, RollPass, RollPassLayout, RollSpeed, Transport, UnitExtent,
};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::groove_factory::build_groove;
use tracing::debug;

// ==========================================
// UnitFactory - 机组工厂
// ==========================================
pub struct UnitFactory {
    defaults: SimulationDefaults,
}

impl UnitFactory {
    pub fn new(defaults: SimulationDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &SimulationDefaults {
        &self.defaults
    }

    /// 构建单个机组
    ///
    /// # 参数
    /// - index: 配置在列表中的位置（0 起,仅用于错误定位）
    /// - config: 已按 type 解析的机组配置
    pub fn build_unit(&self, index: usize, config: &ProcessUnitConfig) -> EngineResult<ProcessUnit> {
        let unit = match config {
            ProcessUnitConfig::TwoRollPass(pass) | ProcessUnitConfig::ThreeRollPass(pass) => {
                ProcessUnit::RollPass(self.build_roll_pass(index, config.kind(), pass)?)
            }
            ProcessUnitConfig::Transport(transport) => {
                ProcessUnit::Transport(self.build_transport(transport))
            }
            ProcessUnitConfig::CoolingPipe(pipe) => {
                ProcessUnit::CoolingPipe(self.build_cooling_pipe(pipe))
            }
        };

        debug!(unit_index = index, unit_type = %unit.kind(), "机组构建完成");
        Ok(unit)
    }

    /// 轧制道次（二辊/三辊）
    pub fn build_roll_pass(
        &self,
        index: usize,
        kind: UnitKind,
        config: &RollPassConfig,
    ) -> EngineResult<RollPass> {
        let groove_type = config
            .groove_type
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .unwrap_or(self.defaults.default_groove_type.as_str());

        let empty = GrooveParamMap::new();
        let groove = build_groove(groove_type, config.groove.as_ref().unwrap_or(&empty))?;

        // 线速度与转速二选一
        let speed = match config.velocity_define_by {
            VelocityDefineBy::Velocity => {
                RollSpeed::Velocity(config.velocity_value.or(config.velocity).unwrap_or(0.0))
            }
            VelocityDefineBy::RotationalFrequency => RollSpeed::RotationalFrequency(
                config
                    .velocity_value
                    .or(config.rotational_frequency)
                    .unwrap_or(0.0),
            ),
        };

        let orientation = config
            .orientation
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty());

        let layout = match kind {
            UnitKind::TwoRollPass => RollPassLayout::TwoRoll {
                gap: config.gap.unwrap_or(0.0),
                orientation: match orientation {
                    None => TwoRollOrientation::default(),
                    Some(tag) => TwoRollOrientation::from_tag(tag).ok_or_else(|| {
                        EngineError::InvalidUnitConfig {
                            index,
                            reason: format!("二辊轧制方向无效: {}", tag),
                        }
                    })?,
                },
            },
            UnitKind::ThreeRollPass => RollPassLayout::ThreeRoll {
                inscribed_circle_diameter: config.inscribed_circle_diameter.unwrap_or(0.0),
                orientation: match orientation {
                    None => ThreeRollOrientation::default(),
                    Some(tag) => ThreeRollOrientation::from_tag(tag).ok_or_else(|| {
                        EngineError::InvalidUnitConfig {
                            index,
                            reason: format!("三辊轧制方向无效: {}", tag),
                        }
                    })?,
                },
            },
            other => {
                return Err(EngineError::InvalidUnitConfig {
                    index,
                    reason: format!("{} 不是轧制道次", other),
                })
            }
        };

        Ok(RollPass {
            label: clean_label(&config.label),
            roll: Roll {
                groove,
                nominal_radius: config.nominal_radius.unwrap_or(0.0),
                speed,
            },
            layout,
            coulomb_friction_coefficient: config.coulomb_friction_coefficient,
        })
    }

    /// 输送段
    pub fn build_transport(&self, config: &TransportConfig) -> Transport {
        Transport {
            label: clean_label(&config.label),
            extent: extent(config.define_by, config.value),
            environment_temperature: config
                .environment_temperature
                .unwrap_or(self.defaults.transport_environment_temperature),
            heat_transfer_coefficient: config
                .heat_transfer_coefficient
                .unwrap_or(self.defaults.transport_heat_transfer_coefficient),
        }
    }

    /// 水冷管段
    pub fn build_cooling_pipe(&self, config: &CoolingPipeConfig) -> CoolingPipe {
        CoolingPipe {
            label: clean_label(&config.label),
            extent: extent(config.define_by, config.value),
            inner_radius: config.inner_radius.unwrap_or(0.0),
            coolant_temperature: config.coolant_temperature.unwrap_or(0.0),
            coolant_volume_flux: config.coolant_volume_flux.unwrap_or(0.0),
        }
    }
}

fn extent(define_by: ExtentDefineBy, value: Option<f64>) -> UnitExtent {
    let value = value.unwrap_or(0.0);
    match define_by {
        ExtentDefineBy::Length => UnitExtent::Length(value),
        ExtentDefineBy::Duration => UnitExtent::Duration(value),
    }
}

// 空白标签视为未设置
fn clean_label(label: &Option<String>) -> Option<String> {
    label
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}
