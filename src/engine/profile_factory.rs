// ==========================================
// 轧制道次仿真编排系统 - 来料断面工厂
// ==========================================
// 职责: 来料断面配置 → Profile
// 红线: 未知形状必须返回错误（来料断面缺失则整次求解无意义）
// ==========================================

use crate::domain::config::InProfileConfig;
use crate::domain::profile::{FlowStressCoefficients, Profile, ProfileGeometry, ProfileShape};
use crate::engine::error::{EngineError, EngineResult};
use std::collections::BTreeMap;
use tracing::debug;

/// 缺省流动应力模型
pub const DEFAULT_FLOW_STRESS_MODEL: &str = "freiberg";

/// 构建来料断面
///
/// # 返回
/// - Err(UnknownProfileShape): 形状标签未注册
/// - Err(InvalidProfile): 主尺寸或温度缺失/非正
pub fn build_profile(config: &InProfileConfig) -> EngineResult<Profile> {
    let tag = config.shape.trim().to_lowercase();
    let shape = ProfileShape::from_tag(&tag)
        .ok_or_else(|| EngineError::UnknownProfileShape(config.shape.clone()))?;

    // 与形状无关的字段在此忽略
    let geometry = match shape {
        ProfileShape::Round => ProfileGeometry::Round {
            diameter: positive(shape, "diameter", config.diameter)?,
        },
        ProfileShape::Square => ProfileGeometry::Square {
            side: positive(shape, "side", config.side)?,
            corner_radius: corner_radius(shape, config.corner_radius)?,
        },
        ProfileShape::Box => ProfileGeometry::Box {
            height: positive(shape, "height", config.height)?,
            width: positive(shape, "width", config.width)?,
            corner_radius: corner_radius(shape, config.corner_radius)?,
        },
        ProfileShape::Hexagon => ProfileGeometry::Hexagon {
            side: positive(shape, "side", config.side)?,
            corner_radius: corner_radius(shape, config.corner_radius)?,
        },
    };

    let temperature = positive(shape, "temperature", config.temperature)?;
    let flow_stress_coefficients = flow_stress_coefficients(config);

    debug!(
        shape = %shape,
        temperature,
        has_flow_stress = flow_stress_coefficients.is_some(),
        "来料断面构建完成"
    );

    Ok(Profile {
        geometry,
        temperature,
        strain: config.strain.unwrap_or(0.0),
        material: config
            .material
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        density: config.density,
        specific_heat_capacity: config.specific_heat_capacity,
        thermal_conductivity: config.thermal_conductivity,
        flow_stress_coefficients,
    })
}

fn positive(shape: ProfileShape, name: &str, value: Option<f64>) -> EngineResult<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => Err(EngineError::InvalidProfile {
            shape: shape.to_string(),
            reason: format!("{} 必须大于 0, 实际 {}", name, v),
        }),
        None => Err(EngineError::InvalidProfile {
            shape: shape.to_string(),
            reason: format!("缺少 {}", name),
        }),
    }
}

fn corner_radius(shape: ProfileShape, value: Option<f64>) -> EngineResult<f64> {
    let radius = value.unwrap_or(0.0);
    if !radius.is_finite() || radius < 0.0 {
        return Err(EngineError::InvalidProfile {
            shape: shape.to_string(),
            reason: format!("corner_radius 不得为负, 实际 {}", radius),
        });
    }
    Ok(radius)
}

/// 流动应力系数: 至少一个非空且非零的系数时才挂接
fn flow_stress_coefficients(config: &InProfileConfig) -> Option<FlowStressCoefficients> {
    let params = config.flow_stress_params.as_ref()?;

    let coefficients: BTreeMap<String, f64> = params
        .iter()
        .filter_map(|(name, value)| value.map(|v| (name.clone(), v)))
        .collect();

    if !coefficients.values().any(|v| *v != 0.0) {
        return None;
    }

    let model = config
        .flow_stress_model
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_FLOW_STRESS_MODEL)
        .to_string();

    Some(FlowStressCoefficients {
        model,
        coefficients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(diameter: f64) -> InProfileConfig {
        InProfileConfig {
            shape: "round".to_string(),
            diameter: Some(diameter),
            temperature: Some(1473.0),
            ..InProfileConfig::default()
        }
    }

    #[test]
    fn test_round_profile() {
        let profile = build_profile(&round(0.05)).unwrap();
        assert_eq!(profile.shape(), ProfileShape::Round);
        assert_eq!(profile.geometry, ProfileGeometry::Round { diameter: 0.05 });
        assert_eq!(profile.temperature, 1473.0);
        assert_eq!(profile.strain, 0.0);
        assert!(profile.flow_stress_coefficients.is_none());
    }

    #[test]
    fn test_shape_tag_is_case_insensitive_and_ignores_foreign_fields() {
        let config = InProfileConfig {
            shape: "Box".to_string(),
            height: Some(0.04),
            width: Some(0.06),
            diameter: Some(1.0),
            temperature: Some(1300.0),
            ..InProfileConfig::default()
        };
        let profile = build_profile(&config).unwrap();
        assert_eq!(
            profile.geometry,
            ProfileGeometry::Box {
                height: 0.04,
                width: 0.06,
                corner_radius: 0.0
            }
        );
    }

    #[test]
    fn test_unknown_shape() {
        let config = InProfileConfig {
            shape: "triangle".to_string(),
            ..round(0.05)
        };
        let err = build_profile(&config).unwrap_err();
        assert!(matches!(err, EngineError::UnknownProfileShape(tag) if tag == "triangle"));
    }

    #[test]
    fn test_missing_primary_dimension() {
        let config = InProfileConfig {
            shape: "square".to_string(),
            temperature: Some(1400.0),
            ..InProfileConfig::default()
        };
        let err = build_profile(&config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidProfile { .. }));
    }

    #[test]
    fn test_non_positive_temperature() {
        let config = InProfileConfig {
            temperature: Some(0.0),
            ..round(0.05)
        };
        assert!(matches!(
            build_profile(&config),
            Err(EngineError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_flow_stress_attached_only_when_meaningful() {
        let mut params = BTreeMap::new();
        params.insert("a".to_string(), Some(0.0));
        params.insert("m1".to_string(), None);
        let config = InProfileConfig {
            flow_stress_params: Some(params.clone()),
            ..round(0.05)
        };
        assert!(build_profile(&config).unwrap().flow_stress_coefficients.is_none());

        params.insert("a".to_string(), Some(3268.49));
        let config = InProfileConfig {
            flow_stress_params: Some(params),
            ..round(0.05)
        };
        let coefficients = build_profile(&config)
            .unwrap()
            .flow_stress_coefficients
            .unwrap();
        assert_eq!(coefficients.model, "freiberg");
        assert_eq!(coefficients.coefficients.get("a"), Some(&3268.49));
        assert!(!coefficients.coefficients.contains_key("m1"));
    }
}
