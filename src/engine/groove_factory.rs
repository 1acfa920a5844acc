// ==========================================
// 轧制道次仿真编排系统 - 孔型工厂
// ==========================================
// 职责: 孔型标签 + 参数表 → 孔型值对象
// 输入: grooveType 标签、groove 参数表（值可为 null）
// 输出: Groove / UnknownGrooveKind / GrooveConstruction
// 红线: 纯映射,无副作用
// ==========================================

use crate::domain::config::GrooveParamMap;
use crate::domain::groove::{is_angle_param, Groove, GrooveKind, GrooveParameters, PAD_ANGLE};
use crate::engine::error::{EngineError, EngineResult};
use tracing::debug;

/// 构建孔型
///
/// # 参数
/// - type_tag: 孔型类型标签（如 RoundGroove）
/// - params: 参数表;值为 null 的参数先剔除,由孔型默认值生效
///
/// # 返回
/// - Ok(Groove): 参数满足该孔型的约束
/// - Err(UnknownGrooveKind): 标签未注册
/// - Err(GrooveConstruction): 参数不满足约束
pub fn build_groove(type_tag: &str, params: &GrooveParamMap) -> EngineResult<Groove> {
    let kind = GrooveKind::from_tag(type_tag.trim())
        .ok_or_else(|| EngineError::UnknownGrooveKind(type_tag.to_string()))?;
    let schema = kind.schema();

    let construction_error = |reason: String| EngineError::GrooveConstruction {
        kind: kind.to_string(),
        reason,
    };

    let mut values = GrooveParameters::default();
    let mut dropped = 0usize;

    for (name, value) in params {
        let value = match value {
            Some(v) => *v,
            None => {
                dropped += 1;
                continue;
            }
        };

        if !value.is_finite() {
            return Err(construction_error(format!("参数 {} 不是有限数值", name)));
        }

        if name == PAD_ANGLE {
            values.pad_angle = value;
            continue;
        }

        if !schema.accepts(name) {
            return Err(construction_error(format!("参数 {} 不适用于该孔型", name)));
        }

        if value < 0.0 && !is_angle_param(name) {
            return Err(construction_error(format!(
                "参数 {} 不得为负: {}",
                name, value
            )));
        }

        match values.slot_mut(name) {
            Some(slot) => *slot = Some(value),
            None => return Err(construction_error(format!("未知参数: {}", name))),
        }
    }

    // 必填参数
    for name in schema.required {
        if values.value(name).is_none() {
            return Err(construction_error(format!("缺少必填参数 {}", name)));
        }
    }

    // 选择组
    for group in schema.choices {
        let given: Vec<&str> = group
            .among
            .iter()
            .copied()
            .filter(|name| values.value(name).is_some())
            .collect();
        if given.len() != group.count {
            return Err(construction_error(format!(
                "参数 [{}] 须恰好给出 {} 个, 实际 {} 个",
                group.among.join(", "),
                group.count,
                given.len()
            )));
        }
    }

    // 互斥参数
    for (a, b) in schema.exclusive {
        if values.value(a).is_some() && values.value(b).is_some() {
            return Err(construction_error(format!("参数 {} 与 {} 不能同时给出", a, b)));
        }
    }

    debug!(groove_type = %kind, dropped, "孔型构建完成");

    Ok(Groove {
        kind,
        params: values,
    })
}
