// ==========================================
// 轧制道次仿真编排系统 - 机组序列构建器
// ==========================================
// 职责: 原始配置列表 → 有序机组序列
// 红线: 保持输入顺序（顺序即物理顺序）
// 说明: type 缺失或未注册的条目不构建,记录在 skipped 中
// ==========================================

use crate::config::SimulationDefaults;
use crate::domain::config::ProcessUnitConfig;
use crate::domain::types::UnitKind;
use crate::domain::unit::ProcessSequence;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::unit_factory::UnitFactory;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// 被跳过的配置条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub index: usize,
    /// 原始 type 标签（缺失为 None）
    pub unit_type: Option<String>,
}

/// 构建结果
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltSequence {
    pub sequence: ProcessSequence,
    pub skipped: Vec<SkippedEntry>,
}

// ==========================================
// SequenceBuilder - 序列构建器
// ==========================================
pub struct SequenceBuilder {
    unit_factory: UnitFactory,
}

impl SequenceBuilder {
    pub fn new(defaults: SimulationDefaults) -> Self {
        Self {
            unit_factory: UnitFactory::new(defaults),
        }
    }

    /// 按序构建机组序列
    ///
    /// # 返回
    /// - Ok(BuiltSequence): 已知类型全部构建成功
    /// - Err: 任一已知类型条目解析或构建失败（不产生部分序列）
    pub fn build_sequence(&self, configs: &[Value]) -> EngineResult<BuiltSequence> {
        let mut units = Vec::with_capacity(configs.len());
        let mut skipped = Vec::new();

        for (index, entry) in configs.iter().enumerate() {
            let type_tag = entry.get("type").and_then(Value::as_str);

            if type_tag.and_then(UnitKind::from_tag).is_none() {
                warn!(
                    unit_index = index,
                    unit_type = type_tag.unwrap_or("<missing>"),
                    "未知机组类型,跳过"
                );
                skipped.push(SkippedEntry {
                    index,
                    unit_type: type_tag.map(str::to_string),
                });
                continue;
            }

            let config: ProcessUnitConfig =
                serde_json::from_value(entry.clone()).map_err(|e| EngineError::InvalidUnitConfig {
                    index,
                    reason: e.to_string(),
                })?;

            units.push(self.unit_factory.build_unit(index, &config)?);
        }

        let sequence = ProcessSequence::new(units);
        debug!(
            units = sequence.len(),
            skipped = skipped.len(),
            "机组序列构建完成"
        );

        Ok(BuiltSequence { sequence, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> SequenceBuilder {
        SequenceBuilder::new(SimulationDefaults::default())
    }

    fn round_pass(label: &str) -> Value {
        json!({
            "type": "TwoRollPass",
            "label": label,
            "grooveType": "RoundGroove",
            "groove": {"r1": 0.01, "r2": 0.02, "depth": 0.005},
            "gap": 0.01,
            "velocityValue": 1.0
        })
    }

    #[test]
    fn test_order_is_preserved() {
        let configs = vec![
            round_pass("K1"),
            json!({"type": "Transport", "label": "T1", "transportValue": 2.0}),
            json!({"type": "CoolingPipe", "label": "C1", "coolingValue": 3.0}),
            round_pass("K2"),
        ];

        let built = builder().build_sequence(&configs).unwrap();
        let labels: Vec<&str> = built.sequence.iter().filter_map(|u| u.label()).collect();
        assert_eq!(labels, vec!["K1", "T1", "C1", "K2"]);
        assert!(built.skipped.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_excluded() {
        let configs = vec![
            round_pass("K1"),
            json!({"type": "UnknownKind"}),
            json!({"label": "no type"}),
        ];

        let built = builder().build_sequence(&configs).unwrap();
        assert_eq!(built.sequence.len(), 1);
        assert_eq!(
            built.skipped,
            vec![
                SkippedEntry {
                    index: 1,
                    unit_type: Some("UnknownKind".to_string())
                },
                SkippedEntry {
                    index: 2,
                    unit_type: None
                },
            ]
        );
    }

    #[test]
    fn test_malformed_known_entry_fails() {
        let configs = vec![json!({"type": "Transport", "transportValue": "long"})];
        let err = builder().build_sequence(&configs).unwrap_err();
        assert!(matches!(err, EngineError::InvalidUnitConfig { index: 0, .. }));
    }

    #[test]
    fn test_groove_errors_abort_the_build() {
        let configs = vec![json!({
            "type": "TwoRollPass",
            "grooveType": "HexGroove",
            "groove": {"r1": 0.01}
        })];
        let err = builder().build_sequence(&configs).unwrap_err();
        assert!(matches!(err, EngineError::UnknownGrooveKind(_)));
    }
}
