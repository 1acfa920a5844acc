// ==========================================
// 轧制道次仿真编排系统 - 机组序列校验器
// ==========================================
// 职责: 在构建前检查原始配置列表的结构完整性
// 输入: passDesignData（原始 JSON 列表）
// 输出: ValidationReport（逐条原因,带机组序号）
// 红线: 只读,不修改、不过滤输入
// ==========================================

use crate::domain::types::UnitKind;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 单条校验问题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 配置在列表中的位置（0 起;列表级问题为 None）
    pub index: Option<usize>,
    pub reason: String,
}

impl ValidationIssue {
    fn list(reason: impl Into<String>) -> Self {
        Self {
            index: None,
            reason: reason.into(),
        }
    }

    fn unit(index: usize, reason: impl fmt::Display) -> Self {
        Self {
            index: Some(index),
            reason: format!("Unit {}: {}", index + 1, reason),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// 校验结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// 合并后的原因（"; " 分隔）
    pub fn reason(&self) -> String {
        self.issues
            .iter()
            .map(|issue| issue.reason.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// 转为 Result（存在问题即 ValidationFailure）
    pub fn into_result(self) -> EngineResult<()> {
        if self.is_ok() {
            return Ok(());
        }
        Err(EngineError::ValidationFailure {
            reason: self.reason(),
            issues: self.issues,
        })
    }
}

// ==========================================
// SequenceValidator - 序列校验器
// ==========================================
pub struct SequenceValidator;

impl SequenceValidator {
    /// 校验配置列表
    ///
    /// 规则:
    /// 1. 列表不得为空
    /// 2. 每条配置须为对象且带 type
    /// 3. type 须为已知机组类型
    /// 4. 二辊道次须带 grooveType、非空 groove 参数,且 r1 > 0
    pub fn validate(configs: &[Value]) -> ValidationReport {
        let mut issues = Vec::new();

        if configs.is_empty() {
            issues.push(ValidationIssue::list("No Units defined"));
            return ValidationReport { issues };
        }

        for (index, entry) in configs.iter().enumerate() {
            let object = match entry.as_object() {
                Some(object) => object,
                None => {
                    issues.push(ValidationIssue::unit(index, "entry is not an object"));
                    continue;
                }
            };

            let type_tag = match object.get("type").and_then(Value::as_str) {
                Some(tag) if !tag.trim().is_empty() => tag,
                _ => {
                    issues.push(ValidationIssue::unit(index, "type is missing"));
                    continue;
                }
            };

            let kind = match UnitKind::from_tag(type_tag) {
                Some(kind) => kind,
                None => {
                    issues.push(ValidationIssue::unit(
                        index,
                        format!("unknown unit type '{}'", type_tag),
                    ));
                    continue;
                }
            };

            if kind == UnitKind::TwoRollPass {
                Self::check_two_roll_pass(index, object, &mut issues);
            }
        }

        ValidationReport { issues }
    }

    fn check_two_roll_pass(
        index: usize,
        object: &serde_json::Map<String, Value>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let has_groove_type = object
            .get("grooveType")
            .and_then(Value::as_str)
            .map(|tag| !tag.trim().is_empty())
            .unwrap_or(false);
        if !has_groove_type {
            issues.push(ValidationIssue::unit(index, "grooveType is missing"));
        }

        let groove = match object.get("groove").and_then(Value::as_object) {
            Some(groove) if !groove.is_empty() => groove,
            _ => {
                issues.push(ValidationIssue::unit(index, "groove parameters are missing"));
                return;
            }
        };

        let r1_positive = groove
            .get("r1")
            .and_then(Value::as_f64)
            .map(|r1| r1 > 0.0)
            .unwrap_or(false);
        if !r1_positive {
            issues.push(ValidationIssue::unit(
                index,
                "groove parameter r1 must be greater than 0",
            ));
        }
    }
}
