// ==========================================
// 轧制道次仿真编排系统 - 道次结果表 CSV 导出
// ==========================================
// 形态: 转置表,每列一个轧制道次
//   Parameter, K1, K2, ...
//   Gap, 0.0100, -, ...
// 规则: 数值保留 4 位小数;不适用于该道次类型的参数写 "-"
// ==========================================

use crate::domain::report::{PassResult, RollPassMechanics, SimulationReport};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("报告中没有轧制道次,无可导出的数据")]
    NoRollPasses,

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 导出行名（按输出顺序）
pub const ROLL_PASS_TABLE_ROWS: [&str; 14] = [
    "Gap",
    "Inscribed Circle Diameter",
    "Bar Height",
    "Bar Width",
    "Bar Area",
    "Reduction",
    "Roll Radius",
    "Working Radius",
    "Entry Temperature",
    "Roll Force",
    "Roll Torque",
    "Power",
    "Flow Stress",
    "Filling Ratio",
];

// 二辊道次无内切圆直径,三辊道次无辊缝
fn row_value(row: &str, pass: &PassResult, m: &RollPassMechanics) -> Option<f64> {
    match row {
        "Gap" => match m.inscribed_circle_diameter {
            Some(_) => None,
            None => Some(m.gap),
        },
        "Inscribed Circle Diameter" => m.inscribed_circle_diameter,
        "Bar Height" => Some(pass.out_height),
        "Bar Width" => Some(pass.out_width),
        "Bar Area" => Some(pass.out_cross_section_area),
        "Reduction" => Some(m.reduction),
        "Roll Radius" => Some(m.nominal_radius),
        "Working Radius" => Some(m.working_radius),
        "Entry Temperature" => Some(pass.in_temperature),
        "Roll Force" => Some(m.roll_force),
        "Roll Torque" => Some(m.roll_torque),
        "Power" => Some(m.power),
        "Flow Stress" => m.out_flow_stress,
        "Filling Ratio" => Some(m.filling_ratio),
        _ => None,
    }
}

/// 导出轧制道次结果表
///
/// # 参数
/// - report: 仿真报告（非轧制道次机组不出列）
/// - writer: 输出目标
///
/// # 返回
/// - Err(NoRollPasses): 报告中没有轧制道次
pub fn export_roll_pass_table_csv<W: Write>(
    report: &SimulationReport,
    writer: W,
) -> Result<(), OutputError> {
    let passes: Vec<(&PassResult, &RollPassMechanics)> = report.roll_passes().collect();
    if passes.is_empty() {
        return Err(OutputError::NoRollPasses);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Parameter".to_string()];
    header.extend(passes.iter().map(|(pass, _)| pass.label.clone()));
    csv_writer.write_record(&header)?;

    for row in ROLL_PASS_TABLE_ROWS {
        let mut record = vec![row.to_string()];
        record.extend(passes.iter().map(|(pass, mechanics)| {
            row_value(row, pass, mechanics)
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string())
        }));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    tracing::debug!(columns = passes.len(), "道次结果表导出完成");
    Ok(())
}
