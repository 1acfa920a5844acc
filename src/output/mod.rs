// ==========================================
// 轧制道次仿真编排系统 - 结果导出
// ==========================================

pub mod csv_export;

pub use csv_export::{export_roll_pass_table_csv, OutputError, ROLL_PASS_TABLE_ROWS};
