// ==========================================
// 轧制道次仿真编排系统 - 配置层
// ==========================================
// 职责: 仿真默认值管理（校验策略、输送段热边界、缺省孔型）
// 存储: config_kv 表（scope_id = 'global'）
// ==========================================

pub mod config_manager;
pub mod defaults;
pub mod simulation_config_trait;

// 重导出核心配置类型
pub use config_manager::{config_keys, get_default_db_path, ConfigManager};
pub use defaults::SimulationDefaults;
pub use simulation_config_trait::SimulationConfigReader;
