// ==========================================
// 轧制道次仿真编排系统 - 配置管理器
// ==========================================
// 职责: 仿真默认值的加载、查询、覆写
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::defaults::{
    DEFAULT_ENVIRONMENT_TEMPERATURE_K, DEFAULT_GROOVE_TYPE, DEFAULT_HEAT_TRANSFER_COEFFICIENT,
};
use crate::config::simulation_config_trait::SimulationConfigReader;
use crate::db::{ensure_config_schema, open_sqlite_connection};
use crate::domain::groove::GrooveKind;
use crate::domain::types::ValidationPolicy;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

type ConfigResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（表不存在时自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA 并确保配置表存在（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
            ensure_config_schema(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 读取 global scope 的配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        self.get_config_value(key)
    }

    /// 写入 global scope 的配置值（UPSERT）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;

        Ok(())
    }

    /// 获取所有 global 配置（按 key 排序）
    pub fn get_config_snapshot(&self) -> ConfigResult<BTreeMap<String, String>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut snapshot = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            snapshot.insert(key, value);
        }
        Ok(snapshot)
    }

    /// 读取浮点配置，缺失或格式错误时回退默认值
    fn get_f64_or_default(&self, key: &str, default: f64) -> ConfigResult<f64> {
        let value = match self.get_config_value(key)? {
            Some(v) => v,
            None => return Ok(default),
        };

        match value.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(parsed),
            _ => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %value,
                    default,
                    "配置值格式错误，使用默认值"
                );
                Ok(default)
            }
        }
    }
}

// ==========================================
// SimulationConfigReader Trait 实现
// ==========================================
#[async_trait]
impl SimulationConfigReader for ConfigManager {
    async fn get_validation_policy(&self) -> ConfigResult<ValidationPolicy> {
        let value = match self.get_config_value(config_keys::VALIDATION_POLICY)? {
            Some(v) => v,
            None => return Ok(ValidationPolicy::Strict),
        };

        Ok(ValidationPolicy::parse(&value).unwrap_or_else(|| {
            tracing::warn!(
                config_key = config_keys::VALIDATION_POLICY,
                raw_value = %value,
                "校验策略配置无法识别，使用 STRICT"
            );
            ValidationPolicy::Strict
        }))
    }

    async fn get_transport_environment_temperature(&self) -> ConfigResult<f64> {
        self.get_f64_or_default(
            config_keys::TRANSPORT_ENVIRONMENT_TEMPERATURE,
            DEFAULT_ENVIRONMENT_TEMPERATURE_K,
        )
    }

    async fn get_transport_heat_transfer_coefficient(&self) -> ConfigResult<f64> {
        self.get_f64_or_default(
            config_keys::TRANSPORT_HEAT_TRANSFER_COEFFICIENT,
            DEFAULT_HEAT_TRANSFER_COEFFICIENT,
        )
    }

    async fn get_default_groove_type(&self) -> ConfigResult<String> {
        let value = match self.get_config_value(config_keys::DEFAULT_GROOVE_TYPE)? {
            Some(v) => v.trim().to_string(),
            None => return Ok(DEFAULT_GROOVE_TYPE.to_string()),
        };

        if GrooveKind::from_tag(&value).is_some() {
            Ok(value)
        } else {
            tracing::warn!(
                config_key = config_keys::DEFAULT_GROOVE_TYPE,
                raw_value = %value,
                "缺省孔型类型未注册，使用 BoxGroove"
            );
            Ok(DEFAULT_GROOVE_TYPE.to_string())
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 校验
    pub const VALIDATION_POLICY: &str = "validation_policy";

    // 输送段热边界
    pub const TRANSPORT_ENVIRONMENT_TEMPERATURE: &str = "transport_environment_temperature";
    pub const TRANSPORT_HEAT_TRANSFER_COEFFICIENT: &str = "transport_heat_transfer_coefficient";

    // 孔型
    pub const DEFAULT_GROOVE_TYPE: &str = "default_groove_type";
}

/// 获取默认配置库路径
///
/// 优先级: 环境变量 ROLLING_SIM_DB_PATH → 用户数据目录 → 当前目录
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("ROLLING_SIM_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./rolling_sim.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("rolling-sim");
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("rolling_sim.db");
        }
    }

    path.to_string_lossy().to_string()
}
