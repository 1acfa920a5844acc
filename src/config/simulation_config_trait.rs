// ==========================================
// 轧制道次仿真编排系统 - 仿真配置读取 Trait
// ==========================================
// 职责: 定义仿真所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含求解逻辑
// ==========================================

use crate::config::defaults::SimulationDefaults;
use crate::domain::types::ValidationPolicy;
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// SimulationConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait SimulationConfigReader: Send + Sync {
    /// 获取校验策略
    ///
    /// # 默认值
    /// - STRICT
    async fn get_validation_policy(&self) -> Result<ValidationPolicy, Box<dyn Error + Send + Sync>>;

    /// 获取输送段环境温度 (K)
    ///
    /// # 默认值
    /// - 293.15
    async fn get_transport_environment_temperature(
        &self,
    ) -> Result<f64, Box<dyn Error + Send + Sync>>;

    /// 获取输送段换热系数 (W·m⁻²·K⁻¹)
    ///
    /// # 默认值
    /// - 15.0
    async fn get_transport_heat_transfer_coefficient(
        &self,
    ) -> Result<f64, Box<dyn Error + Send + Sync>>;

    /// 获取缺省孔型类型
    ///
    /// # 默认值
    /// - BoxGroove
    async fn get_default_groove_type(&self) -> Result<String, Box<dyn Error + Send + Sync>>;

    /// 读取完整默认值快照
    async fn load_defaults(&self) -> Result<SimulationDefaults, Box<dyn Error + Send + Sync>> {
        Ok(SimulationDefaults {
            validation_policy: self.get_validation_policy().await?,
            transport_environment_temperature: self.get_transport_environment_temperature().await?,
            transport_heat_transfer_coefficient: self
                .get_transport_heat_transfer_coefficient()
                .await?,
            default_groove_type: self.get_default_groove_type().await?,
        })
    }
}

/// 固定默认值（不读库,用于测试与无配置库场景）
#[async_trait]
impl SimulationConfigReader for SimulationDefaults {
    async fn get_validation_policy(&self) -> Result<ValidationPolicy, Box<dyn Error + Send + Sync>> {
        Ok(self.validation_policy)
    }

    async fn get_transport_environment_temperature(
        &self,
    ) -> Result<f64, Box<dyn Error + Send + Sync>> {
        Ok(self.transport_environment_temperature)
    }

    async fn get_transport_heat_transfer_coefficient(
        &self,
    ) -> Result<f64, Box<dyn Error + Send + Sync>> {
        Ok(self.transport_heat_transfer_coefficient)
    }

    async fn get_default_groove_type(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        Ok(self.default_groove_type.clone())
    }
}
