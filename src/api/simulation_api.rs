// ==========================================
// 轧制道次仿真编排系统 - 仿真 API
// ==========================================
// 职责: 请求解析、默认值加载、阻塞求解调度、响应信封
// 说明: 编排核心是同步的;API 把每次仿真放到独立的阻塞工作线程,
//       批量请求由调用方并发（每个请求一个工作线程）
// ==========================================

use crate::api::dto::SimulationResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::config::{SimulationConfigReader, SimulationDefaults};
use crate::domain::config::{InProfileConfig, ProcessUnitConfig, SimulationRequest};
use crate::domain::report::SimulationReport;
use crate::engine::orchestrator::SimulationOrchestrator;
use crate::engine::preview::{preview_in_profile, preview_roll_pass, ProfilePreview, RollPassPreview};
use crate::engine::solver::{ContourProvider, ProcessSolver};
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument, Span};
use uuid::Uuid;

// ==========================================
// SimulationApi - 仿真API
// ==========================================
pub struct SimulationApi<S, G>
where
    S: ProcessSolver + 'static,
    G: ContourProvider,
{
    solver: Arc<S>,
    geometry: Arc<G>,
    config: Arc<dyn SimulationConfigReader>,
}

impl<S, G> SimulationApi<S, G>
where
    S: ProcessSolver + 'static,
    G: ContourProvider,
{
    /// 创建新的 SimulationApi 实例
    ///
    /// # 参数
    /// - solver: 外部求解器
    /// - geometry: 几何协作者（轮廓预览）
    /// - config: 默认值读取器（通常为 ConfigManager）
    pub fn new(
        solver: Arc<S>,
        geometry: Arc<G>,
        config: Arc<dyn SimulationConfigReader>,
    ) -> Self {
        Self {
            solver,
            geometry,
            config,
        }
    }

    /// 使用固定默认值创建（不读配置库）
    pub fn with_defaults(solver: Arc<S>, geometry: Arc<G>, defaults: SimulationDefaults) -> Self {
        Self::new(solver, geometry, Arc::new(defaults))
    }

    async fn load_defaults(&self) -> ApiResult<SimulationDefaults> {
        self.config
            .load_defaults()
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// 执行一次仿真（强类型请求）
    ///
    /// # 返回
    /// - Ok(SimulationReport): 仿真报告
    /// - Err(ApiError): 配置、校验、求解任一环节失败
    pub async fn run(&self, request: SimulationRequest) -> ApiResult<SimulationReport> {
        let defaults = self.load_defaults().await?;
        let solver = Arc::clone(&self.solver);
        let span = Span::current();

        let result = tokio::task::spawn_blocking(move || {
            let _guard = span.enter();
            SimulationOrchestrator::new(solver, defaults).run(&request)
        })
        .await
        .map_err(|e| ApiError::InternalError(format!("仿真任务执行失败: {}", e)))?;

        result.map_err(ApiError::from)
    }

    /// 执行一次仿真（原始 JSON 请求,返回响应信封）
    ///
    /// 请求原样回显在 input_data 中;失败时 errors 为错误消息
    pub async fn simulate(&self, input: Value) -> SimulationResponse {
        let request_id = Uuid::new_v4();
        let span = info_span!("simulate", request_id = %request_id);

        async move {
            let request: SimulationRequest = match serde_json::from_value(input.clone()) {
                Ok(request) => request,
                Err(e) => {
                    let err = ApiError::InvalidInput(format!("请求格式错误: {}", e));
                    warn!(error = %err, "仿真请求解析失败");
                    return SimulationResponse::failed(input, err.to_string());
                }
            };

            match self.run(request).await {
                Ok(report) => {
                    info!(units = report.units, "仿真成功");
                    SimulationResponse::succeeded(input, report)
                }
                Err(err) => {
                    warn!(error = %err, "仿真失败");
                    SimulationResponse::failed(input, err.to_string())
                }
            }
        }
        .instrument(span)
        .await
    }

    /// 批量仿真（每个请求独立执行,响应按请求顺序返回）
    pub async fn simulate_batch(&self, inputs: Vec<Value>) -> Vec<SimulationResponse> {
        info!(requests = inputs.len(), "开始批量仿真");
        join_all(inputs.into_iter().map(|input| self.simulate(input))).await
    }

    /// 单道次孔型轮廓预览
    pub async fn roll_pass_contour(&self, config: Value) -> ApiResult<RollPassPreview> {
        let config: ProcessUnitConfig = serde_json::from_value(config)
            .map_err(|e| ApiError::InvalidInput(format!("机组配置格式错误: {}", e)))?;
        let defaults = self.load_defaults().await?;

        Ok(preview_roll_pass(&config, &defaults, self.geometry.as_ref())?)
    }

    /// 来料断面轮廓预览
    pub fn in_profile_contour(&self, config: Value) -> ApiResult<ProfilePreview> {
        let config: InProfileConfig = serde_json::from_value(config)
            .map_err(|e| ApiError::InvalidInput(format!("来料断面配置格式错误: {}", e)))?;

        Ok(preview_in_profile(&config, self.geometry.as_ref())?)
    }
}
