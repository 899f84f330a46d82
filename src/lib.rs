//! # DOI Checker
//!
//! 批量把文章 PID 解析为 DOI 的命令行工具：读取标识符列表，限流并发访问外部服务，
//! 对每次响应分类，并为每个标识符追加一行结果。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有并发许可，只暴露"在上限内执行"的能力
//! - `RateLimitedExecutor` - 基于 Semaphore 的限流执行器
//!
//! ### ② 客户端（Clients）
//! - `DoiOrgClient` - 访问 doi.org，只返回状态码和最终 URL
//! - `ArticleMetaClient` - 按 PID 查询 ArticleMeta 中登记的 DOI
//!
//! ### ③ 业务能力层（Services）
//! - `ProbeClassifier` - 响应分类（200/301/302、5xx、跳转后 404）
//! - `CandidateResolver` - 按优先级逐个探测候选，第一个终止结果胜出
//! - `ResultSink` - 整行互斥追加结果
//! - `ProgressCounter` - 进度计数与里程碑日志
//!
//! ### ④ 流程层（Workflow）
//! - `DoiCheckFlow` / `ArticleMetaFlow` - 一个标识符的完整处理
//!
//! ### ⑤ 编排层（Orchestration）
//! - `BatchProcessor` - 一个标识符一个任务，等待整批完成
//! - `App` - 启动期资源与流水线选择

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ArticleMetaError, ConfigError, ProbeError};
pub use infrastructure::RateLimitedExecutor;
pub use models::{IdentifierRecord, ResolutionResult};
pub use orchestrator::{App, BatchProcessor, BatchSummary, PipelineKind};
pub use services::{CandidateResolver, ProbeClassifier, ProgressCounter, ResultSink};
pub use workflow::{ArticleMetaFlow, DoiCheckFlow, IdentifierFlow};
