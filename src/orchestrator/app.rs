//! 应用入口 - 编排层
//!
//! 负责启动期资源：读取输入、打开输出、构建 HTTP 客户端。
//! 这些步骤失败属于致命错误，直接返回；之后每个标识符的失败都不会传播到这里。

use crate::clients::{build_http_client, ArticleMetaClient, DoiOrgClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::RateLimitedExecutor;
use crate::models::load_lines;
use crate::orchestrator::batch_processor::{BatchProcessor, BatchSummary};
use crate::services::{CandidateResolver, ProbeClassifier, ProgressCounter, ResultSink};
use crate::utils::logging;
use crate::workflow::{ArticleMetaFlow, DoiCheckFlow, IdentifierFlow};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// 流水线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// 通过 doi.org 检查 DOI 是否存在
    Check,
    /// 从 ArticleMeta 提取 DOI
    Extract,
}

impl PipelineKind {
    /// 默认里程碑间隔
    pub fn default_milestone(&self) -> u64 {
        match self {
            PipelineKind::Check => 100,
            PipelineKind::Extract => 500,
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    kind: PipelineKind,
    input: PathBuf,
    output: PathBuf,
}

impl App {
    pub fn new(config: Config, kind: PipelineKind, input: PathBuf, output: PathBuf) -> Self {
        Self {
            config,
            kind,
            input,
            output,
        }
    }

    /// 运行整批处理
    pub async fn run(&self) -> AppResult<BatchSummary> {
        self.config.validate()?;
        let milestone = self.config.milestone_or(self.kind.default_milestone());
        logging::log_startup(self.kind, &self.config, milestone);

        let lines = load_lines(&self.input).await?;
        logging::log_lines_loaded(lines.len());

        let sink = Arc::new(ResultSink::open_append(
            &self.output,
            self.config.delimiter,
            self.config.null_placeholder.clone(),
        )?);

        if lines.is_empty() {
            warn!("⚠️ 输入为空，程序结束");
            return Ok(BatchSummary::default());
        }

        let http = build_http_client(&self.config)?;
        let executor = RateLimitedExecutor::new(self.config.limit);
        let progress = Arc::new(ProgressCounter::new(milestone));

        let summary = match self.kind {
            PipelineKind::Check => {
                let resolver_url = self.config.resolver_url()?;
                let resolver = CandidateResolver::new(
                    DoiOrgClient::new(http, resolver_url.clone()),
                    ProbeClassifier::new(&resolver_url),
                    self.config.generic_doi_prefix.clone(),
                );
                let flow = DoiCheckFlow::new(resolver, self.config.delimiter);
                run_batch(flow, executor, progress.clone(), lines, sink).await
            }
            PipelineKind::Extract => {
                let client = ArticleMetaClient::new(
                    http,
                    self.config.articlemeta_url()?,
                    self.config.collection.clone(),
                );
                let flow = ArticleMetaFlow::new(client, self.config.delimiter);
                run_batch(flow, executor, progress.clone(), lines, sink).await
            }
        };

        logging::print_final_stats(&summary, progress.count(), &self.output);
        Ok(summary)
    }
}

async fn run_batch<F: IdentifierFlow>(
    flow: F,
    executor: RateLimitedExecutor,
    progress: Arc<ProgressCounter>,
    lines: Vec<String>,
    sink: Arc<ResultSink<File>>,
) -> BatchSummary {
    BatchProcessor::new(flow, executor, progress)
        .run(lines, sink)
        .await
}
