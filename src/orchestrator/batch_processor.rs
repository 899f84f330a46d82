//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **一次性输入**：接收已经完整读入内存的标识符列表
//! 2. **并发控制**：每个标识符一个任务，由 `RateLimitedExecutor` 限制同时在途的数量
//! 3. **结果记录**：任务结束时写恰好一条记录、计数恰好一次
//! 4. **整批等待**：所有任务结束前不返回，没有取消路径
//!
//! 单个任务的失败（写入失败、panic）只记入统计，不影响其他任务。

use crate::infrastructure::RateLimitedExecutor;
use crate::services::{ProgressCounter, ResultSink};
use crate::utils::logging;
use crate::workflow::IdentifierFlow;
use futures::future::join_all;
use std::io::Write;
use std::sync::Arc;
use tracing::error;

/// 整批处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// 输入标识符数量
    pub total: usize,
    /// 成功写入记录的数量
    pub completed: usize,
    /// 写入失败或任务崩溃的数量
    pub failed: usize,
}

/// 批量处理器
pub struct BatchProcessor<F> {
    flow: Arc<F>,
    executor: RateLimitedExecutor,
    progress: Arc<ProgressCounter>,
}

impl<F: IdentifierFlow> BatchProcessor<F> {
    pub fn new(flow: F, executor: RateLimitedExecutor, progress: Arc<ProgressCounter>) -> Self {
        Self {
            flow: Arc::new(flow),
            executor,
            progress,
        }
    }

    pub fn progress(&self) -> &ProgressCounter {
        &self.progress
    }

    /// 处理整批标识符
    ///
    /// 输入为空时不发起任何网络请求，直接返回。
    pub async fn run<W>(&self, lines: Vec<String>, sink: Arc<ResultSink<W>>) -> BatchSummary
    where
        W: Write + Send + 'static,
    {
        let total = lines.len();
        let mut summary = BatchSummary {
            total,
            ..Default::default()
        };

        if lines.is_empty() {
            return summary;
        }

        logging::log_tasks_submitted(self.flow.name(), total, self.executor.limit());

        let handles: Vec<_> = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let flow = self.flow.clone();
                let sink = sink.clone();
                let progress = self.progress.clone();

                let handle = self.executor.spawn(async move {
                    let record = flow.process(line).await;
                    match sink.append(&record) {
                        Ok(()) => {
                            progress.increment();
                            true
                        }
                        Err(e) => {
                            error!("[第 {} 行] ❌ 结果写入失败: {}", index + 1, e);
                            false
                        }
                    }
                });
                (index, handle)
            })
            .collect();

        let (indices, handles): (Vec<_>, Vec<_>) = handles.into_iter().unzip();

        for (index, joined) in indices.into_iter().zip(join_all(handles).await) {
            match joined {
                Ok(true) => summary.completed += 1,
                Ok(false) => summary.failed += 1,
                Err(e) => {
                    error!("[第 {} 行] 任务执行失败: {}", index + 1, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
