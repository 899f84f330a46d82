//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::orchestrator::{BatchSummary, PipelineKind};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 默认级别 `info`，可通过 `RUST_LOG` 覆盖；重复调用不会 panic。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(kind: PipelineKind, config: &Config, milestone: u64) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {:?} 流水线", kind);
    info!("📊 最大并发数: {}", config.limit);
    info!("📈 里程碑间隔: {}", milestone);
    info!("{}", "=".repeat(60));
}

/// 记录输入加载信息
pub fn log_lines_loaded(total: usize) {
    info!("✓ 输入行数: {}", total);
}

/// 记录任务提交信息
pub fn log_tasks_submitted(flow: &str, total: usize, limit: usize) {
    info!("📋 [{}] 已注册任务数量: {} (并发上限 {})", flow, total, limit);
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &BatchSummary, counted: u64, output: &Path) {
    info!("{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{} (计数 {})", summary.completed, summary.total, counted);
    info!("❌ 失败: {}", summary.failed);
    info!("{}", "=".repeat(60));
    info!("结果已追加至: {}", output.display());
}
