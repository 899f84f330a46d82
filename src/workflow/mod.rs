//! 流程层
//!
//! 定义"一个标识符"的完整处理：解析输入行 → 访问外部服务 → 产出一条结果记录。
//! 写入与计数由编排层统一完成，保证每个标识符恰好一条记录、一次计数。

pub mod articlemeta_flow;
pub mod doi_check_flow;

pub use articlemeta_flow::ArticleMetaFlow;
pub use doi_check_flow::DoiCheckFlow;

use crate::models::CsvRecord;
use std::future::Future;

/// 单个标识符的处理流程
pub trait IdentifierFlow: Send + Sync + 'static {
    type Record: CsvRecord + Send + 'static;

    /// 日志中显示的流程名称
    fn name(&self) -> &'static str;

    /// 处理一行输入，总是产出恰好一条记录
    fn process(&self, line: String) -> impl Future<Output = Self::Record> + Send;
}
