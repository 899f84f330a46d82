//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载输入、打开输出、构建 HTTP 客户端
//! - 按流水线类型组装流程
//! - 输出全局统计信息
//!
//! ### `batch_processor` - 批量处理器
//! - 每个标识符一个任务，全部提交给限流执行器
//! - 任务内：流程 → 写一条记录 → 计数一次
//! - 等待整批任务完成后才返回
//!
//! ## 层次关系
//!
//! ```text
//! app (选择流水线)
//!     ↓
//! batch_processor (处理 Vec<line>)
//!     ↓
//! workflow::IdentifierFlow (处理单个标识符)
//!     ↓
//! services (能力层：resolver / sink / progress)
//!     ↓
//! infrastructure / clients
//! ```

pub mod app;
pub mod batch_processor;

pub use app::{App, PipelineKind};
pub use batch_processor::{BatchProcessor, BatchSummary};
