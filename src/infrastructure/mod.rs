//! 基础设施层
//!
//! 持有稀缺资源（并发许可），只暴露能力，不认识任何业务概念。

pub mod executor;

pub use executor::RateLimitedExecutor;
