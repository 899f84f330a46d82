//! 进度计数器

use std::sync::{Mutex, PoisonError};
use tracing::info;

/// 一次计数的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub count: u64,
    pub milestone: bool,
}

/// 全局进度计数器
///
/// 每个完成的标识符恰好调用一次 `increment`；计数为里程碑的倍数时输出一条日志。
/// 递增在互斥锁内完成，不会丢失计数，也不会重复或漏报里程碑。
#[derive(Debug)]
pub struct ProgressCounter {
    count: Mutex<u64>,
    milestone: u64,
}

impl ProgressCounter {
    pub fn new(milestone: u64) -> Self {
        Self {
            count: Mutex::new(0),
            milestone: milestone.max(1),
        }
    }

    pub fn increment(&self) -> Tick {
        let count = {
            let mut guard = self.count.lock().unwrap_or_else(PoisonError::into_inner);
            *guard += 1;
            *guard
        };

        let milestone = count % self.milestone == 0;
        if milestone {
            info!("📊 已处理文章数量: {}", count);
        }

        Tick { count, milestone }
    }

    pub fn count(&self) -> u64 {
        *self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn milestone(&self) -> u64 {
        self.milestone
    }
}
