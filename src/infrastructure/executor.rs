//! 限流执行器 - 基础设施层
//!
//! 持有唯一的 Semaphore，只暴露"在上限内执行"的能力

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// 限流执行器
///
/// 职责：
/// - 保证同时运行的工作单元不超过 `limit`
/// - 工作单元结束（无论成功、失败还是 panic）立即归还许可
/// - 不重试、不汇总结果、不认识 DOI
#[derive(Clone, Debug)]
pub struct RateLimitedExecutor {
    semaphore: Arc<Semaphore>,
    limit: usize,
}

impl RateLimitedExecutor {
    /// 创建执行器，`limit` 至少为 1
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// 并发上限
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 当前空闲的许可数量
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// 等待许可后执行工作单元
    ///
    /// 有空闲许可时立即开始，否则等待其他单元归还；不保证等待顺序。
    pub async fn run<F>(&self, work: F) -> F::Output
    where
        F: Future,
    {
        // semaphore 由执行器独占且从不 close
        let _permit = self
            .semaphore
            .acquire()
            .await
            .expect("执行器的 semaphore 不会被关闭");
        work.await
    }

    /// 提交为独立任务，任务内部先获取许可再执行
    ///
    /// 某个任务失败或 panic 不会影响其他任务。
    pub fn spawn<F>(&self, work: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let executor = self.clone();
        tokio::spawn(async move { executor.run(work).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    async fn track_in_flight(in_flight: Arc<AtomicUsize>, peak: Arc<AtomicUsize>) {
        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;
        in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    #[tokio::test]
    async fn never_exceeds_limit() {
        let executor = RateLimitedExecutor::new(3);
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..30)
            .map(|_| executor.spawn(track_in_flight(in_flight.clone(), peak.clone())))
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
        assert_eq!(executor.available(), 3);
    }

    #[tokio::test]
    async fn zero_limit_is_clamped_to_one() {
        let executor = RateLimitedExecutor::new(0);
        assert_eq!(executor.limit(), 1);
        assert_eq!(executor.run(async { 7 }).await, 7);
    }

    #[tokio::test]
    async fn failed_unit_releases_capacity_and_leaves_others_alone() {
        let executor = RateLimitedExecutor::new(1);

        let failing = executor.spawn(async { Err::<u32, &str>("boom") });
        let panicking = executor.spawn(async {
            panic!("unit exploded");
        });
        let healthy = executor.spawn(async { Ok::<u32, &str>(1) });

        assert_eq!(failing.await.unwrap(), Err("boom"));
        assert!(panicking.await.is_err());
        assert_eq!(healthy.await.unwrap(), Ok(1));
        assert_eq!(executor.available(), 1);
    }

    #[test]
    fn run_starts_immediately_when_capacity_is_free() {
        let executor = RateLimitedExecutor::new(2);
        let value = tokio_test::block_on(executor.run(async { "done" }));
        assert_eq!(value, "done");
    }
}
