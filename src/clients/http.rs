use crate::config::Config;
use crate::error::AppResult;
use reqwest::Client;
use std::time::Duration;

/// 构建共享的 HTTP 客户端
///
/// 客户端内部是连接池，可被所有任务并发只读使用，无需额外加锁。
pub fn build_http_client(config: &Config) -> AppResult<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());

    if config.request_timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
    }

    Ok(builder.build()?)
}
