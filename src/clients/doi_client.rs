//! DOI 解析服务客户端
//!
//! 对 `{resolver}/{doi}` 发起一次 GET，只返回状态码和跳转后的最终 URL
use crate::error::ProbeError;
use crate::models::ProbeResponse;
use reqwest::{Client, Url};
use std::future::Future;
use tracing::debug;

/// 对单个 DOI 的一次网络探测
///
/// 实现必须可以被多个任务同时调用。
pub trait DoiProbe: Send + Sync + 'static {
    fn probe(&self, doi: &str) -> impl Future<Output = Result<ProbeResponse, ProbeError>> + Send;
}

/// doi.org 客户端
#[derive(Clone, Debug)]
pub struct DoiOrgClient {
    http: Client,
    base_url: Url,
}

impl DoiOrgClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 拼接探测地址，DOI 原样追加到路径后
    pub fn probe_url(&self, doi: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), doi)
    }
}

impl DoiProbe for DoiOrgClient {
    async fn probe(&self, doi: &str) -> Result<ProbeResponse, ProbeError> {
        let url = self.probe_url(doi);
        debug!("探测 DOI: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let final_url = response.url().clone();

        debug!("探测结果: {} → {} ({})", doi, final_url, status);

        Ok(ProbeResponse::new(status, final_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_url_appends_doi_to_path() {
        let client = DoiOrgClient::new(
            Client::new(),
            Url::parse("https://doi.org/").unwrap(),
        );
        assert_eq!(
            client.probe_url("10.1590/S0001"),
            "https://doi.org/10.1590/S0001"
        );
    }
}
