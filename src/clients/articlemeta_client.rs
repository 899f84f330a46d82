//! ArticleMeta API 客户端
//!
//! 按 PID 查询文章元数据并取出其中的 DOI
use crate::error::ArticleMetaError;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

/// 文章元数据中我们关心的部分
#[derive(Debug, Deserialize)]
struct ArticleDocument {
    #[serde(default)]
    doi: Option<String>,
}

/// ArticleMeta 客户端
#[derive(Clone, Debug)]
pub struct ArticleMetaClient {
    http: Client,
    base_url: Url,
    collection: String,
}

impl ArticleMetaClient {
    pub fn new(http: Client, base_url: Url, collection: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn article_endpoint(&self) -> String {
        format!(
            "{}/api/v1/article/",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    /// 查询 PID 对应的 DOI
    ///
    /// # 返回
    /// - `Ok(doi)`：响应中有非空的 doi 字段
    /// - `Err`：传输失败、响应不是 JSON、或 doi 字段缺失/为 null/为空
    pub async fn lookup_doi(&self, pid: &str) -> Result<String, ArticleMetaError> {
        let endpoint = self.article_endpoint();
        debug!("查询 ArticleMeta: {} (collection={})", pid, self.collection);

        let body = self
            .http
            .get(&endpoint)
            .query(&[("collection", self.collection.as_str()), ("code", pid)])
            .send()
            .await?
            .text()
            .await?;

        let document: ArticleDocument = serde_json::from_str(&body)
            .map_err(|e| ArticleMetaError::InvalidJson(e.to_string()))?;

        document
            .doi
            .map(|doi| doi.trim().to_string())
            .filter(|doi| !doi.is_empty())
            .ok_or(ArticleMetaError::MissingDoi)
    }
}
