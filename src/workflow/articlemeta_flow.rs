//! ArticleMeta DOI 提取流程

use crate::clients::ArticleMetaClient;
use crate::models::ArticleMetaResult;
use crate::workflow::IdentifierFlow;
use tracing::{debug, error};

/// 每行一个 PID（多余字段忽略），查询 ArticleMeta 中登记的 DOI
pub struct ArticleMetaFlow {
    client: ArticleMetaClient,
    delimiter: char,
}

impl ArticleMetaFlow {
    pub fn new(client: ArticleMetaClient, delimiter: char) -> Self {
        Self { client, delimiter }
    }
}

impl IdentifierFlow for ArticleMetaFlow {
    type Record = ArticleMetaResult;

    fn name(&self) -> &'static str {
        "ArticleMeta DOI 提取"
    }

    async fn process(&self, line: String) -> ArticleMetaResult {
        let pid = line.split(self.delimiter).next().unwrap_or_default().trim();
        let collection = self.client.collection();

        match self.client.lookup_doi(pid).await {
            Ok(doi) => ArticleMetaResult::found(pid, collection, doi),
            Err(e) => {
                if e.is_transport() {
                    error!("[{}] 无法从 ArticleMeta 获取 DOI: {}", pid, e);
                } else {
                    debug!("[{}] ArticleMeta 未登记 DOI: {}", pid, e);
                }
                ArticleMetaResult::failed(pid, collection, e.to_string())
            }
        }
    }
}
