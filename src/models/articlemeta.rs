//! ArticleMeta DOI 提取结果

use crate::models::csv_record::{flag, CsvRecord};

/// 单个 PID 在 ArticleMeta 中的查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMetaResult {
    pub pid: String,
    pub doi: Option<String>,
    pub found: bool,
    pub collection: String,
    pub error: Option<String>,
}

impl ArticleMetaResult {
    pub fn found(pid: &str, collection: &str, doi: String) -> Self {
        Self {
            pid: pid.to_string(),
            doi: Some(doi),
            found: true,
            collection: collection.to_string(),
            error: None,
        }
    }

    pub fn failed(pid: &str, collection: &str, error: impl Into<String>) -> Self {
        Self {
            pid: pid.to_string(),
            doi: None,
            found: false,
            collection: collection.to_string(),
            error: Some(error.into()),
        }
    }
}

impl CsvRecord for ArticleMetaResult {
    fn fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.pid.clone()),
            self.doi.clone(),
            flag(self.found),
            Some(self.collection.clone()),
            self.error.clone(),
        ]
    }
}
