use crate::error::{AppError, AppResult};
use std::path::Path;
use tokio::fs;

/// 一次性读取整个输入文件，返回非空行
///
/// 处理开始前必须读完全部输入；读取失败属于启动期致命错误。
pub async fn load_lines(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| AppError::InputRead {
            path: path.display().to_string(),
            source,
        })?;

    Ok(split_lines(&content))
}

/// 拆分为行，去掉首尾空白并丢弃空行
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
