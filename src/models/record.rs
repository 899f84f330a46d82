//! 输入记录

/// 一行输入：PID 加上可选的已登记 DOI
///
/// 读取后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRecord {
    pub pid: String,
    /// 已登记的 DOI，可能为空字符串
    pub doi: String,
}

impl IdentifierRecord {
    pub fn new(pid: impl Into<String>, doi: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            doi: doi.into(),
        }
    }

    /// 解析一行输入（`pid;doi;...`），多余字段忽略
    ///
    /// 没有分隔符的行视为只有 PID；空行返回 `None`。
    pub fn parse(line: &str, delimiter: char) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut parts = line.split(delimiter);
        let pid = parts.next().unwrap_or_default().trim();
        let doi = parts.next().unwrap_or_default().trim();

        Some(Self::new(pid, doi))
    }

    /// 已登记的 DOI（空字符串视为缺失）
    pub fn recorded_doi(&self) -> Option<&str> {
        Some(self.doi.as_str()).filter(|doi| !doi.is_empty())
    }
}
