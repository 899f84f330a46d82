//! 查找候选项
//!
//! 每个标识符固定派生两个候选，按优先级排列：已登记的 DOI 在前，通用 DOI 在后。

use crate::models::record::IdentifierRecord;
use std::fmt::Display;

/// 候选项标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateLabel {
    /// 输入中登记的 DOI
    Doi,
    /// 由 PID 机械生成的 DOI
    GenericDoi,
}

impl CandidateLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateLabel::Doi => "doi",
            CandidateLabel::GenericDoi => "generic_doi",
        }
    }
}

impl Display for CandidateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 候选项：标签 + DOI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: CandidateLabel,
    pub doi: String,
}

impl Candidate {
    /// 按优先级派生候选列表
    pub fn for_record(record: &IdentifierRecord, generic_prefix: &str) -> [Candidate; 2] {
        [
            Candidate {
                label: CandidateLabel::Doi,
                doi: record.doi.clone(),
            },
            Candidate {
                label: CandidateLabel::GenericDoi,
                doi: generic_doi(generic_prefix, &record.pid),
            },
        ]
    }

    /// 需要探测的 DOI；空字符串返回 `None`，该候选直接跳过
    pub fn target(&self) -> Option<&str> {
        let doi = self.doi.trim();
        (!doi.is_empty()).then_some(doi)
    }
}

/// 由 PID 生成通用 DOI，例如 `10.1590/` + `S0002-S0002`
pub fn generic_doi(prefix: &str, pid: &str) -> String {
    if pid.trim().is_empty() {
        return String::new();
    }
    format!("{}{}", prefix, pid.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_doi_comes_first() {
        let record = IdentifierRecord::new("S0001-S0001", "10.1590/S0001");
        let [first, second] = Candidate::for_record(&record, "10.1590/");

        assert_eq!(first.label, CandidateLabel::Doi);
        assert_eq!(first.target(), Some("10.1590/S0001"));
        assert_eq!(second.label, CandidateLabel::GenericDoi);
        assert_eq!(second.target(), Some("10.1590/S0001-S0001"));
    }

    #[test]
    fn empty_recorded_doi_has_no_target() {
        let record = IdentifierRecord::new("S0002-S0002", "");
        let [first, _] = Candidate::for_record(&record, "10.1590/");
        assert_eq!(first.target(), None);
    }

    #[test]
    fn empty_pid_produces_no_generic_doi() {
        assert_eq!(generic_doi("10.1590/", " "), "");
    }
}
