//! 单个标识符的解析结果

use crate::models::candidate::CandidateLabel;
use crate::models::csv_record::{flag, CsvRecord};
use crate::models::record::IdentifierRecord;

/// 解析结果
///
/// 最多只有一个 `found_by_*` 标志为真；全部候选耗尽时都为假。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub pid: String,
    /// 最终选中的 DOI；未解析时保留输入中登记的值
    pub doi: String,
    pub found_by_doi: bool,
    pub found_by_generic_doi: bool,
    pub redirect_url: Option<String>,
    pub error: Option<String>,
}

impl ResolutionResult {
    /// 初始状态：没有任何标志
    pub fn pending(record: &IdentifierRecord) -> Self {
        Self {
            pid: record.pid.clone(),
            doi: record.doi.clone(),
            found_by_doi: false,
            found_by_generic_doi: false,
            redirect_url: None,
            error: None,
        }
    }

    /// 标记某个候选为解析成功
    pub fn mark_found(
        &mut self,
        label: CandidateLabel,
        doi: &str,
        redirect_url: Option<String>,
        error: Option<String>,
    ) {
        self.found_by_doi = label == CandidateLabel::Doi;
        self.found_by_generic_doi = label == CandidateLabel::GenericDoi;
        self.doi = doi.to_string();
        self.redirect_url = redirect_url;
        self.error = error;
    }

    /// 解析成功的候选
    pub fn resolved_by(&self) -> Option<CandidateLabel> {
        if self.found_by_doi {
            Some(CandidateLabel::Doi)
        } else if self.found_by_generic_doi {
            Some(CandidateLabel::GenericDoi)
        } else {
            None
        }
    }
}

impl CsvRecord for ResolutionResult {
    fn fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.pid.clone()),
            Some(self.doi.clone()),
            flag(self.found_by_doi),
            flag(self.found_by_generic_doi),
            self.redirect_url.clone(),
            self.error.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_result_keeps_recorded_doi() {
        let record = IdentifierRecord::new("S1", "10.1590/S1");
        let result = ResolutionResult::pending(&record);
        assert_eq!(result.doi, "10.1590/S1");
        assert_eq!(result.resolved_by(), None);
    }

    #[test]
    fn mark_found_sets_exactly_one_flag() {
        let record = IdentifierRecord::new("S1", "");
        let mut result = ResolutionResult::pending(&record);
        result.mark_found(
            CandidateLabel::GenericDoi,
            "10.1590/S1",
            Some("https://example.org/a".into()),
            None,
        );

        assert!(!result.found_by_doi);
        assert!(result.found_by_generic_doi);
        assert_eq!(result.resolved_by(), Some(CandidateLabel::GenericDoi));
        assert_eq!(
            result.fields(),
            vec![
                Some("S1".to_string()),
                Some("10.1590/S1".to_string()),
                Some("0".to_string()),
                Some("1".to_string()),
                Some("https://example.org/a".to_string()),
                None,
            ]
        );
    }
}
