//! 候选解析器 - 业务能力层
//!
//! 按固定优先级逐个探测候选，第一个被判定为终止的候选胜出。
//!
//! 状态：`PENDING → TRYING(candidate_i) → RESOLVED | EXHAUSTED`

use crate::clients::DoiProbe;
use crate::models::{Candidate, IdentifierRecord, ProbeOutcome, ResolutionResult};
use crate::services::classifier::ProbeClassifier;
use tracing::{debug, error};

/// 候选解析器
///
/// 同一个标识符的候选严格串行探测，绝不并发。
pub struct CandidateResolver<P> {
    probe: P,
    classifier: ProbeClassifier,
    generic_prefix: String,
}

impl<P: DoiProbe> CandidateResolver<P> {
    pub fn new(probe: P, classifier: ProbeClassifier, generic_prefix: impl Into<String>) -> Self {
        Self {
            probe,
            classifier,
            generic_prefix: generic_prefix.into(),
        }
    }

    /// 解析单个标识符，总是返回恰好一个结果
    pub async fn resolve(&self, record: &IdentifierRecord) -> ResolutionResult {
        let mut result = ResolutionResult::pending(record);

        for candidate in Candidate::for_record(record, &self.generic_prefix) {
            let Some(doi) = candidate.target() else {
                debug!("[{}] 跳过空候选 {}", record.pid, candidate.label);
                continue;
            };

            let outcome = match self.probe.probe(doi).await {
                Ok(response) => self.classifier.classify(&response),
                Err(e) => {
                    error!("[{}] 无法访问 DOI {} ({}): {}", record.pid, doi, candidate.label, e);
                    self.classifier.classify_error(e)
                }
            };

            if let ProbeOutcome::NotResolved { status } = outcome {
                debug!("[{}] {} 未解析 (status {})", record.pid, candidate.label, status);
                continue;
            }

            debug!("[{}] {} 解析终止: {:?}", record.pid, candidate.label, outcome);
            result.mark_found(
                candidate.label,
                doi,
                outcome.final_url().map(str::to_string),
                outcome.error_note(),
            );
            return result;
        }

        debug!("[{}] 所有候选均未解析", record.pid);
        result
    }
}
