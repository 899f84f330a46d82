//! DOI 存在性检查流程

use crate::clients::DoiProbe;
use crate::models::{IdentifierRecord, ResolutionResult};
use crate::services::CandidateResolver;
use crate::workflow::IdentifierFlow;

/// 读取 `pid;doi` 行，交给候选解析器
pub struct DoiCheckFlow<P> {
    resolver: CandidateResolver<P>,
    delimiter: char,
}

impl<P: DoiProbe> DoiCheckFlow<P> {
    pub fn new(resolver: CandidateResolver<P>, delimiter: char) -> Self {
        Self {
            resolver,
            delimiter,
        }
    }
}

impl<P: DoiProbe> IdentifierFlow for DoiCheckFlow<P> {
    type Record = ResolutionResult;

    fn name(&self) -> &'static str {
        "DOI 检查"
    }

    async fn process(&self, line: String) -> ResolutionResult {
        let record = IdentifierRecord::parse(&line, self.delimiter)
            .unwrap_or_else(|| IdentifierRecord::new(line.trim(), ""));
        self.resolver.resolve(&record).await
    }
}
