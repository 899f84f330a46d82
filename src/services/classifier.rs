//! 探测结果分类 - 业务能力层
//!
//! 只根据状态码和最终 URL 判断，不读取响应体。

use crate::error::ProbeError;
use crate::models::{ProbeOutcome, ProbeResponse};
use reqwest::Url;

/// 探测结果分类器
///
/// 规则：
/// - 200 / 301 / 302 → 解析成功
/// - 5xx → 暂定成功（解析服务限流时也会返回 5xx）
/// - 404 且最终 URL 已离开解析服务主机 → 带异常说明的成功
/// - 其他状态码、解析服务主机上的 404 → 本候选耗尽
#[derive(Clone, Debug)]
pub struct ProbeClassifier {
    resolver_host: String,
    /// 只有基础 URL 显式写了端口时才比较端口
    resolver_port: Option<u16>,
}

impl ProbeClassifier {
    pub fn new(resolver_url: &Url) -> Self {
        Self {
            resolver_host: resolver_url
                .host_str()
                .unwrap_or_default()
                .to_ascii_lowercase(),
            resolver_port: resolver_url.port(),
        }
    }

    pub fn classify(&self, response: &ProbeResponse) -> ProbeOutcome {
        let status = response.status;
        let final_url = response.final_url.to_string();

        match status {
            200 | 301 | 302 => ProbeOutcome::Resolved { status, final_url },
            s if s >= 500 => ProbeOutcome::ServerError { status, final_url },
            404 if !self.is_resolver_host(&response.final_url) => {
                ProbeOutcome::RedirectedNotFound { status, final_url }
            }
            _ => ProbeOutcome::NotResolved { status },
        }
    }

    pub fn classify_error(&self, error: ProbeError) -> ProbeOutcome {
        ProbeOutcome::TransportError {
            description: error.description,
        }
    }

    /// 最终 URL 是否仍在解析服务主机上（含子域名）
    ///
    /// 基础 URL 带显式端口时端口也必须一致；否则 http/https 之间的跳转仍算同一主机。
    pub fn is_resolver_host(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        let same_host = host == self.resolver_host
            || host.ends_with(&format!(".{}", self.resolver_host));

        match self.resolver_port {
            Some(port) => same_host && url.port_or_known_default() == Some(port),
            None => same_host,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ProbeClassifier {
        ProbeClassifier::new(&Url::parse("https://doi.org").unwrap())
    }

    fn response(status: u16, url: &str) -> ProbeResponse {
        ProbeResponse::new(status, Url::parse(url).unwrap())
    }

    #[test]
    fn ok_and_redirect_statuses_resolve() {
        for status in [200, 301, 302] {
            let outcome = classifier().classify(&response(status, "https://example.org/a"));
            assert!(matches!(outcome, ProbeOutcome::Resolved { .. }), "{status}");
            assert_eq!(outcome.error_note(), None);
        }
    }

    #[test]
    fn server_errors_are_tentative_success() {
        let outcome = classifier().classify(&response(503, "https://doi.org/10.1/x"));
        assert!(outcome.is_terminal());
        assert_eq!(outcome.error_note().as_deref(), Some("Status code 503"));
    }

    #[test]
    fn not_found_on_resolver_host_continues() {
        let outcome = classifier().classify(&response(404, "https://doi.org/10.1/x"));
        assert_eq!(outcome, ProbeOutcome::NotResolved { status: 404 });
    }

    #[test]
    fn not_found_after_scheme_downgrade_stays_on_resolver() {
        let outcome = classifier().classify(&response(404, "http://doi.org/10.1/x"));
        assert_eq!(outcome, ProbeOutcome::NotResolved { status: 404 });
    }

    #[test]
    fn non_standard_high_statuses_count_as_server_errors() {
        for status in [599, 600, 999] {
            let outcome = classifier().classify(&response(status, "https://doi.org/10.1/x"));
            assert!(matches!(outcome, ProbeOutcome::ServerError { .. }), "{status}");
            assert_eq!(
                outcome.error_note(),
                Some(format!("Status code {}", status))
            );
        }
    }

    #[test]
    fn not_found_on_resolver_subdomain_continues() {
        let outcome = classifier().classify(&response(404, "https://www.doi.org/10.1/x"));
        assert!(!outcome.is_terminal());
    }

    #[test]
    fn not_found_after_redirect_is_an_anomaly() {
        let outcome =
            classifier().classify(&response(404, "https://www.scielo.br/article/missing"));
        assert_eq!(
            outcome,
            ProbeOutcome::RedirectedNotFound {
                status: 404,
                final_url: "https://www.scielo.br/article/missing".to_string(),
            }
        );
        assert_eq!(outcome.error_note().as_deref(), Some("Status code 404"));
    }

    #[test]
    fn other_statuses_exhaust_the_candidate() {
        for status in [303, 400, 403, 410, 429] {
            let outcome = classifier().classify(&response(status, "https://example.org"));
            assert_eq!(outcome, ProbeOutcome::NotResolved { status });
        }
    }

    #[test]
    fn different_port_is_a_different_host() {
        let classifier = ProbeClassifier::new(&Url::parse("http://127.0.0.1:8001").unwrap());
        assert!(classifier.is_resolver_host(&Url::parse("http://127.0.0.1:8001/x").unwrap()));
        assert!(!classifier.is_resolver_host(&Url::parse("http://127.0.0.1:8002/x").unwrap()));
    }
}
