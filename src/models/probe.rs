//! 单次探测的响应与分类结果

use reqwest::Url;

/// 解析服务的原始响应：只关心状态码和最终 URL，不读取响应体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub final_url: Url,
}

impl ProbeResponse {
    pub fn new(status: u16, final_url: Url) -> Self {
        Self { status, final_url }
    }
}

/// 对单个候选的一次探测结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 200 / 301 / 302
    Resolved { status: u16, final_url: String },
    /// 5xx：暂定为成功，需要下游复核
    ServerError { status: u16, final_url: String },
    /// 经过跳转后在其他主机上 404：DOI 曾指向某处
    RedirectedNotFound { status: u16, final_url: String },
    /// 其他状态码，或在解析服务自身主机上的 404
    NotResolved { status: u16 },
    /// 连接失败、超时、响应格式错误
    TransportError { description: String },
}

impl ProbeOutcome {
    /// 是否结束候选循环
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProbeOutcome::NotResolved { .. })
    }

    /// 写入结果的最终 URL
    pub fn final_url(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Resolved { final_url, .. }
            | ProbeOutcome::ServerError { final_url, .. }
            | ProbeOutcome::RedirectedNotFound { final_url, .. } => Some(final_url),
            ProbeOutcome::NotResolved { .. } | ProbeOutcome::TransportError { .. } => None,
        }
    }

    /// 写入结果 error 字段的说明
    pub fn error_note(&self) -> Option<String> {
        match self {
            ProbeOutcome::ServerError { status, .. }
            | ProbeOutcome::RedirectedNotFound { status, .. } => {
                Some(format!("Status code {}", status))
            }
            ProbeOutcome::TransportError { description } => Some(description.clone()),
            ProbeOutcome::Resolved { .. } | ProbeOutcome::NotResolved { .. } => None,
        }
    }
}
