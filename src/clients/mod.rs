pub mod articlemeta_client;
pub mod doi_client;
pub mod http;

pub use articlemeta_client::ArticleMetaClient;
pub use doi_client::{DoiOrgClient, DoiProbe};
pub use http::build_http_client;
