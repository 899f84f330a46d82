pub mod articlemeta;
pub mod candidate;
pub mod csv_record;
pub mod loaders;
pub mod probe;
pub mod record;
pub mod resolution;

pub use articlemeta::ArticleMetaResult;
pub use candidate::{Candidate, CandidateLabel};
pub use csv_record::CsvRecord;
pub use loaders::load_lines;
pub use probe::{ProbeOutcome, ProbeResponse};
pub use record::IdentifierRecord;
pub use resolution::ResolutionResult;
