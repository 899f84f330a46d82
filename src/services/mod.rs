pub mod candidate_resolver;
pub mod classifier;
pub mod progress;
pub mod result_sink;

pub use candidate_resolver::CandidateResolver;
pub use classifier::ProbeClassifier;
pub use progress::{ProgressCounter, Tick};
pub use result_sink::ResultSink;
