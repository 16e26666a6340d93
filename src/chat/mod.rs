pub mod orchestrator;
pub mod transcript;

pub use orchestrator::ChatOrchestrator;
pub use transcript::{Role, Transcript, TranscriptEntry};
