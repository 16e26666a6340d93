use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
}

/// Append-only record of chat turns for one session.
///
/// Turns are only ever added in user/assistant pairs, so a transcript always
/// has an even number of entries.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record one completed exchange.
    pub fn push_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            role: Role::User,
            content: user.into(),
        });
        self.entries.push(TranscriptEntry {
            role: Role::Assistant,
            content: assistant.into(),
        });
    }

    /// Session reset only.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
