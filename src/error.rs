use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Mr. Quack.
///
/// Each subsystem defines its own error variant. Screens match on these to
/// decide what to show; internal plumbing keeps using `anyhow::Result` for
/// ad-hoc context chains.
#[derive(Debug, Error)]
pub enum QuackError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Chat / completion service ───────────────────────────────────────
    #[error("chat: {0}")]
    Chat(#[from] ChatError),

    // ── Games ───────────────────────────────────────────────────────────
    #[error("game: {0}")]
    Game(#[from] GameError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("quiz file {path}: {message}")]
    QuizFile { path: String, message: String },
}

// ─── Chat errors ─────────────────────────────────────────────────────────────

/// Failure of a single chat turn. None of these leave a transcript entry behind.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("provider {provider} request failed: {message}")]
    Provider { provider: String, message: String },

    #[error("provider {provider} did not answer within {secs}s")]
    Timeout { provider: String, secs: u64 },

    #[error("request cancelled")]
    Cancelled,
}

// ─── Game errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("guess {guess} is outside {min}..={max}")]
    GuessOutOfRange { guess: i64, min: u8, max: u8 },

    #[error("\"{choice}\" is not an option for question {number}")]
    UnknownOption { choice: String, number: usize },

    #[error("question {number} has not been answered yet")]
    NotAnswered { number: usize },

    #[error("quiz is finished; restart to play again")]
    QuizFinished,

    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("invalid question \"{question}\": {reason}")]
    InvalidQuestion { question: String, reason: String },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, QuackError>;
