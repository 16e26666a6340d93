use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPTIONS_PER_QUESTION: usize = 4;

/// One multiple-choice question. Always has exactly four options and the
/// answer is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl TryFrom<RawQuestion> for QuizQuestion {
    type Error = GameError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Self::new(raw.question, raw.options, raw.answer)
    }
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, GameError> {
        let question = question.into();
        let answer = answer.into();
        let invalid = |reason: String| GameError::InvalidQuestion {
            question: question.clone(),
            reason,
        };

        if options.len() != OPTIONS_PER_QUESTION {
            return Err(invalid(format!(
                "expected {OPTIONS_PER_QUESTION} options, found {}",
                options.len()
            )));
        }
        if !options.contains(&answer) {
            return Err(invalid(format!("answer \"{answer}\" is not an option")));
        }

        Ok(Self {
            question,
            options,
            answer,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    Asking {
        index: usize,
        score: usize,
    },
    Answered {
        index: usize,
        score: usize,
        choice: String,
    },
    Finished {
        score: usize,
    },
}

/// What happened when an answer was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_answer: String },
    /// The current question was already answered; nothing changed.
    AlreadyAnswered,
}

impl fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("✅ Correct!"),
            Self::Incorrect { correct_answer } => {
                write!(f, "❌ Oops! The correct answer was: {correct_answer}")
            }
            Self::AlreadyAnswered => f.write_str("Already answered."),
        }
    }
}

/// Where the quiz went after `next()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    Question { index: usize },
    Finished { score: usize, total: usize },
}

impl fmt::Display for QuizProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question { index } => write!(f, "Question {}", index + 1),
            Self::Finished { score, total } => {
                write!(f, "🎉 Quiz finished! Your score: {score}/{total}")
            }
        }
    }
}

/// Multiple-choice quiz over a fixed, ordered question list.
#[derive(Debug, Clone)]
pub struct QuizGame {
    questions: Vec<QuizQuestion>,
    state: QuizState,
}

impl QuizGame {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, GameError> {
        if questions.is_empty() {
            return Err(GameError::EmptyQuiz);
        }
        Ok(Self {
            questions,
            state: QuizState::Asking { index: 0, score: 0 },
        })
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Index of the current question; equals `total()` once finished.
    pub fn index(&self) -> usize {
        match self.state {
            QuizState::Asking { index, .. } | QuizState::Answered { index, .. } => index,
            QuizState::Finished { .. } => self.total(),
        }
    }

    pub fn score(&self) -> usize {
        match self.state {
            QuizState::Asking { score, .. }
            | QuizState::Answered { score, .. }
            | QuizState::Finished { score } => score,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.state, QuizState::Answered { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished { .. })
    }

    /// The chosen option while the current question is answered.
    pub fn choice(&self) -> Option<&str> {
        match &self.state {
            QuizState::Answered { choice, .. } => Some(choice),
            QuizState::Asking { .. } | QuizState::Finished { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::Asking { index, .. } | QuizState::Answered { index, .. } => {
                self.questions.get(index)
            }
            QuizState::Finished { .. } => None,
        }
    }

    /// Answer the current question. Only the first submission per question counts.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, GameError> {
        let (index, score) = match self.state {
            QuizState::Asking { index, score } => (index, score),
            QuizState::Answered { .. } => return Ok(AnswerOutcome::AlreadyAnswered),
            QuizState::Finished { .. } => return Err(GameError::QuizFinished),
        };

        let question = &self.questions[index];
        if !question.options.iter().any(|option| option == choice) {
            return Err(GameError::UnknownOption {
                choice: choice.to_string(),
                number: index + 1,
            });
        }

        let correct = choice == question.answer;
        let outcome = if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                correct_answer: question.answer.clone(),
            }
        };

        self.state = QuizState::Answered {
            index,
            score: score + usize::from(correct),
            choice: choice.to_string(),
        };
        tracing::debug!(question = index + 1, correct, "Quiz answer submitted");
        Ok(outcome)
    }

    /// Move past an answered question.
    pub fn next(&mut self) -> Result<QuizProgress, GameError> {
        let (index, score) = match self.state {
            QuizState::Answered { index, score, .. } => (index, score),
            QuizState::Asking { index, .. } => {
                return Err(GameError::NotAnswered { number: index + 1 });
            }
            QuizState::Finished { .. } => return Err(GameError::QuizFinished),
        };

        if index + 1 < self.total() {
            self.state = QuizState::Asking {
                index: index + 1,
                score,
            };
            Ok(QuizProgress::Question { index: index + 1 })
        } else {
            self.state = QuizState::Finished { score };
            tracing::info!(score, total = self.total(), "Quiz finished");
            Ok(QuizProgress::Finished {
                score,
                total: self.total(),
            })
        }
    }

    /// Back to the first question with a zero score.
    pub fn restart(&mut self) {
        self.state = QuizState::Asking { index: 0, score: 0 };
    }
}
