pub mod duck_quiz;
pub mod guess;
pub mod quiz;

pub use duck_quiz::duck_questions;
pub use guess::{GUESS_MAX, GUESS_MIN, GuessGame, GuessOutcome};
pub use quiz::{AnswerOutcome, QuizGame, QuizProgress, QuizQuestion, QuizState};
