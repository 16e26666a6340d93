//! Per-session context handed to every screen.

use crate::chat::Transcript;
use crate::config::Config;
use crate::error::Result;
use crate::games::{GuessGame, QuizGame, QuizQuestion};
use crate::persona::SidebarSettings;

/// Everything one user's session owns. Nothing here outlives the process.
#[derive(Debug)]
pub struct Session {
    pub settings: SidebarSettings,
    pub transcript: Transcript,
    pub guess: GuessGame,
    pub quiz: QuizGame,
    guess_seed: Option<u64>,
}

impl Session {
    pub fn new(
        settings: SidebarSettings,
        questions: Vec<QuizQuestion>,
        guess_seed: Option<u64>,
    ) -> Result<Self> {
        Ok(Self {
            settings,
            transcript: Transcript::new(),
            guess: new_guess_game(guess_seed),
            quiz: QuizGame::new(questions)?,
            guess_seed,
        })
    }

    /// Session built from config defaults, with `settings` from the command line.
    pub fn from_config(config: &Config, settings: SidebarSettings) -> Result<Self> {
        let questions = config.load_questions()?;
        Self::new(settings, questions, config.games.guess_seed)
    }

    pub fn persona(&self) -> String {
        self.settings.persona()
    }

    /// Forget the conversation and start both games over. Settings are kept.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.guess = new_guess_game(self.guess_seed);
        self.quiz.restart();
        tracing::info!("Session reset");
    }
}

fn new_guess_game(seed: Option<u64>) -> GuessGame {
    seed.map_or_else(GuessGame::new, GuessGame::seeded)
}
