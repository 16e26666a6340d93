use crate::error::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub const GUESS_MIN: u8 = 1;
pub const GUESS_MAX: u8 = 20;

/// Result of one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    /// `attempts` counts the winning guess.
    Correct { secret: u8, attempts: u32 },
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow => f.write_str("Too low! Try again."),
            Self::TooHigh => f.write_str("Too high! Try again."),
            Self::Correct { secret, attempts } => write!(
                f,
                "🎉 Correct! The number was {secret}. You guessed it in {attempts} attempts."
            ),
        }
    }
}

/// "Guess the number" between [`GUESS_MIN`] and [`GUESS_MAX`].
///
/// There is no terminal state: a correct guess immediately re-rolls the
/// secret and starts a fresh round.
#[derive(Debug, Clone)]
pub struct GuessGame {
    secret: u8,
    attempts: u32,
    rng: StdRng,
}

impl GuessGame {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic secret sequence, for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Start with a known secret; later rounds draw from `rng`.
    pub fn with_secret(secret: u8, rng: StdRng) -> Result<Self, GameError> {
        check_range(i64::from(secret))?;
        Ok(Self {
            secret,
            attempts: 0,
            rng,
        })
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let secret = rng.random_range(GUESS_MIN..=GUESS_MAX);
        Self {
            secret,
            attempts: 0,
            rng,
        }
    }

    pub fn secret(&self) -> u8 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn submit(&mut self, guess: i64) -> Result<GuessOutcome, GameError> {
        check_range(guess)?;
        let secret = i64::from(self.secret);
        self.attempts += 1;

        let outcome = match guess.cmp(&secret) {
            std::cmp::Ordering::Less => GuessOutcome::TooLow,
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
            std::cmp::Ordering::Equal => {
                let outcome = GuessOutcome::Correct {
                    secret: self.secret,
                    attempts: self.attempts,
                };
                self.secret = self.rng.random_range(GUESS_MIN..=GUESS_MAX);
                self.attempts = 0;
                outcome
            }
        };

        tracing::debug!(guess, attempts = self.attempts, ?outcome, "Guess submitted");
        Ok(outcome)
    }
}

impl Default for GuessGame {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(guess: i64) -> Result<(), GameError> {
    if (i64::from(GUESS_MIN)..=i64::from(GUESS_MAX)).contains(&guess) {
        Ok(())
    } else {
        Err(GameError::GuessOutOfRange {
            guess,
            min: GUESS_MIN,
            max: GUESS_MAX,
        })
    }
}
