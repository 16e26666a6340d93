use crate::persona::{Mode, Mood, SidebarSettings, Topic};
use clap::{Args, Parser, Subcommand};

/// Mr. Quack - a persona-driven chat duck with a guessing game and a duck quiz.
#[derive(Parser, Debug)]
#[command(name = "mrquack")]
#[command(version)]
#[command(about = "Chat with Mr. Quack, guess his number, or take the duck quiz.", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub sidebar: SidebarArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings-panel overrides for this session.
#[derive(Args, Debug, Default)]
pub struct SidebarArgs {
    /// Mr. Quack's mood
    #[arg(long, global = true, value_enum)]
    pub mood: Option<Mood>,

    /// Conversational tone
    #[arg(long, global = true, value_enum)]
    pub mode: Option<Mode>,

    /// Topic Mr. Quack enjoys (repeatable; replaces the configured topics)
    #[arg(long = "topic", global = true, value_enum)]
    pub topics: Vec<Topic>,

    /// Talk about nothing in particular (clears topics)
    #[arg(long, global = true, conflicts_with = "topics")]
    pub no_topics: bool,
}

impl SidebarArgs {
    /// Apply command-line overrides on top of configured defaults.
    pub fn apply(&self, mut settings: SidebarSettings) -> SidebarSettings {
        if let Some(mood) = self.mood {
            settings.mood = mood;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if self.no_topics {
            settings.topics.clear();
        } else if !self.topics.is_empty() {
            settings.topics = self.topics.iter().copied().collect();
        }
        settings
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive menu (default)
    Play,

    /// Chat with Mr. Quack
    Chat {
        /// Single message mode (don't enter interactive mode)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Play "guess the number"
    Guess,

    /// Take the duck quiz
    Quiz,

    /// Print the persona built from the current settings
    Persona,

    /// Show the config file location and effective settings
    Config,
}
