//! Persona construction from the settings panel.
//!
//! The persona is never stored: it is derived from [`SidebarSettings`] every
//! time a prompt is built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mr. Quack's mood, ordered from saddest to happiest.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[strum(to_string = "Very Sad")]
    VerySad,
    Sad,
    #[default]
    Okay,
    Happy,
    #[strum(to_string = "Very Happy")]
    VeryHappy,
}

/// Conversational tone.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Friendly,
    Formal,
    Funny,
}

/// Topic tags the user can pick. Declaration order is display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Movies,
    Travel,
    Food,
    Sports,
}

/// Screen selector ("Go to:").
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Page {
    Chat,
    #[strum(to_string = "Mini Game")]
    MiniGame,
    #[strum(to_string = "Duck Quiz Game")]
    DuckQuiz,
}

/// Values held by the settings panel for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSettings {
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_topics")]
    pub topics: BTreeSet<Topic>,
}

fn default_topics() -> BTreeSet<Topic> {
    BTreeSet::from([Topic::Food])
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            mood: Mood::default(),
            mode: Mode::default(),
            topics: default_topics(),
        }
    }
}

impl SidebarSettings {
    pub fn persona(&self) -> String {
        build_persona(self.mode, &self.topics, self.mood)
    }
}

/// Describe Mr. Quack's tone, interests and mood as plain sentences.
///
/// The tone clause comes first, the topics clause is omitted when `topics` is
/// empty, and the mood clause is always last.
pub fn build_persona(mode: Mode, topics: &BTreeSet<Topic>, mood: Mood) -> String {
    let mut persona = format!("Your tone is {}.", mode.to_string().to_lowercase());
    if !topics.is_empty() {
        let names: Vec<String> = topics.iter().map(ToString::to_string).collect();
        persona.push_str(&format!(" You enjoy talking about {}.", names.join(", ")));
    }
    persona.push_str(&format!(
        " Your current mood is {}.",
        mood.to_string().to_lowercase()
    ));
    persona
}
