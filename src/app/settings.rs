use crate::persona::{Mode, Mood, SidebarSettings, Topic};
use crate::ui::style as ui;
use anyhow::Result;
use dialoguer::{MultiSelect, Select};
use strum::IntoEnumIterator;

/// The "Quack Menu" settings panel.
pub fn run(settings: &mut SidebarSettings) -> Result<()> {
    println!();
    println!("  {}", ui::header("Quack Menu"));

    let moods: Vec<Mood> = Mood::iter().collect();
    let mood_names: Vec<String> = moods.iter().map(ToString::to_string).collect();
    let mood = Select::new()
        .with_prompt("Mr. Quack's Mood")
        .items(&mood_names)
        .default(moods.iter().position(|m| *m == settings.mood).unwrap_or(0))
        .interact()?;

    let modes: Vec<Mode> = Mode::iter().collect();
    let mode_names: Vec<String> = modes.iter().map(ToString::to_string).collect();
    let mode = Select::new()
        .with_prompt("Mode")
        .items(&mode_names)
        .default(modes.iter().position(|m| *m == settings.mode).unwrap_or(0))
        .interact()?;

    let topics: Vec<Topic> = Topic::iter().collect();
    let topic_names: Vec<String> = topics.iter().map(ToString::to_string).collect();
    let checked: Vec<bool> = topics.iter().map(|t| settings.topics.contains(t)).collect();
    let picked = MultiSelect::new()
        .with_prompt("Topics (space to toggle)")
        .items(&topic_names)
        .defaults(&checked)
        .interact()?;

    settings.mood = moods[mood];
    settings.mode = modes[mode];
    settings.topics = picked.into_iter().map(|i| topics[i]).collect();

    println!("  {} {}", ui::success("✓"), ui::dim(settings.persona()));
    Ok(())
}
