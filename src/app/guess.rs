use crate::games::{GUESS_MAX, GUESS_MIN, GuessOutcome};
use crate::session::Session;
use crate::ui::style as ui;
use anyhow::Result;
use dialoguer::Input;

pub fn run(session: &mut Session) -> Result<()> {
    println!();
    println!("  {}", ui::header("🎲 Guess the Number Game"));
    println!(
        "  I'm thinking of a number between {GUESS_MIN} and {GUESS_MAX}. Can you guess it?"
    );
    println!("  {}", ui::dim("Leave the guess blank to go back to the menu."));
    println!();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter your guess")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        let Ok(guess) = input.parse::<i64>() else {
            println!("  {}", ui::warning(format!("\"{input}\" is not a number.")));
            continue;
        };

        match session.guess.submit(guess) {
            Ok(outcome @ GuessOutcome::Correct { .. }) => {
                println!("  {}", ui::success(outcome));
            }
            Ok(outcome) => println!("  {}", ui::warning(outcome)),
            Err(e) => println!("  {}", ui::warning(e)),
        }
    }
}
