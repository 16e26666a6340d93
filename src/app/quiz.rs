use crate::games::{AnswerOutcome, QuizProgress};
use crate::session::Session;
use crate::ui::style as ui;
use anyhow::Result;
use dialoguer::{Confirm, Select};

const BACK: &str = "↩ Back to menu";

pub fn run(session: &mut Session) -> Result<()> {
    println!();
    println!("  {}", ui::header("🦆 Duck Quiz Game"));
    println!("  Test your duck knowledge with this fun quiz!");
    println!();

    loop {
        let quiz = &mut session.quiz;

        if quiz.is_finished() {
            let summary = QuizProgress::Finished {
                score: quiz.score(),
                total: quiz.total(),
            };
            println!("  {}", ui::success(summary));
            let again = Confirm::new()
                .with_prompt("Play again?")
                .default(true)
                .interact()?;
            if !again {
                return Ok(());
            }
            quiz.restart();
            continue;
        }

        let Some(question) = quiz.current_question().cloned() else {
            return Ok(());
        };
        println!(
            "  {}",
            ui::accent(format!("Question {} / {}", quiz.index() + 1, quiz.total()))
        );
        println!("  {}", question.question());

        if !quiz.is_answered() {
            let mut items: Vec<&str> = question.options().iter().map(String::as_str).collect();
            items.push(BACK);
            let pick = Select::new()
                .with_prompt("Choose an answer:")
                .items(&items)
                .default(0)
                .interact()?;
            let Some(choice) = question.options().get(pick) else {
                return Ok(());
            };

            match quiz.submit_answer(choice)? {
                AnswerOutcome::Correct => println!("  {}", ui::success(AnswerOutcome::Correct)),
                outcome @ AnswerOutcome::Incorrect { .. } => println!("  {}", ui::error(outcome)),
                AnswerOutcome::AlreadyAnswered => {}
            }
        }

        if let Some(choice) = quiz.choice() {
            println!("  {} {choice}", ui::dim("Your answer:"));
        }

        let go_on = Confirm::new()
            .with_prompt("Next?")
            .default(true)
            .interact()?;
        if !go_on {
            return Ok(());
        }
        quiz.next()?;
        println!();
    }
}
