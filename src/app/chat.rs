use crate::chat::{ChatOrchestrator, Role, Transcript, TranscriptEntry};
use crate::error::ChatError;
use crate::session::Session;
use crate::ui::style as ui;
use anyhow::Result;
use dialoguer::Input;
use tokio_util::sync::CancellationToken;

pub async fn run(session: &mut Session, chat: &ChatOrchestrator) -> Result<()> {
    println!();
    println!("  {}", ui::header("🦆 Mr. Quack"));
    println!(
        "  {}",
        ui::dim("/persona shows the persona, /reset starts over, /back returns to the menu")
    );
    println!();

    for entry in session.transcript.entries() {
        print_entry(entry);
    }

    loop {
        let line: String = Input::new()
            .with_prompt("Chat with Mr. Quack")
            .allow_empty(true)
            .interact_text()?;

        match line.trim() {
            "" => continue,
            "/back" | "/quit" => return Ok(()),
            "/persona" => {
                println!("  {}", ui::dim(session.persona()));
                continue;
            }
            "/reset" => {
                session.reset();
                println!("  {}", ui::dim("Session reset. Mr. Quack forgot everything."));
                continue;
            }
            _ => {}
        }

        let persona = session.persona();
        match send_cancellable(chat, &mut session.transcript, &persona, &line).await {
            Ok(reply) => print_entry(&TranscriptEntry {
                role: Role::Assistant,
                content: reply,
            }),
            Err(ChatError::Cancelled) => println!("  {}", ui::dim("(cancelled)")),
            Err(e) => println!("  {} {}", ui::error("✗"), ui::error(e)),
        }
    }
}

/// Single message mode: print the reply or fail.
pub async fn run_once(session: &mut Session, chat: &ChatOrchestrator, message: &str) -> Result<()> {
    let persona = session.persona();
    let reply = send_cancellable(chat, &mut session.transcript, &persona, message).await?;
    println!("{reply}");
    Ok(())
}

/// Send one turn; Ctrl-C while waiting cancels it.
async fn send_cancellable(
    chat: &ChatOrchestrator,
    transcript: &mut Transcript,
    persona: &str,
    message: &str,
) -> Result<String, ChatError> {
    let cancel = CancellationToken::new();
    let watcher = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    println!("  {}", ui::dim("Mr. Quack is thinking... (Ctrl-C to cancel)"));
    let result = chat.send(transcript, persona, message, &cancel).await;
    watcher.abort();
    result
}

fn print_entry(entry: &TranscriptEntry) {
    match entry.role {
        Role::User => println!("  {} {}", ui::user("You:"), entry.content),
        Role::Assistant => println!("  {} {}", ui::duck("Mr. Quack:"), entry.content),
    }
}
