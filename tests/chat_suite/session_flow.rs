use std::time::Duration;

use mrquack::chat::{ChatOrchestrator, Role};
use mrquack::games::duck_questions;
use mrquack::persona::{Mode, Mood, SidebarSettings, Topic};
use mrquack::{ChatError, Session};
use tokio_util::sync::CancellationToken;

use crate::scripted_provider::ScriptedProvider;

fn session(settings: SidebarSettings) -> Session {
    Session::new(settings, duck_questions().unwrap(), Some(1)).unwrap()
}

#[tokio::test]
async fn persona_changes_apply_to_the_next_turn() {
    let (provider, prompts) = ScriptedProvider::new(vec![Ok("Quack, hello!"), Ok("QUACK HA HA")]);
    let chat = ChatOrchestrator::new(Box::new(provider), "m", 0.7, Duration::from_secs(5));
    let mut session = session(SidebarSettings::default());
    let cancel = CancellationToken::new();

    let persona = session.persona();
    chat.send(&mut session.transcript, &persona, "hi", &cancel)
        .await
        .unwrap();

    session.settings.mode = Mode::Funny;
    session.settings.mood = Mood::VeryHappy;
    session.settings.topics = [Topic::Sports].into_iter().collect();
    let persona = session.persona();
    chat.send(&mut session.transcript, &persona, "tell me a joke", &cancel)
        .await
        .unwrap();

    let prompts = prompts.lock().unwrap();
    assert!(prompts[0].contains("Your tone is friendly."));
    assert!(prompts[0].contains("You enjoy talking about Food."));
    assert!(prompts[1].contains("Your tone is funny."));
    assert!(prompts[1].contains("Your current mood is very happy."));
    assert!(prompts[1].ends_with("User: tell me a joke"));

    let contents: Vec<(Role, &str)> = session
        .transcript
        .entries()
        .iter()
        .map(|e| (e.role, e.content.as_str()))
        .collect();
    assert_eq!(
        contents,
        vec![
            (Role::User, "hi"),
            (Role::Assistant, "Quack, hello!"),
            (Role::User, "tell me a joke"),
            (Role::Assistant, "QUACK HA HA"),
        ]
    );
}

#[tokio::test]
async fn failed_turn_between_successes_leaves_no_gap() {
    let (provider, _) =
        ScriptedProvider::new(vec![Ok("one"), Err("503 Service Unavailable"), Ok("three")]);
    let chat = ChatOrchestrator::new(Box::new(provider), "m", 0.7, Duration::from_secs(5));
    let mut session = session(SidebarSettings::default());
    let cancel = CancellationToken::new();
    let persona = session.persona();

    chat.send(&mut session.transcript, &persona, "1", &cancel)
        .await
        .unwrap();
    let err = chat
        .send(&mut session.transcript, &persona, "2", &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Provider { .. }));
    assert!(err.to_string().contains("503"));
    chat.send(&mut session.transcript, &persona, "3", &cancel)
        .await
        .unwrap();

    let users: Vec<&str> = session
        .transcript
        .entries()
        .iter()
        .filter(|e| e.role == Role::User)
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(users, vec!["1", "3"]);
    assert_eq!(session.transcript.len(), 4);
}

#[tokio::test]
async fn reset_forgets_the_conversation() {
    let (provider, _) = ScriptedProvider::new(vec![Ok("quack")]);
    let chat = ChatOrchestrator::new(Box::new(provider), "m", 0.7, Duration::from_secs(5));
    let mut session = session(SidebarSettings::default());
    let persona = session.persona();

    chat.send(&mut session.transcript, &persona, "hello", &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(session.transcript.len(), 2);

    session.reset();
    assert!(session.transcript.is_empty());
}
