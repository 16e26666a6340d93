use std::time::Duration;

use mrquack::{ChatError, Config};
use mrquack::chat::{ChatOrchestrator, Transcript};
use mrquack::llm::GeminiProvider;
use mrquack::persona::SidebarSettings;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn orchestrator(server: &MockServer, timeout: Duration) -> ChatOrchestrator {
    let provider = GeminiProvider::new(Some("integration-key")).with_base_url(&server.uri());
    ChatOrchestrator::new(Box::new(provider), "gemini-2.5-flash", 0.7, timeout)
}

#[tokio::test]
async fn in_character_prompt_reaches_gemini() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "integration-key"))
        .and(body_string_contains("Always stay in character as Mr. Quack"))
        .and(body_string_contains("Your current mood is okay."))
        .and(body_string_contains("User: What is your favourite food?"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"candidates":[{"content":{"parts":[{"text":"Bread crumbs, quack!"}]},"finishReason":"STOP"}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let chat = orchestrator(&server, Duration::from_secs(5));
    let mut transcript = Transcript::new();
    let persona = SidebarSettings::default().persona();

    let reply = chat
        .send(
            &mut transcript,
            &persona,
            "What is your favourite food?",
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(reply, "Bread crumbs, quack!");
    assert_eq!(transcript.len(), 2);
}

#[tokio::test]
async fn server_error_is_visible_and_not_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_string(r#"{"error":{"message":"Resource has been exhausted"}}"#),
        )
        .mount(&server)
        .await;

    let chat = orchestrator(&server, Duration::from_secs(5));
    let mut transcript = Transcript::new();

    let err = chat
        .send(&mut transcript, "persona", "hello", &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        ChatError::Provider { provider, message } => {
            assert_eq!(provider, "gemini");
            assert!(message.contains("429"));
            assert!(message.contains("Resource has been exhausted"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn slow_gemini_hits_the_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"candidates":[{"content":{"parts":[{"text":"late"}]}}]}"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let chat = orchestrator(&server, Duration::from_millis(100));
    let mut transcript = Transcript::new();

    let err = chat
        .send(&mut transcript, "persona", "hello", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::Timeout { .. }));
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn configured_timeout_bounds_the_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"candidates":[{"content":{"parts":[{"text":"late"}]}}]}"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.api_key = Some("integration-key".into());
    config.chat.api_base = server.uri();
    config.chat.timeout_secs = 1;
    let chat = ChatOrchestrator::from_config(&config);
    let mut transcript = Transcript::new();

    let err = chat
        .send(&mut transcript, "persona", "hello", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::Timeout { secs: 1, .. }));
    assert!(transcript.is_empty());
}
