#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use mrquack::llm::Provider;

/// Replays canned replies in order and records every prompt it receives.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<&str, &str>>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(String::from).map_err(String::from))
                    .collect(),
            ),
            prompts: Arc::clone(&prompts),
        };
        (provider, prompts)
    }
}

impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn chat_with_system<'a>(
        &'a self,
        _system_prompt: Option<&'a str>,
        message: &'a str,
        _model: &'a str,
        _temperature: f64,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.prompts.lock().unwrap().push(message.to_string());
            let next = self.replies.lock().unwrap().pop_front();
            match next {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(e)) => Err(anyhow::anyhow!(e)),
                None => Err(anyhow::anyhow!("script exhausted")),
            }
        })
    }
}
