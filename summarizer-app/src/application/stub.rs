use super::CompletionClient;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use summarizer_errors::AppError;

/// Canned completion client that records how it was called.
pub struct StubCompletion {
    reply: Result<String, AppError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(err: AppError) -> Self {
        Self::with_reply(Err(err))
    }

    fn with_reply(reply: Result<String, AppError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() =
            Some((system_prompt.to_string(), user_content.to_string()));
        self.reply.clone()
    }
}
