//! Mock content provider for tests and the offline CLI.
//!
//! # Features
//!
//! - Scripted responses per generation purpose (consumed in order)
//! - Simulated latency for timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! ```ignore
//! let provider = MockContentProvider::new()
//!     .with_response(GenerationPurpose::SpeechImpact, r#"{"morale": 0.2}"#)
//!     .with_delay(Duration::from_millis(100));
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ContentProvider, GeneratedContent, GenerationPrompt, GenerationPurpose, ProviderError};

const MOCK_MODEL: &str = "mock-model-1";

/// A scripted provider reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(ProviderError),
}

#[derive(Debug, Clone, Default)]
pub struct MockContentProvider {
    responses: Arc<Mutex<HashMap<GenerationPurpose, VecDeque<MockResponse>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<GenerationPrompt>>>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply for `purpose`.
    pub fn with_response(self, purpose: GenerationPurpose, content: impl Into<String>) -> Self {
        self.push(purpose, MockResponse::Success(content.into()));
        self
    }

    /// Queues an error for `purpose`.
    pub fn with_error(self, purpose: GenerationPurpose, error: ProviderError) -> Self {
        self.push(purpose, MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn push(&self, purpose: GenerationPurpose, response: MockResponse) {
        guard(&self.responses).entry(purpose).or_default().push_back(response);
    }

    pub fn call_count(&self) -> usize {
        guard(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<GenerationPrompt> {
        guard(&self.calls).clone()
    }

    /// Calls made for one purpose.
    pub fn calls_for(&self, purpose: GenerationPurpose) -> usize {
        guard(&self.calls).iter().filter(|c| c.purpose == purpose).count()
    }

    /// Next scripted reply, or unstructured text when nothing is queued.
    fn next_response(&self, purpose: GenerationPurpose) -> MockResponse {
        guard(&self.responses)
            .get_mut(&purpose)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| MockResponse::Success("Mock response".to_string()))
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn generate(&self, prompt: GenerationPrompt) -> Result<GeneratedContent, ProviderError> {
        let purpose = prompt.purpose;
        guard(&self.calls).push(prompt);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response(purpose) {
            MockResponse::Success(content) => Ok(GeneratedContent {
                content,
                model: MOCK_MODEL.to_string(),
            }),
            MockResponse::Error(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(purpose: GenerationPurpose) -> GenerationPrompt {
        GenerationPrompt::new(purpose, "test")
    }

    #[tokio::test]
    async fn replies_are_consumed_per_purpose() {
        let provider = MockContentProvider::new()
            .with_response(GenerationPurpose::Options, "first")
            .with_response(GenerationPurpose::Options, "second")
            .with_response(GenerationPurpose::Background, "context");

        let a = provider.generate(prompt(GenerationPurpose::Options)).await.unwrap();
        let b = provider.generate(prompt(GenerationPurpose::Background)).await.unwrap();
        let c = provider.generate(prompt(GenerationPurpose::Options)).await.unwrap();
        assert_eq!((a.content.as_str(), b.content.as_str(), c.content.as_str()), ("first", "context", "second"));
        assert_eq!(provider.call_count(), 3);
        assert_eq!(provider.calls_for(GenerationPurpose::Options), 2);
    }

    #[tokio::test]
    async fn injected_errors_are_returned() {
        let provider = MockContentProvider::new()
            .with_error(GenerationPurpose::SpeechImpact, ProviderError::RateLimited { retry_after_secs: 5 });
        let err = provider.generate(prompt(GenerationPurpose::SpeechImpact)).await.unwrap_err();
        assert_eq!(err, ProviderError::RateLimited { retry_after_secs: 5 });
    }

    #[tokio::test]
    async fn unscripted_purpose_gets_plain_text() {
        let provider = MockContentProvider::new();
        let reply = provider.generate(prompt(GenerationPurpose::Recommendation)).await.unwrap();
        assert_eq!(reply.content, "Mock response");
        assert_eq!(reply.model, "mock-model-1");
    }
}
