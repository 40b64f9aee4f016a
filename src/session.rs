//! Lifecycle of a single story generation.
//!
//! A [`GenerationSession`] owns the accumulator string and the session state.
//! `&mut self` on [`GenerationSession::generate`] enforces that at most one
//! generation is in flight per session.

use futures::StreamExt;

use crate::chat::{ChatMessage, StoryProvider};
use crate::credential::Credential;
use crate::story::StoryPrompt;

/// Fixed user-facing message shown for any failed generation. Raw error
/// detail goes to the log, not to the user.
pub const GENERATION_ERROR_MESSAGE: &str =
    "Sorry, there was an error generating your story. Please check your API key and try again.";

/// Observable lifecycle states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No generation started, or the last attempt was aborted before the
    /// request was issued.
    #[default]
    Idle,
    /// Request issued, response status not yet seen.
    Requesting,
    /// Success status received, deltas being accumulated.
    Streaming,
    /// Generation ran to completion or failure.
    Settled(Outcome),
}

/// Terminal outcome of a settled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
}

/// Result of asking the session to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    /// No credential is present; no network call was made. The caller should
    /// run its credential-collection flow and retry.
    NeedsCredential,
    Success,
    Failed,
}

/// View-model state for one story generation at a time.
#[derive(Debug, Default)]
pub struct GenerationSession {
    state: SessionState,
    story: String,
    credential: Option<Credential>,
}

impl GenerationSession {
    /// Creates a session with no credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that already holds a credential.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
            ..Self::default()
        }
    }

    /// Stores or replaces the session credential.
    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The story accumulated so far; after a failed generation this is the
    /// fixed error message.
    pub fn story(&self) -> &str {
        &self.story
    }

    /// Runs one generation to completion.
    ///
    /// `on_update` is invoked with the full accumulated text after every
    /// appended delta, so callers can render incrementally. There is no
    /// cancellation: once the request is issued the session runs to natural
    /// completion or failure.
    pub async fn generate<P, F>(
        &mut self,
        provider: &P,
        prompt: &StoryPrompt,
        mut on_update: F,
    ) -> GenerationStatus
    where
        P: StoryProvider + ?Sized,
        F: FnMut(&str),
    {
        if self.credential.is_none() {
            self.state = SessionState::Idle;
            return GenerationStatus::NeedsCredential;
        }

        self.state = SessionState::Requesting;
        let messages = [ChatMessage::user().content(prompt.build()).build()];

        let mut stream = match provider.chat_stream(&messages).await {
            Ok(stream) => stream,
            Err(err) => {
                log::debug!("generation request failed: {err}");
                return self.fail();
            }
        };

        self.state = SessionState::Streaming;
        self.story.clear();

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(delta) => {
                    self.story.push_str(&delta);
                    on_update(&self.story);
                }
                Err(err) => {
                    log::debug!("stream aborted: {err}");
                    return self.fail();
                }
            }
        }

        self.state = SessionState::Settled(Outcome::Success);
        GenerationStatus::Success
    }

    /// Partial output is discarded on failure; only the fixed message is
    /// shown to the user.
    fn fail(&mut self) -> GenerationStatus {
        self.story.clear();
        self.story.push_str(GENERATION_ERROR_MESSAGE);
        self.state = SessionState::Settled(Outcome::Failed);
        GenerationStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::chat::ChatMessage;
    use crate::chat::StoryProvider;
    use crate::error::StoryError;

    type StreamItem = Result<String, StoryError>;

    struct MockProvider {
        calls: AtomicUsize,
        response: Mutex<Option<Result<Vec<StreamItem>, StoryError>>>,
        last_prompt: Mutex<Option<String>>,
    }

    impl MockProvider {
        fn streaming(items: Vec<StreamItem>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Mutex::new(Some(Ok(items))),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(err: StoryError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Mutex::new(Some(Err(err))),
                last_prompt: Mutex::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StoryProvider for MockProvider {
        async fn chat_stream(
            &self,
            messages: &[ChatMessage],
        ) -> Result<crate::chat::DeltaStream, StoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() =
                messages.first().map(|msg| msg.content.clone());
            let response = self.response.lock().unwrap().take().expect("single use");
            let items = response?;
            Ok(Box::pin(futures::stream::iter(items)))
        }
    }

    fn credential() -> Credential {
        Credential::new("sk-test").unwrap()
    }

    #[tokio::test]
    async fn missing_credential_skips_network_call() {
        let provider = MockProvider::streaming(vec![Ok("never".to_string())]);
        let mut session = GenerationSession::new();

        let status = session
            .generate(&provider, &StoryPrompt::default(), |_| {})
            .await;

        assert_eq!(status, GenerationStatus::NeedsCredential);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.story(), "");
    }

    #[tokio::test]
    async fn successful_stream_accumulates_incrementally() {
        let provider = MockProvider::streaming(vec![
            Ok("Hello".to_string()),
            Ok(" world".to_string()),
        ]);
        let mut session = GenerationSession::with_credential(credential());
        let mut updates = Vec::new();

        let status = session
            .generate(&provider, &StoryPrompt::default(), |story| {
                updates.push(story.to_string())
            })
            .await;

        assert_eq!(status, GenerationStatus::Success);
        assert_eq!(session.state(), SessionState::Settled(Outcome::Success));
        assert_eq!(session.story(), "Hello world");
        assert_eq!(updates, vec!["Hello", "Hello world"]);
    }

    #[tokio::test]
    async fn generation_sends_built_prompt_as_user_message() {
        let provider = MockProvider::streaming(vec![]);
        let mut session = GenerationSession::with_credential(credential());
        let prompt = StoryPrompt::default().with_custom("a story about tea");

        session.generate(&provider, &prompt, |_| {}).await;

        assert_eq!(
            provider.last_prompt.lock().unwrap().as_deref(),
            Some("a story about tea")
        );
    }

    #[tokio::test]
    async fn request_failure_settles_failed_with_fixed_message() {
        let provider =
            MockProvider::failing(StoryError::ProviderError("status 401".to_string()));
        let mut session = GenerationSession::with_credential(credential());

        let status = session
            .generate(&provider, &StoryPrompt::default(), |_| {})
            .await;

        assert_eq!(status, GenerationStatus::Failed);
        assert_eq!(session.state(), SessionState::Settled(Outcome::Failed));
        assert_eq!(session.story(), GENERATION_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn mid_stream_error_discards_partial_output() {
        let provider = MockProvider::streaming(vec![
            Ok("partial".to_string()),
            Err(StoryError::HttpError("connection reset".to_string())),
        ]);
        let mut session = GenerationSession::with_credential(credential());

        let status = session
            .generate(&provider, &StoryPrompt::default(), |_| {})
            .await;

        assert_eq!(status, GenerationStatus::Failed);
        assert_eq!(session.story(), GENERATION_ERROR_MESSAGE);
        assert!(!session.story().contains("partial"));
    }

    #[tokio::test]
    async fn new_generation_resets_previous_story() {
        let first = MockProvider::streaming(vec![Ok("first story".to_string())]);
        let second = MockProvider::streaming(vec![Ok("second".to_string())]);
        let mut session = GenerationSession::with_credential(credential());

        session
            .generate(&first, &StoryPrompt::default(), |_| {})
            .await;
        assert_eq!(session.story(), "first story");

        session
            .generate(&second, &StoryPrompt::default(), |_| {})
            .await;
        assert_eq!(session.story(), "second");
    }

    #[tokio::test]
    async fn empty_stream_settles_success_with_empty_story() {
        let provider = MockProvider::streaming(vec![]);
        let mut session = GenerationSession::with_credential(credential());

        let status = session
            .generate(&provider, &StoryPrompt::default(), |_| {})
            .await;

        assert_eq!(status, GenerationStatus::Success);
        assert_eq!(session.story(), "");
    }
}
