use std::pin::Pin;

use async_trait::async_trait;
use futures::stream::Stream;

use crate::error::StoryError;

use super::message::ChatMessage;

/// Boxed stream of incremental content deltas.
pub type DeltaStream = Pin<Box<dyn Stream<Item = Result<String, StoryError>> + Send>>;

/// Trait for providers that stream chat-style story generations.
#[async_trait]
pub trait StoryProvider: Send + Sync {
    /// Open a streaming generation for the given messages.
    ///
    /// Returning `Ok` means the provider accepted the request with a success
    /// status; every later problem arrives as an `Err` item on the stream.
    async fn chat_stream(&self, messages: &[ChatMessage]) -> Result<DeltaStream, StoryError>;
}
