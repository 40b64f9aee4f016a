//! # storygen
//!
//! A small library (and CLI) that streams AI-generated short stories from
//! the OpenAI chat-completions API.
//!
//! A story request is a [`StoryPrompt`] (genre + tone, or free-form custom
//! text), run by a [`GenerationSession`] against a [`StoryProvider`] backend.
//! Deltas are appended to the session's accumulator as they arrive, and the
//! caller observes the growing text after every increment.
//!
//! ```no_run
//! use storygen::{
//!     Credential, GenerationSession, Genre, OpenAI, StoryPrompt, Tone,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), storygen::StoryError> {
//!     let credential = Credential::new("sk-...")?;
//!     let provider = OpenAI::new(credential.clone(), None, None, None)?;
//!     let mut session = GenerationSession::with_credential(credential);
//!
//!     let prompt = StoryPrompt::new(Genre::Fantasy, Tone::Dramatic);
//!     session
//!         .generate(&provider, &prompt, |story| print!("\r{story}"))
//!         .await;
//!     Ok(())
//! }
//! ```

pub mod backends;
pub mod chat;
pub mod credential;
pub mod error;
pub mod session;
pub mod story;

pub use backends::OpenAI;
pub use chat::{ChatMessage, ChatRole, DeltaStream, StoryProvider};
pub use credential::Credential;
pub use error::StoryError;
pub use session::{
    GenerationSession, GenerationStatus, Outcome, SessionState, GENERATION_ERROR_MESSAGE,
};
pub use story::{Genre, StoryPrompt, Tone};
