mod message;
mod sse;
mod stream;
mod traits;

pub use message::{ChatMessage, ChatMessageBuilder, ChatRole};
pub use stream::{StreamChoice, StreamDelta, StreamResponse};
pub use traits::{DeltaStream, StoryProvider};

pub(crate) use sse::create_sse_stream;
