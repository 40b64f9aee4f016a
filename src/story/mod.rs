mod genre;
mod prompt;
mod tone;

pub use genre::Genre;
pub use prompt::StoryPrompt;
pub use tone::Tone;
