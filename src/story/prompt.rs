use super::{Genre, Tone};

/// Parameters for a single story request.
///
/// A non-empty custom prompt takes precedence over the genre/tone template;
/// the template is only used when the custom text is absent or blank.
#[derive(Debug, Clone, Default)]
pub struct StoryPrompt {
    pub genre: Genre,
    pub tone: Tone,
    pub custom: Option<String>,
}

impl StoryPrompt {
    /// Create a templated prompt for the given genre and tone.
    pub fn new(genre: Genre, tone: Tone) -> Self {
        Self {
            genre,
            tone,
            custom: None,
        }
    }

    /// Replace the templated prompt with free-form text.
    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    /// Render the final prompt string sent to the model.
    ///
    /// Custom text is returned exactly as supplied, untrimmed; trimming is
    /// only used to decide whether it counts as present.
    pub fn build(&self) -> String {
        if let Some(custom) = &self.custom {
            if !custom.trim().is_empty() {
                return custom.clone();
            }
        }
        format!(
            "Write a creative short story (about 200-300 words) in {} with a {} tone. Make it engaging and vivid.",
            self.genre.descriptor(),
            self.tone.label().to_lowercase()
        )
    }
}
