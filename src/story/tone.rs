use std::fmt;
use std::str::FromStr;

use crate::error::StoryError;

/// Writing tone applied to the generated story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Dramatic,
    Humorous,
    Minimalist,
    Poetic,
}

impl Tone {
    /// All supported tones, in presentation order.
    pub const ALL: [Tone; 4] = [
        Tone::Dramatic,
        Tone::Humorous,
        Tone::Minimalist,
        Tone::Poetic,
    ];

    /// Stable identifier used for selection.
    pub fn id(&self) -> &'static str {
        match self {
            Tone::Dramatic => "dramatic",
            Tone::Humorous => "humorous",
            Tone::Minimalist => "minimalist",
            Tone::Poetic => "poetic",
        }
    }

    /// Display label; lower-cased when interpolated into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Dramatic => "Dramatic",
            Tone::Humorous => "Humorous",
            Tone::Minimalist => "Minimalist",
            Tone::Poetic => "Poetic",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tone {
    type Err = StoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.id() == raw.to_lowercase())
            .ok_or_else(|| StoryError::InvalidRequest(format!("Unknown tone: {raw}")))
    }
}
