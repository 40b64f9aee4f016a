use std::fmt;
use std::str::FromStr;

use crate::error::StoryError;

/// Story genre selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Genre {
    /// A magical fantasy world
    #[default]
    Fantasy,
    /// A futuristic science fiction setting
    SciFi,
    /// An intriguing mystery
    Mystery,
    /// A romantic story
    Romance,
    /// A chilling horror tale
    Horror,
}

impl Genre {
    /// All supported genres, in presentation order.
    pub const ALL: [Genre; 5] = [
        Genre::Fantasy,
        Genre::SciFi,
        Genre::Mystery,
        Genre::Romance,
        Genre::Horror,
    ];

    /// Stable identifier used for selection.
    pub fn id(&self) -> &'static str {
        match self {
            Genre::Fantasy => "fantasy",
            Genre::SciFi => "scifi",
            Genre::Mystery => "mystery",
            Genre::Romance => "romance",
            Genre::Horror => "horror",
        }
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::SciFi => "Sci-Fi",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::Horror => "Horror",
        }
    }

    /// Setting descriptor interpolated into the prompt template.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Genre::Fantasy => "a magical fantasy world",
            Genre::SciFi => "a futuristic science fiction setting",
            Genre::Mystery => "an intriguing mystery",
            Genre::Romance => "a romantic story",
            Genre::Horror => "a chilling horror tale",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Genre {
    type Err = StoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.id() == raw.to_lowercase())
            .ok_or_else(|| StoryError::InvalidRequest(format!("Unknown genre: {raw}")))
    }
}
