use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "storygen",
    about = "Stream an AI-generated short story to your terminal"
)]
pub struct CliArgs {
    /// Story genre (fantasy, scifi, mystery, romance, horror)
    #[arg(long, short = 'g', default_value = "fantasy")]
    pub genre: String,
    /// Writing tone (dramatic, humorous, minimalist, poetic)
    #[arg(long, short = 't', default_value = "dramatic")]
    pub tone: String,
    /// Free-form prompt; replaces the genre/tone template entirely
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
    /// API key; prompted for interactively when omitted
    #[arg(long)]
    pub api_key: Option<String>,
    /// Model identifier
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// List supported genres, then exit
    #[arg(long)]
    pub list_genres: bool,
    /// List supported tones, then exit
    #[arg(long)]
    pub list_tones: bool,
}

impl CliArgs {
    pub fn wants_listing(&self) -> bool {
        self.list_genres || self.list_tones
    }
}
