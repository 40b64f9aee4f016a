use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use storygen::{
    Credential, GenerationSession, GenerationStatus, Genre, OpenAI, StoryPrompt, Tone,
};

use crate::args::CliArgs;
use crate::input;

pub async fn run() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    if args.wants_listing() {
        if args.list_genres {
            print_genres();
        }
        if args.list_tones {
            print_tones();
        }
        return Ok(());
    }

    let genre: Genre = args.genre.parse()?;
    let tone: Tone = args.tone.parse()?;
    let mut prompt = StoryPrompt::new(genre, tone);
    if let Some(custom) = args.prompt.clone() {
        prompt = prompt.with_custom(custom);
    }

    let mut session = GenerationSession::new();
    if let Some(key) = args.api_key.clone() {
        session.set_credential(Credential::new(key)?);
    }

    loop {
        let Some(credential) = session.credential().cloned() else {
            let key = input::read_masked("OpenAI API key: ")?;
            session.set_credential(Credential::new(key).context("an API key is required")?);
            continue;
        };

        let provider = OpenAI::new(
            credential,
            args.base_url.clone(),
            args.model.clone(),
            args.timeout,
        )?;

        let mut printed = 0usize;
        let status = session
            .generate(&provider, &prompt, |story| {
                // Only the newest delta is written; the accumulator grows
                // append-only so the previous text never changes.
                let delta = &story[printed..];
                printed = story.len();
                print!("{delta}");
                let _ = io::stdout().flush();
            })
            .await;

        match status {
            GenerationStatus::NeedsCredential => continue,
            GenerationStatus::Success => {
                println!();
                return Ok(());
            }
            GenerationStatus::Failed => {
                println!("{}", session.story());
                anyhow::bail!("story generation failed");
            }
        }
    }
}

fn print_genres() {
    println!("Genres:");
    for genre in Genre::ALL {
        println!("  {:<10} {} ({})", genre.id(), genre.name(), genre.descriptor());
    }
}

fn print_tones() {
    println!("Tones:");
    for tone in Tone::ALL {
        println!("  {:<10} {}", tone.id(), tone.label());
    }
}
