use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// Reads a secret from the terminal, echoing `*` per character.
pub fn read_masked(prompt: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    terminal::enable_raw_mode()?;
    let result = read_masked_loop(&mut stdout);
    terminal::disable_raw_mode()?;
    writeln!(stdout)?;
    result
}

fn read_masked_loop(stdout: &mut impl Write) -> anyhow::Result<String> {
    let mut secret = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        match code {
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if secret.pop().is_some() {
                    write!(stdout, "\x08 \x08")?;
                    stdout.flush()?;
                }
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                anyhow::bail!("interrupted")
            }
            KeyCode::Char(c) => {
                secret.push(c);
                write!(stdout, "*")?;
                stdout.flush()?;
            }
            _ => {}
        }
    }
    Ok(secret)
}
