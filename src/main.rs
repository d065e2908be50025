use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use wordguess::cli::{clear_screen, parse_cli};
use wordguess::game_state::home_loop;
use wordguess::wordbank::{default_wordbank_path, ensure_wordbank};

fn main() -> Result<()> {
    env_logger::init();

    let cli = parse_cli();
    let bank_path = cli
        .wordbank_path
        .map(PathBuf::from)
        .unwrap_or_else(default_wordbank_path);

    ensure_wordbank(&bank_path)
        .with_context(|| format!("could not prepare word bank at '{}'", bank_path.display()))?;

    clear_screen();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    home_loop(&bank_path, &mut reader)?;
    Ok(())
}
