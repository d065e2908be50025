use crate::error::GameError;
use lazy_static::lazy_static;
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default word bank used to seed a fresh installation.
pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

lazy_static! {
    static ref SEPARATOR_RE: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// Parses raw comma-separated word-bank text into uppercase words.
///
/// Splitting is purely syntactic: empty tokens from malformed input are kept,
/// so callers must guard against banks with no usable words.
pub fn parse_wordbank_text(text: &str) -> Vec<String> {
    let normalized = text.trim().to_uppercase();
    SEPARATOR_RE.split(&normalized).map(String::from).collect()
}

/// Reads the whole word-bank file as text.
pub fn load_wordbank_text(path: &Path) -> Result<String, GameError> {
    let text = fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Loads and parses every word in the bank file.
pub fn load_words(path: &Path) -> Result<Vec<String>, GameError> {
    let words = parse_wordbank_text(&load_wordbank_text(path)?);
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Picks a mystery word uniformly from the non-empty entries of the bank.
pub fn random_word<'a, R: Rng + ?Sized>(
    words: &'a [String],
    rng: &mut R,
) -> Result<&'a str, GameError> {
    let candidates: Vec<&String> = words.iter().filter(|w| !w.is_empty()).collect();
    candidates
        .choose(rng)
        .copied()
        .map(|w| w.as_str())
        .ok_or_else(|| GameError::WordSourceUnavailable("the word bank is empty".to_string()))
}

/// Case-insensitive check for whether the raw bank text already contains
/// `word` anywhere (substring match, the add-word redundancy guard).
pub fn bank_contains(bank_text: &str, word: &str) -> bool {
    bank_text.to_uppercase().contains(&word.to_uppercase())
}

/// Appends `,<word>` after the existing bank content.
pub fn append_word(path: &Path, word: &str) -> Result<(), GameError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, ",{word}")?;
    log::info!("Appended '{}' to {}", word, path.display());
    Ok(())
}

/// Removes the first case-insensitive whole-word occurrence of `word` from the
/// bank file, along with one following comma if present, then trims any
/// trailing commas and rewrites the file. Returns `false` when the word is not
/// in the bank.
pub fn remove_word(path: &Path, word: &str) -> Result<bool, GameError> {
    let text = load_wordbank_text(path)?;
    let pattern = format!(r"(?i)\b{}\b,?", regex::escape(word));
    let re = Regex::new(&pattern).expect("escaped word forms a valid pattern");

    let Some(found) = re.find(&text) else {
        return Ok(false);
    };

    let mut updated = String::with_capacity(text.len());
    updated.push_str(&text[..found.start()]);
    updated.push_str(&text[found.end()..]);
    let updated = updated.trim_end_matches(',');

    fs::write(path, updated)?;
    log::info!("Removed '{}' from {}", word, path.display());
    Ok(true)
}

/// Seeds the bank file with the embedded default words when it doesn't exist,
/// creating parent directories as needed.
pub fn ensure_wordbank(path: &Path) -> Result<(), GameError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, EMBEDDED_WORDBANK.trim_end())?;
    log::info!("Seeded new word bank at {}", path.display());
    Ok(())
}

/// Default bank location under the user's home directory, with a relative
/// fallback when no home directory is available.
pub fn default_wordbank_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".wordguess").join("wordbank.txt"))
        .unwrap_or_else(|| PathBuf::from("wordbank.txt"))
}
