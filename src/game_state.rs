use crate::cli::{
    MenuChoice, clear_screen, display_wordbank, pause, prompt_play_again, read_line,
    read_menu_choice,
};
use crate::error::GameError;
use crate::guess::{check_guesses, create_partial_word};
use crate::wordbank::{
    append_word, bank_contains, load_wordbank_text, load_words, random_word, remove_word,
};
use std::io::BufRead;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoundState {
    InProgress,
    Won,
    GaveUp,
}

/// Result of feeding one input line to a round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurnOutcome {
    /// Empty input, nothing happened; the caller should re-prompt.
    Ignored,
    /// The player gave up; the round is over and the word revealed.
    GaveUp,
    /// The turn was accepted and matched this many mystery-word positions.
    Matched(usize),
    /// The turn was accepted and completed the word.
    Won,
}

/// One round of the guessing game: the mystery word, the append-only history
/// of guessed letters, and the running count of revealed positions.
///
/// The round is a pure state machine driven by already-captured input lines;
/// it never prompts or reads on its own.
#[derive(Debug)]
pub struct GameRound {
    mystery_word: String,
    guessed_letters: String,
    correct_guesses: usize,
    state: RoundState,
}

impl GameRound {
    pub fn new(mystery_word: impl Into<String>) -> Self {
        GameRound {
            mystery_word: mystery_word.into(),
            guessed_letters: String::new(),
            correct_guesses: 0,
            state: RoundState::InProgress,
        }
    }

    pub fn mystery_word(&self) -> &str {
        &self.mystery_word
    }

    pub fn guessed_letters(&self) -> &str {
        &self.guessed_letters
    }

    pub fn correct_guesses(&self) -> usize {
        self.correct_guesses
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != RoundState::InProgress
    }

    /// The masked all-caps rendering of the current progress.
    pub fn partial_word(&self) -> String {
        create_partial_word(&self.mystery_word.to_uppercase(), &self.guessed_letters)
    }

    /// Ends the round early and reveals the mystery word.
    pub fn give_up(&mut self) -> &str {
        self.state = RoundState::GaveUp;
        &self.mystery_word
    }

    /// Applies one raw input line to the round.
    ///
    /// A line containing `/` anywhere is a give-up. An empty line is a no-op
    /// turn. A turn whose letters have all been guessed before is rejected
    /// with `DuplicateGuess`; one new letter is enough to make a two-letter
    /// turn acceptable. Otherwise the guess is scored by [`check_guesses`],
    /// and only on success are the counter and history updated, so a failed
    /// turn leaves the round exactly as it was.
    pub fn play_turn(&mut self, input: &str) -> Result<TurnOutcome, GameError> {
        if self.is_over() {
            return Ok(TurnOutcome::Ignored);
        }
        if input.contains('/') {
            self.state = RoundState::GaveUp;
            return Ok(TurnOutcome::GaveUp);
        }
        if input.is_empty() {
            return Ok(TurnOutcome::Ignored);
        }
        if self.is_duplicate_turn(input) {
            return Err(GameError::DuplicateGuess);
        }

        let matched = check_guesses(&self.mystery_word, input)?;
        self.guessed_letters.push_str(input);
        // An accepted turn may repeat a letter from an earlier turn, so the
        // counter is recomputed from the history rather than accumulated;
        // it always equals the number of revealed positions.
        self.correct_guesses = self.revealed_positions();
        log::debug!(
            "Turn matched {} position(s), {}/{} revealed",
            matched,
            self.correct_guesses,
            self.mystery_word.chars().count()
        );

        if self.correct_guesses == self.mystery_word.chars().count() {
            self.state = RoundState::Won;
            return Ok(TurnOutcome::Won);
        }
        Ok(TurnOutcome::Matched(matched))
    }

    /// Number of mystery-word positions whose letter is case-insensitively
    /// present in the guess history.
    fn revealed_positions(&self) -> usize {
        self.mystery_word
            .chars()
            .filter(|c| {
                self.guessed_letters
                    .chars()
                    .any(|g| g.eq_ignore_ascii_case(c))
            })
            .count()
    }

    /// A turn is a duplicate only when every word character in it has already
    /// been guessed (case-insensitively). Letterless input is not a duplicate;
    /// it falls through to the evaluator's `NoLettersInGuess`.
    fn is_duplicate_turn(&self, input: &str) -> bool {
        let mut has_letters = false;
        for c in input.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_') {
            has_letters = true;
            let seen = self
                .guessed_letters
                .chars()
                .any(|g| g.eq_ignore_ascii_case(&c));
            if !seen {
                return false;
            }
        }
        has_letters
    }
}

/// Plays one round interactively against `reader`, printing progress each
/// turn. Returns the terminal state. End of input counts as giving up.
pub fn play_round<R: BufRead>(mystery_word: &str, reader: &mut R) -> RoundState {
    let mut round = GameRound::new(mystery_word);

    while !round.is_over() {
        clear_screen();
        println!("Word to guess:");
        println!("{}", round.partial_word());
        println!("\nYou have guessed the following letters:");
        println!("{}", round.guessed_letters());
        println!("\nPlease enter up to two letters to guess or '/'");
        println!(" to give up and return to the home menu.");

        let Some(line) = read_line(reader) else {
            round.give_up();
            break;
        };

        match round.play_turn(&line) {
            Ok(TurnOutcome::GaveUp) => {
                println!("\nThe mystery word was {}.", round.mystery_word());
                pause(reader);
            }
            Ok(TurnOutcome::Won) => {
                println!("Congratulations! You've guessed {}!", round.mystery_word());
            }
            Ok(TurnOutcome::Matched(_)) | Ok(TurnOutcome::Ignored) => {}
            Err(e) => {
                println!("{e}");
                println!("Please press enter to try again...");
                let _ = read_line(reader);
            }
        }
    }

    round.state()
}

/// The home-menu control loop: new games, viewing the bank, and bank edits,
/// until the player exits. Word-source failures are fatal and propagate.
pub fn home_loop<R: BufRead>(bank_path: &Path, reader: &mut R) -> Result<(), GameError> {
    loop {
        clear_screen();
        match read_menu_choice(reader) {
            MenuChoice::NewGame => while start_new_game(bank_path, reader)? {},
            MenuChoice::ViewWordBank => {
                clear_screen();
                let text = load_wordbank_text(bank_path)?;
                display_wordbank(&bank_path.display().to_string(), &text);
                println!();
                pause(reader);
            }
            MenuChoice::AddWord => {
                clear_screen();
                prompt_add_word(bank_path, reader)?;
            }
            MenuChoice::RemoveWord => {
                clear_screen();
                prompt_remove_word(bank_path, reader)?;
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// Runs one game on a freshly picked random word. Returns whether the player
/// asked for another game (only offered after a win, matching the original
/// flow; giving up returns straight to the menu).
fn start_new_game<R: BufRead>(bank_path: &Path, reader: &mut R) -> Result<bool, GameError> {
    let words = load_words(bank_path)?;
    let mystery_word = random_word(&words, &mut rand::rng())?.to_string();
    log::debug!(
        "Starting round with a {}-letter mystery word",
        mystery_word.chars().count()
    );

    match play_round(&mystery_word, reader) {
        RoundState::Won => Ok(prompt_play_again(reader)),
        _ => Ok(false),
    }
}

fn prompt_add_word<R: BufRead>(bank_path: &Path, reader: &mut R) -> Result<(), GameError> {
    let text = load_wordbank_text(bank_path)?;
    display_wordbank(&bank_path.display().to_string(), &text);
    println!("\nPlease type a new word to add to the list or '/' to cancel...");

    let Some(entry) = read_line(reader) else {
        return Ok(());
    };
    let new_word = entry.trim();
    if new_word.contains('/') {
        return Ok(());
    }

    // Empty input is caught here too: every string contains "".
    if bank_contains(&text, new_word) {
        println!("Inputted word already contained in wordbank!");
        println!("Please press enter to return to home menu...");
        let _ = read_line(reader);
        return Ok(());
    }

    append_word(bank_path, new_word)?;
    println!("\nSuccessfully added {new_word} to the wordbank!");
    pause(reader);
    Ok(())
}

fn prompt_remove_word<R: BufRead>(bank_path: &Path, reader: &mut R) -> Result<(), GameError> {
    let text = load_wordbank_text(bank_path)?;
    display_wordbank(&bank_path.display().to_string(), &text);
    println!("\nPlease type a word to remove from the list or '/' to cancel...");

    let Some(entry) = read_line(reader) else {
        return Ok(());
    };
    let delete_word = entry.trim();
    if delete_word.contains('/') {
        return Ok(());
    }

    if remove_word(bank_path, delete_word)? {
        println!("\nSuccessfully removed word from the wordbank!");
        pause(reader);
    } else {
        println!("{delete_word} was not found in the wordbank!");
        println!("Please press enter to return to the home menu...");
        let _ = read_line(reader);
    }
    Ok(())
}
