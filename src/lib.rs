// Library interface for wordguess
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::GameError;
pub use game_state::{GameRound, RoundState, TurnOutcome, home_loop, play_round};
pub use guess::{check_guesses, create_partial_word};
pub use wordbank::{
    append_word, ensure_wordbank, load_words, parse_wordbank_text, random_word, remove_word,
};
