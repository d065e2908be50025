use thiserror::Error;

/// Domain errors for the guessing game. The first three are user-input
/// rejections the control loop recovers from by re-prompting;
/// `WordSourceUnavailable` is fatal to starting a round.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GameError {
    #[error("no more than two letters may be guessed in one turn")]
    TooManyGuesses,
    #[error("the guess contained no letters")]
    NoLettersInGuess,
    #[error("every letter in the guess has already been guessed")]
    DuplicateGuess,
    #[error("word bank unavailable: {0}")]
    WordSourceUnavailable(String),
}

impl GameError {
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::WordSourceUnavailable(_))
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::WordSourceUnavailable(e.to_string())
    }
}
