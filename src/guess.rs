use crate::error::GameError;

/// Extracts the ordered set of guessable characters from raw turn input:
/// ASCII word characters only (letters, digits, underscore), case-folded,
/// first occurrence wins. `"E!e"` yields `['e']`. Non-ASCII letters are not
/// guessable; they cannot be folded consistently against the bank's words.
fn guess_letters(guess: &str) -> Vec<char> {
    let mut letters = Vec::new();
    for c in guess.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            let folded = c.to_ascii_lowercase();
            if !letters.contains(&folded) {
                letters.push(folded);
            }
        }
    }
    letters
}

/// Scores one turn of up to two guessed letters against the mystery word.
///
/// Returns the number of positions in `mystery_word` whose character matches
/// (case-insensitively) any of the guessed letters. Matching is by set
/// membership, so a position counts once even when the guess repeats a letter:
/// `check_guesses("AARDVARK", "aa")` is 3, the same as for `"a"`.
///
/// Game rules are enforced here: more than two distinct letters in one turn is
/// `TooManyGuesses`, and input with no usable letters at all is
/// `NoLettersInGuess` rather than a silent zero.
pub fn check_guesses(mystery_word: &str, guess: &str) -> Result<usize, GameError> {
    let letters = guess_letters(guess);

    if letters.len() > 2 {
        return Err(GameError::TooManyGuesses);
    }
    if letters.is_empty() {
        return Err(GameError::NoLettersInGuess);
    }

    Ok(mystery_word
        .chars()
        .filter(|c| letters.contains(&c.to_ascii_lowercase()))
        .count())
}

/// Renders the player-visible partial word: each mystery-word character is
/// shown when it appears (case-insensitively) anywhere in `guessed_letters`,
/// masked with `_` otherwise, all joined by single spaces.
///
/// The output keeps whatever case `mystery_word` was passed in; callers pass
/// uppercase on both sides for a consistent all-caps rendering.
pub fn create_partial_word(mystery_word: &str, guessed_letters: &str) -> String {
    let revealed: Vec<String> = mystery_word
        .chars()
        .map(|c| {
            if guessed_letters.chars().any(|g| g.eq_ignore_ascii_case(&c)) {
                c.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect();
    revealed.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_guesses_single_letter_counts_occurrences() {
        assert_eq!(check_guesses("DEER", "e"), Ok(2));
        assert_eq!(check_guesses("DEER", "E"), Ok(2));
        assert_eq!(check_guesses("DEER", "d"), Ok(1));
        assert_eq!(check_guesses("DEER", "z"), Ok(0));
    }

    #[test]
    fn test_check_guesses_repeated_letter_not_double_counted() {
        assert_eq!(check_guesses("AARDVARK", "aa"), Ok(3));
        assert_eq!(check_guesses("AARDVARK", "a"), Ok(3));
        assert_eq!(check_guesses("DEER", "ee"), Ok(2));
    }

    #[test]
    fn test_check_guesses_two_letters_each_position_counts_once() {
        // A=3, R=2
        assert_eq!(check_guesses("AARDVARK", "ar"), Ok(5));
        assert_eq!(check_guesses("MONGOOSE", "mo"), Ok(4));
    }

    #[test]
    fn test_check_guesses_too_many_letters() {
        assert_eq!(check_guesses("DEER", "abc"), Err(GameError::TooManyGuesses));
        assert_eq!(
            check_guesses("DEER", "a b c d"),
            Err(GameError::TooManyGuesses)
        );
    }

    #[test]
    fn test_check_guesses_no_letters() {
        assert_eq!(check_guesses("DEER", "!?"), Err(GameError::NoLettersInGuess));
        assert_eq!(check_guesses("DEER", "  "), Err(GameError::NoLettersInGuess));
    }

    #[test]
    fn test_check_guesses_ignores_punctuation_around_letters() {
        assert_eq!(check_guesses("DEER", " e,r "), Ok(3));
    }

    #[test]
    fn test_check_guesses_non_ascii_letters_are_not_guessable() {
        assert_eq!(check_guesses("DEER", "é"), Err(GameError::NoLettersInGuess));
        // The ASCII letter still counts; the accented one is ignored.
        assert_eq!(check_guesses("DEER", "ée"), Ok(2));
    }

    #[test]
    fn test_create_partial_word_no_guesses() {
        assert_eq!(create_partial_word("GAME", ""), "_ _ _ _");
        assert_eq!(
            create_partial_word("KEYBOARD", "Z"),
            "_ _ _ _ _ _ _ _"
        );
    }

    #[test]
    fn test_create_partial_word_some_guesses() {
        assert_eq!(create_partial_word("MONGOOSE", "MO"), "M O _ _ O O _ _");
        assert_eq!(create_partial_word("FOOTBALL", "FOBAL"), "F O O _ B A L L");
    }

    #[test]
    fn test_create_partial_word_fully_revealed() {
        assert_eq!(create_partial_word("DONE", "OEDN"), "D O N E");
        assert_eq!(create_partial_word("CAT", "CAT"), "C A T");
    }

    #[test]
    fn test_create_partial_word_case_insensitive_membership() {
        assert_eq!(create_partial_word("MONGOOSE", "mo"), "M O _ _ O O _ _");
    }
}
