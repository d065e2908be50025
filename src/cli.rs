use clap::Parser;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute};
use std::io::BufRead;

/// WordGuess CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a comma-separated word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Console input/output helpers. All reads are line-oriented and generic over
// BufRead so the whole shell can be driven from a Cursor in tests.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuChoice {
    NewGame,
    ViewWordBank,
    AddWord,
    RemoveWord,
    Exit,
}

/// Reads one line, stripping the trailing newline. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    let bytes = reader.read_line(&mut input).unwrap_or(0);
    if bytes == 0 {
        return None;
    }
    while input.ends_with('\n') || input.ends_with('\r') {
        input.pop();
    }
    Some(input)
}

/// Displays the home menu until the player picks a valid option 1-5.
/// End of input counts as choosing to exit.
pub fn read_menu_choice<R: BufRead>(reader: &mut R) -> MenuChoice {
    loop {
        println!("Welcome to WordGuess, the word guessing game!");
        println!("Please choose an option from below and press enter:");
        println!("1) New Game");
        println!("2) View Word Bank");
        println!("3) Add to the Word Bank");
        println!("4) Remove Words From the Word Bank");
        println!("5) Exit the Game");

        let Some(line) = read_line(reader) else {
            return MenuChoice::Exit;
        };

        match line.trim().parse::<u32>() {
            Ok(1) => return MenuChoice::NewGame,
            Ok(2) => return MenuChoice::ViewWordBank,
            Ok(3) => return MenuChoice::AddWord,
            Ok(4) => return MenuChoice::RemoveWord,
            Ok(5) => return MenuChoice::Exit,
            _ => {
                clear_screen();
                println!("Invalid choice provided.");
                println!(
                    "Please type just the number corresponding to your choice followed by enter.\n"
                );
            }
        }
    }
}

pub fn display_wordbank(path_label: &str, bank_text: &str) {
    println!("Current word bank from {path_label} separated by commas:\n");
    println!("{bank_text}");
}

pub fn pause<R: BufRead>(reader: &mut R) {
    println!("Please press enter to continue...");
    let _ = read_line(reader);
}

/// Y/N prompt after a won round. Keeps asking until the player answers;
/// end of input counts as declining.
pub fn prompt_play_again<R: BufRead>(reader: &mut R) -> bool {
    println!("Would you like to start a new game? (Y/N)");
    loop {
        let Some(line) = read_line(reader) else {
            return false;
        };
        match line.trim().to_uppercase().as_str() {
            "Y" | "YES" => return true,
            "N" | "NO" => return false,
            _ => println!("Please answer Y or N."),
        }
    }
}

/// Clears the terminal between screens. Failures (e.g. output is not a
/// terminal) are ignored.
pub fn clear_screen() {
    let _ = execute!(
        std::io::stdout(),
        Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_newline() {
        let mut reader = Cursor::new("hello\n");
        assert_eq!(read_line(&mut reader), Some("hello".to_string()));
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut reader = Cursor::new("hello\r\n");
        assert_eq!(read_line(&mut reader), Some("hello".to_string()));
    }

    #[test]
    fn test_read_line_none_at_end_of_input() {
        let mut reader = Cursor::new("");
        assert_eq!(read_line(&mut reader), None);
    }

    #[test]
    fn test_read_menu_choice_valid_options() {
        let mut reader = Cursor::new("1\n");
        assert_eq!(read_menu_choice(&mut reader), MenuChoice::NewGame);
        let mut reader = Cursor::new("4\n");
        assert_eq!(read_menu_choice(&mut reader), MenuChoice::RemoveWord);
        let mut reader = Cursor::new("5\n");
        assert_eq!(read_menu_choice(&mut reader), MenuChoice::Exit);
    }

    #[test]
    fn test_read_menu_choice_reprompts_on_invalid() {
        let mut reader = Cursor::new("banana\n0\n6\n2\n");
        assert_eq!(read_menu_choice(&mut reader), MenuChoice::ViewWordBank);
    }

    #[test]
    fn test_read_menu_choice_exit_at_end_of_input() {
        let mut reader = Cursor::new("");
        assert_eq!(read_menu_choice(&mut reader), MenuChoice::Exit);
    }

    #[test]
    fn test_prompt_play_again_yes_and_no() {
        let mut reader = Cursor::new("y\n");
        assert!(prompt_play_again(&mut reader));
        let mut reader = Cursor::new("N\n");
        assert!(!prompt_play_again(&mut reader));
    }

    #[test]
    fn test_prompt_play_again_reprompts_until_answered() {
        let mut reader = Cursor::new("maybe\nok\nYES\n");
        assert!(prompt_play_again(&mut reader));
    }

    #[test]
    fn test_prompt_play_again_declines_at_end_of_input() {
        let mut reader = Cursor::new("");
        assert!(!prompt_play_again(&mut reader));
    }
}
