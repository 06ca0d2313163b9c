//! Terminal input: command parsing and the stdin reader thread.
//!
//! Each line typed by the user becomes one `Input`. A blank line is the Enter key and a
//! line holding a single space is the Space key; both only matter while the author has
//! focus. Everything else is parsed as `<verb> [argument]`, verbs being case-insensitive.
use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, error};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Command words understood by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Verb {
    New,
    Fav,
    Copy,
    #[strum(to_string = "share", serialize = "tweet")]
    Share,
    Search,
    Author,
    Focus,
    List,
    Remove,
    Dismiss,
    Help,
    Quit,
}

impl Verb {
    /// One-line usage shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Verb::New => "new          fetch a new quote",
            Verb::Fav => "fav          add/remove the quote from favorites",
            Verb::Copy => "copy         copy the quote to the clipboard",
            Verb::Share => "share|tweet  share the quote on X",
            Verb::Search => "search       search the quote text on the web",
            Verb::Author => "author       look the author up in the encyclopedia",
            Verb::Focus => "focus        focus the author; Enter or Space opens it",
            Verb::List => "list         show/hide the favorites panel",
            Verb::Remove => "remove <n>   remove favorite number n",
            Verb::Dismiss => "dismiss      close the notification",
            Verb::Help => "help         show this help",
            Verb::Quit => "quit         exit",
        }
    }
}

/// Keys that activate a focused element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewQuote,
    ToggleFavorite,
    Copy,
    Share,
    SearchQuote,
    SearchAuthor,
    FocusAuthor,
    TogglePanel,
    /// Remove the favorite at this zero-based position.
    RemoveFavorite(usize),
    DismissToast,
    Help,
    Quit,
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Key(Key),
    Invalid(String),
}

impl Input {
    /// Parses a line without its line terminator.
    pub fn parse(line: &str) -> Input {
        match line {
            "" => return Input::Key(Key::Enter),
            " " => return Input::Key(Key::Space),
            _ => {}
        }

        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Input::Invalid(line.to_string());
        };
        let Ok(verb) = word.parse::<Verb>() else {
            return Input::Invalid(format!("unknown command: {}", word));
        };

        let action = match verb {
            Verb::New => Action::NewQuote,
            Verb::Fav => Action::ToggleFavorite,
            Verb::Copy => Action::Copy,
            Verb::Share => Action::Share,
            Verb::Search => Action::SearchQuote,
            Verb::Author => Action::SearchAuthor,
            Verb::Focus => Action::FocusAuthor,
            Verb::List => Action::TogglePanel,
            Verb::Remove => match words.next().map(str::parse::<usize>) {
                Some(Ok(n)) if n > 0 => Action::RemoveFavorite(n - 1),
                _ => return Input::Invalid("usage: remove <n> (n starts at 1)".to_string()),
            },
            Verb::Dismiss => Action::DismissToast,
            Verb::Help => Action::Help,
            Verb::Quit => Action::Quit,
        };
        Input::Action(action)
    }
}

/// Lines of `help` output.
pub fn help_lines() -> Vec<&'static str> {
    Verb::iter().map(Verb::usage).collect()
}

/// Spawns a thread turning stdin lines into `Input`s. The channel disconnects on EOF.
pub fn spawn_stdin_reader(tx: Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    let line = line.strip_suffix('\r').unwrap_or(&line);
                    let input = Input::parse(line);
                    debug!("Input: {:?}", input);
                    if tx.send(input).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Read stdin error: {}", e);
                    break;
                }
            }
        }
        debug!("Stdin reader stopping...");
    });
}
