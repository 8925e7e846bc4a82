//! Line-oriented commands for the CLI shell.

use crate::app::UiEvent;
use crate::types::ItemId;
use thiserror::Error;

/// One parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward an input event to the app
    Event(UiEvent),
    /// Re-render without changing anything
    List,
    /// Print the state as JSON
    Dump,
    /// Print usage
    Help,
    /// Leave the shell
    Quit,
}

/// Why an input line could not be parsed
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line
    #[error("empty command")]
    Empty,

    /// First word is not a known command
    #[error("unknown command {0:?}, try `help`")]
    UnknownCommand(String),

    /// A required argument was not given
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Description of the argument
        argument: &'static str,
    },

    /// The id argument is not a valid item id
    #[error("invalid item id {0:?}")]
    InvalidId(String),
}

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  add <name>          add an item
  toggle <id>         check or uncheck an item
  delete <id>         remove an item
  edit <id>           open or close an item's edit form
  rename <id> <name>  rename an item
  filter              hide or show checked items
  list                render the list again
  dump                print the list as JSON
  help                show this text
  quit                exit";

/// Parses one input line
///
/// Names may be empty and may contain spaces; everything after the command
/// (or after the id, for `rename`) is taken verbatim, minus surrounding
/// whitespace.
///
/// # Errors
///
/// See [`ParseError`].
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = split_word(line);

    let command = match word {
        "" => return Err(ParseError::Empty),
        "add" => Command::Event(UiEvent::SubmitNewItem {
            name: rest.to_string(),
        }),
        "toggle" => Command::Event(UiEvent::ToggleItem {
            id: parse_id("toggle", rest)?,
        }),
        "delete" => Command::Event(UiEvent::DeleteItem {
            id: parse_id("delete", rest)?,
        }),
        "edit" => Command::Event(UiEvent::ToggleEdit {
            id: parse_id("edit", rest)?,
        }),
        "rename" => {
            let (id, name) = split_word(rest);
            Command::Event(UiEvent::SubmitRename {
                id: parse_id("rename", id)?,
                name: name.to_string(),
            })
        },
        "filter" => Command::Event(UiEvent::ToggleFilter),
        "list" => Command::List,
        "dump" => Command::Dump,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(word, rest)| (word, rest.trim()))
}

fn parse_id(command: &'static str, text: &str) -> Result<ItemId, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            argument: "an item id",
        });
    }
    text.parse()
        .map_err(|_| ParseError::InvalidId(text.to_string()))
}
