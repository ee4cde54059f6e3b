//! Line commands understood by the terminal front end.

use items_core::ItemId;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  name <text>       set the new item's name
  desc <text>       set the new item's description
  create            submit the new item
  edit <id>         edit an item in place
  set-name <text>   change the edited item's name
  set-desc <text>   change the edited item's description
  save              save the edited item
  cancel            leave edit mode, discarding changes
  delete <id>       delete an item (asks first)
  show              redraw the page
  help              this text
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Desc(String),
    Create,
    Edit(ItemId),
    SetName(String),
    SetDesc(String),
    Save,
    Cancel,
    Delete(ItemId),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an item id")]
    MissingId(&'static str),
    #[error("`{0}` is not an item id")]
    BadId(String),
}

/// Parse one input line. Text arguments take the rest of the line verbatim
/// (minus the separating whitespace), so `name` alone sets an empty name.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    match word {
        "" => Err(ParseError::Empty),
        "name" => Ok(Command::Name(rest.to_string())),
        "desc" | "description" => Ok(Command::Desc(rest.to_string())),
        "create" | "submit" => Ok(Command::Create),
        "edit" => id_arg("edit", rest).map(Command::Edit),
        "set-name" => Ok(Command::SetName(rest.to_string())),
        "set-desc" => Ok(Command::SetDesc(rest.to_string())),
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "delete" | "rm" => id_arg("delete", rest).map(Command::Delete),
        "show" | "ls" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn id_arg(command: &'static str, rest: &str) -> Result<ItemId, ParseError> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    arg.parse().map_err(|_| ParseError::BadId(arg.to_string()))
}
