//! Line commands typed at the prompt, translated into controller messages.

use thiserror::Error;

use crate::{AppState, Msg};

pub const HELP: &str = "\
commands:
  add [title]    add a todo (empty title if omitted)
  edit <n>       edit row n, preloading its title
  set <text>     change the text of the row being edited
  save           save the row being edited
  delete <n>     delete row n
  refresh        refetch the list
  help           show this text
  quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Edit(usize),
    Set(String),
    Save,
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a row number")]
    BadRow(String),
    #[error("no row {0}")]
    NoSuchRow(usize),
    #[error("the list has not loaded yet")]
    NotLoaded,
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word {
        "" => Err(CommandError::Empty),
        "add" => Ok(Command::Add(rest.to_string())),
        "edit" => parse_row(rest, "edit").map(Command::Edit),
        "set" => Ok(Command::Set(rest.to_string())),
        "save" => Ok(Command::Save),
        "delete" | "rm" => parse_row(rest, "delete").map(Command::Delete),
        "refresh" => Ok(Command::Refresh),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_row(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadRow(arg.to_string())),
    }
}

impl Command {
    /// Messages for this command, resolving row numbers against the rendered
    /// list. `Help` and `Quit` produce none; the caller handles them.
    pub fn into_msgs(self, state: &AppState) -> Result<Vec<Msg>, CommandError> {
        let msgs = match self {
            Command::Add(title) => vec![Msg::NewTodoChanged(title), Msg::AddClicked],
            Command::Edit(row) => vec![Msg::EditClicked(row_id(state, row)?)],
            Command::Set(text) => vec![Msg::EditDraftChanged(text)],
            Command::Save => vec![Msg::SaveClicked],
            Command::Delete(row) => vec![Msg::DeleteClicked(row_id(state, row)?)],
            Command::Refresh => vec![Msg::RefreshRequested],
            Command::Help | Command::Quit => Vec::new(),
        };
        Ok(msgs)
    }
}

fn row_id(state: &AppState, row: usize) -> Result<todo_core::TodoId, CommandError> {
    let todos = state.todos().data().ok_or(CommandError::NotLoaded)?;
    row.checked_sub(1)
        .and_then(|index| todos.get(index))
        .map(|todo| todo.id.clone())
        .ok_or(CommandError::NoSuchRow(row))
}
