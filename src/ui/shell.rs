use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::models::file_entry::SortKey;
use crate::services::fs::view::DirectoryView;
use crate::ui::format::format_entries;

const HELP: &str = "\
commands:
  ls                    re-read and show the current directory
  dirs                  list sub-directories
  cd <name>             enter a sub-directory
  up                    go to the parent directory
  home                  go back to the start directory
  goto <path>           go to any directory
  sort <name|size> [asc|desc]
  pwd                   print the current path
  help                  show this text
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Dirs,
    Enter(String),
    Up,
    Home,
    Goto(String),
    Sort { key: SortKey, descending: bool },
    Pwd,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid sort key: {0} (expected name or size)")]
    SortKey(String),
    #[error("invalid sort direction: {0} (expected asc or desc)")]
    Direction(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word {
            "ls" => Ok(Command::List),
            "dirs" => Ok(Command::Dirs),
            "cd" if rest.is_empty() => Err(CommandError::MissingArgument("cd")),
            "cd" => Ok(Command::Enter(rest.to_string())),
            "up" | ".." => Ok(Command::Up),
            "home" => Ok(Command::Home),
            "goto" if rest.is_empty() => Err(CommandError::MissingArgument("goto")),
            "goto" => Ok(Command::Goto(rest.to_string())),
            "sort" => parse_sort(rest),
            "pwd" => Ok(Command::Pwd),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_sort(args: &str) -> Result<Command, CommandError> {
    let mut parts = args.split_whitespace();
    let key = match parts.next() {
        Some(k) => k
            .parse::<SortKey>()
            .map_err(|_| CommandError::SortKey(k.to_string()))?,
        None => return Err(CommandError::MissingArgument("sort")),
    };
    let descending = match parts.next() {
        None | Some("asc") => false,
        Some("desc") => true,
        Some(other) => return Err(CommandError::Direction(other.to_string())),
    };
    Ok(Command::Sort { key, descending })
}

/// Line-oriented front end over a [`DirectoryView`].
pub struct Shell<'a> {
    view: &'a mut DirectoryView,
}

impl<'a> Shell<'a> {
    pub fn new(view: &'a mut DirectoryView) -> Self {
        Self { view }
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.render(out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(e) => writeln!(out, "error: {}", e)?,
            }
        }
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        let result = match command {
            Command::List => self.view.refresh(),
            Command::Dirs => {
                return match self.view.list_subdirectory_names() {
                    Ok(names) => write_list(out, &names),
                    Err(e) => writeln!(out, "error: {}", e),
                };
            }
            Command::Enter(name) => self.view.enter_subdirectory(&name),
            Command::Up => self.view.go_to_parent(),
            Command::Home => self.view.go_to_start(),
            Command::Goto(path) => self.view.set_directory(path),
            Command::Sort { key, descending } => {
                self.view.sorted_entries(key, descending);
                Ok(())
            }
            Command::Pwd => return writeln!(out, "{}", self.view.current_path().display()),
            Command::Help => return writeln!(out, "{}", HELP),
            Command::Quit => return Ok(()),
        };

        if let Err(e) = result {
            writeln!(out, "error: {}", e)?;
        }
        self.render(out)
    }

    /// Current path, file listing and sub-directories.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Current path: {}", self.view.current_path().display())?;
        writeln!(out, "Files:")?;
        write_list(out, &format_entries(self.view.entries()))?;
        writeln!(out, "Subdirectories:")?;
        match self.view.list_subdirectory_names() {
            Ok(names) => write_list(out, &names),
            Err(e) => writeln!(out, "  error: {}", e),
        }
    }
}

fn write_list<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        return writeln!(out, "  (none)");
    }
    for line in lines {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}
