use thiserror::Error;

use super::context::CommandContext;
use crate::error::FsError;

/// Result type for command execution
pub type CommandResult = Result<String, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required arguments missing or malformed; the engine was not called
    #[error("Error: {0}")]
    InvalidArguments(String),
    /// No command registered under this name
    #[error("Error: Unknown command '{0}'")]
    NotFound(String),
    /// The engine rejected the operation
    #[error("Error: {0}")]
    Filesystem(#[from] FsError),
}

/// A shell command backed by one engine operation
pub trait Command {
    /// The name typed at the prompt (e.g. "mkdir", "createSymlink")
    fn name(&self) -> &'static str;

    /// Other names that run this command
    fn aliases(&self) -> Vec<&'static str> {
        vec![]
    }

    /// Argument synopsis shown by `help`
    fn usage(&self) -> &'static str {
        ""
    }

    /// One-line description shown by `help`
    fn help(&self) -> String {
        match self.usage() {
            "" => self.name().to_string(),
            usage => format!("{} {}", self.name(), usage),
        }
    }

    /// Execute the command with the rest of the line as `args`
    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult;
}

/// First whitespace-separated word of `args` and whatever follows it.
pub(crate) fn split_word(args: &str) -> Option<(&str, &str)> {
    let args = args.trim_start();
    if args.is_empty() {
        return None;
    }
    match args.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim_start())),
        None => Some((args, "")),
    }
}

/// The first two words of `args`, ignoring anything after them
pub(crate) fn two_words(args: &str) -> Option<(&str, &str)> {
    let (first, rest) = split_word(args)?;
    let (second, _) = split_word(rest)?;
    Some((first, second))
}

/// The first word of `args`
pub(crate) fn one_word(args: &str) -> Option<&str> {
    split_word(args).map(|(word, _)| word)
}
