use super::command_trait::{split_word, Command, CommandError, CommandResult};
use super::context::CommandContext;
use crate::filesystem::SearchHit;

fn render_hits(hits: Vec<SearchHit>) -> String {
    if hits.is_empty() {
        return "No matches found.\n".to_string();
    }
    hits.iter().map(|hit| format!("{}\n", hit)).collect()
}

/// FIND command - search names below the current directory, `-i` ignores case
pub struct FindCommand;

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn usage(&self) -> &'static str {
        "[-i] PATTERN"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let missing = || CommandError::InvalidArguments("Pattern is missing".to_string());
        let (first, rest) = split_word(args).ok_or_else(missing)?;

        let hits = if first == "-i" {
            let (pattern, _) = split_word(rest).ok_or_else(missing)?;
            context.filesystem.find_case_insensitive(pattern)
        } else {
            context.filesystem.find(first)
        };
        Ok(render_hits(hits))
    }
}

/// GREP command - search file contents below the current directory
pub struct GrepCommand;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn usage(&self) -> &'static str {
        "TEXT"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (needle, _) = split_word(args)
            .ok_or_else(|| CommandError::InvalidArguments("Pattern is missing".to_string()))?;

        let names = context.filesystem.grep(needle);
        if names.is_empty() {
            return Ok("No files contain the specified content.\n".to_string());
        }
        Ok(names
            .iter()
            .map(|name| format!("File: {} contains the specified content.\n", name))
            .collect())
    }
}
