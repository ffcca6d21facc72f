use super::command_trait::{one_word, Command, CommandError, CommandResult};
use super::context::CommandContext;
use crate::filesystem::NodeKind;

/// CD command - change the current directory
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "PATH"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let path = one_word(args).ok_or_else(|| CommandError::InvalidArguments("Path is missing".to_string()))?;
        context.filesystem.cd(path)?;
        Ok(String::new())
    }
}

/// PWD command - print working directory
pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, _args: &str, context: &mut CommandContext) -> CommandResult {
        Ok(format!("{}\n", context.filesystem.pwd()))
    }
}

/// LS command - list the current directory, newest entry first
pub struct LsCommand;

impl LsCommand {
    fn tag(kind: NodeKind) -> &'static str {
        match kind {
            NodeKind::Directory => "[DIR]",
            NodeKind::File => "[FILE]",
            NodeKind::Symlink => "[LINK]",
        }
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, _args: &str, context: &mut CommandContext) -> CommandResult {
        let entries = context.filesystem.ls()?;
        if entries.is_empty() {
            return Ok("No files or directories\n".to_string());
        }

        let mut result = String::new();
        for entry in entries {
            result.push_str(&format!("{} {}\n", Self::tag(entry.kind), entry.name));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_and_pwd() {
        let mut context = CommandContext::default();
        context.filesystem.mkdir("/home").unwrap();

        assert_eq!(CdCommand.execute("/home", &mut context).unwrap(), "");
        assert_eq!(PwdCommand.execute("", &mut context).unwrap(), "/home\n");
    }

    #[test]
    fn test_cd_without_path_does_not_move() {
        let mut context = CommandContext::default();
        let err = CdCommand.execute("  ", &mut context).unwrap_err();
        assert_eq!(err.to_string(), "Error: Path is missing");
        assert_eq!(context.filesystem.pwd(), "/");
    }

    #[test]
    fn test_ls_tags_entries() {
        let mut context = CommandContext::default();
        assert_eq!(LsCommand.execute("", &mut context).unwrap(), "No files or directories\n");

        context.filesystem.mkdir("/docs").unwrap();
        context.filesystem.touch("/notes.txt", "").unwrap();
        context.filesystem.create_symlink("/docs", "shortcut").unwrap();

        assert_eq!(
            LsCommand.execute("", &mut context).unwrap(),
            "[FILE] notes.txt\n[DIR] docs\n[LINK] shortcut\n"
        );
    }
}
