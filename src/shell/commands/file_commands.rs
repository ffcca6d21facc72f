use super::command_trait::{one_word, split_word, Command, CommandError, CommandResult};
use super::context::CommandContext;

fn path_missing() -> CommandError {
    CommandError::InvalidArguments("Path is missing".to_string())
}

/// TOUCH command - create a file, the rest of the line becomes its content
pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn usage(&self) -> &'static str {
        "PATH [CONTENT...]"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (path, content) = split_word(args).ok_or_else(path_missing)?;
        context.filesystem.touch(path, content)?;
        Ok(format!("File '{}' created successfully\n", path))
    }
}

/// WRITE command - replace a file's content with the rest of the line
pub struct WriteCommand;

impl Command for WriteCommand {
    fn name(&self) -> &'static str {
        "write"
    }

    fn usage(&self) -> &'static str {
        "PATH CONTENT..."
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (path, content) = split_word(args).ok_or_else(path_missing)?;
        context.filesystem.write(path, content)?;
        Ok(format!("Content written to '{}'\n", path))
    }
}

/// CAT command - print a file's content
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "PATH"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let path = one_word(args).ok_or_else(path_missing)?;
        let content = context.filesystem.cat(path)?;
        if content.is_empty() {
            return Ok("File is empty\n".to_string());
        }
        Ok(format!("{}\n", String::from_utf8_lossy(content)))
    }
}

/// RM command - remove a file or symlink
pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn usage(&self) -> &'static str {
        "PATH"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let path = one_word(args).ok_or_else(path_missing)?;
        context.filesystem.rm(path)?;
        Ok(format!("File {} deleted successfully\n", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FsError;

    #[test]
    fn test_touch_keeps_whole_rest_of_line() {
        let mut context = CommandContext::default();
        TouchCommand.execute("/greeting hello   there world", &mut context).unwrap();
        assert_eq!(context.filesystem.cat("/greeting").unwrap(), b"hello   there world");
    }

    #[test]
    fn test_touch_without_content_creates_empty_file() {
        let mut context = CommandContext::default();
        TouchCommand.execute("/empty", &mut context).unwrap();
        assert_eq!(CatCommand.execute("/empty", &mut context).unwrap(), "File is empty\n");
    }

    #[test]
    fn test_write_then_cat() {
        let mut context = CommandContext::default();
        TouchCommand.execute("/f old", &mut context).unwrap();
        WriteCommand.execute("/f new text", &mut context).unwrap();
        assert_eq!(CatCommand.execute("/f", &mut context).unwrap(), "new text\n");
    }

    #[test]
    fn test_cat_directory_reports_not_a_file() {
        let mut context = CommandContext::default();
        context.filesystem.mkdir("/dir").unwrap();
        let err = CatCommand.execute("/dir", &mut context).unwrap_err();
        assert!(matches!(err, CommandError::Filesystem(FsError::NotAFile(_))));
    }

    #[test]
    fn test_missing_path_does_not_touch_engine() {
        let mut context = CommandContext::default();
        for command in [
            &TouchCommand as &dyn Command,
            &WriteCommand as &dyn Command,
            &CatCommand as &dyn Command,
            &RmCommand as &dyn Command,
        ] {
            let err = command.execute("", &mut context).unwrap_err();
            assert!(matches!(err, CommandError::InvalidArguments(_)));
        }
        assert_eq!(context.filesystem.node_count(), 1);
    }

    #[test]
    fn test_rm_file() {
        let mut context = CommandContext::default();
        TouchCommand.execute("/gone", &mut context).unwrap();
        assert_eq!(RmCommand.execute("/gone", &mut context).unwrap(), "File /gone deleted successfully\n");
        assert!(context.filesystem.resolve("/gone").is_err());
    }
}
