use super::command_trait::{one_word, split_word, Command, CommandError, CommandResult};
use super::context::CommandContext;

/// SAVE command - dump every file's content into a host file
pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &'static str {
        "save"
    }

    fn usage(&self) -> &'static str {
        "HOST_FILE"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let filename = one_word(args)
            .ok_or_else(|| CommandError::InvalidArguments("Filename is missing".to_string()))?;
        context.filesystem.save_to_path(filename)?;
        Ok(format!("File system content saved to {}\n", filename))
    }
}

/// LOAD command - replace one file's content with a host file
pub struct LoadCommand;

impl Command for LoadCommand {
    fn name(&self) -> &'static str {
        "load"
    }

    fn usage(&self) -> &'static str {
        "HOST_FILE TARGET"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (filename, rest) = split_word(args)
            .ok_or_else(|| CommandError::InvalidArguments("Filename is missing".to_string()))?;
        let target = one_word(rest)
            .ok_or_else(|| CommandError::InvalidArguments("Target path is missing".to_string()))?;

        let loaded = context.filesystem.load_from_path(filename, target)?;
        Ok(format!(
            "Content from '{}' successfully loaded into node: {} ({} bytes)\n",
            filename, target, loaded
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FsError;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("dump.txt");
        let dump = dump.to_str().unwrap();

        let mut context = CommandContext::default();
        context.filesystem.touch("/a", "alpha").unwrap();
        context.filesystem.touch("/restored", "").unwrap();

        SaveCommand.execute(dump, &mut context).unwrap();
        let output = LoadCommand.execute(&format!("{} /restored", dump), &mut context).unwrap();
        assert!(output.contains("successfully loaded into node: /restored"));
        // The dump ran before /restored had content
        assert_eq!(context.filesystem.cat("/restored").unwrap(), b"\nalpha\n");
    }

    #[test]
    fn test_load_argument_checks() {
        let mut context = CommandContext::default();
        let err = LoadCommand.execute("", &mut context).unwrap_err();
        assert_eq!(err.to_string(), "Error: Filename is missing");
        let err = LoadCommand.execute("dump.txt", &mut context).unwrap_err();
        assert_eq!(err.to_string(), "Error: Target path is missing");
    }

    #[test]
    fn test_load_into_directory_is_invalid_target() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        std::fs::write(&source, "data").unwrap();

        let mut context = CommandContext::default();
        context.filesystem.mkdir("/dir").unwrap();
        let err = LoadCommand
            .execute(&format!("{} /dir", source.display()), &mut context)
            .unwrap_err();
        assert!(matches!(err, CommandError::Filesystem(FsError::InvalidTarget(_))));
    }
}
