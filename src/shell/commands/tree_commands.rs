use super::command_trait::{one_word, two_words, Command, CommandError, CommandResult};
use super::context::CommandContext;

/// MKDIR command - create a directory
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "PATH"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let path = one_word(args).ok_or_else(|| CommandError::InvalidArguments("Path is missing".to_string()))?;
        context.filesystem.mkdir(path)?;
        Ok(format!("Directory '{}' created successfully\n", path))
    }
}

/// RMDIR command - remove a node together with everything below it
pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn usage(&self) -> &'static str {
        "PATH"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let path = one_word(args).ok_or_else(|| CommandError::InvalidArguments("Path is missing".to_string()))?;
        let removed = context.filesystem.rmdir(path)?;
        log::debug!("rmdir {} released {} nodes", path, removed);
        Ok("Directory removed successfully.\n".to_string())
    }
}

/// MV command
pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn usage(&self) -> &'static str {
        "SOURCE DESTINATION"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (source, destination) = two_words(args).ok_or_else(|| {
            CommandError::InvalidArguments("Source or destination path is missing".to_string())
        })?;
        context.filesystem.mv(source, destination)?;
        Ok(format!("Successfully moved {} to {}\n", source, destination))
    }
}

/// CP command - deep copy
pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn usage(&self) -> &'static str {
        "SOURCE DESTINATION"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (source, destination) = two_words(args).ok_or_else(|| {
            CommandError::InvalidArguments("Source or destination path is missing".to_string())
        })?;
        context.filesystem.cp(source, destination)?;
        Ok(format!("Successfully copied {} to {}\n", source, destination))
    }
}

pub struct RenameCommand;

impl Command for RenameCommand {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn usage(&self) -> &'static str {
        "PATH NEW_NAME"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (path, new_name) = two_words(args)
            .ok_or_else(|| CommandError::InvalidArguments("Old or new name is missing".to_string()))?;
        context.filesystem.rename(path, new_name)?;
        Ok("Renamed successfully.\n".to_string())
    }
}

/// CREATESYMLINK command - link in the current directory pointing at TARGET
pub struct CreateSymlinkCommand;

impl Command for CreateSymlinkCommand {
    fn name(&self) -> &'static str {
        "createSymlink"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["ln"]
    }

    fn usage(&self) -> &'static str {
        "TARGET LINK_NAME"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (target, link_name) = two_words(args)
            .ok_or_else(|| CommandError::InvalidArguments("Target or link name is missing".to_string()))?;
        context.filesystem.create_symlink(target, link_name)?;
        Ok(format!(
            "Symbolic link '{}' created successfully, pointing to '{}'.\n",
            link_name, target
        ))
    }
}
