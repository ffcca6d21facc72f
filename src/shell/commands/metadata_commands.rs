use super::command_trait::{one_word, two_words, Command, CommandError, CommandResult};
use super::context::CommandContext;
use crate::filesystem::NodeKind;

fn type_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Directory => "Directory",
        NodeKind::File => "File",
        NodeKind::Symlink => "Symlink",
    }
}

/// STAT command - show a node's metadata
pub struct StatCommand;

impl Command for StatCommand {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn usage(&self) -> &'static str {
        "PATH"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let path = one_word(args).ok_or_else(|| CommandError::InvalidArguments("Path is missing".to_string()))?;
        let stat = context.filesystem.stat(path)?;

        let mut result = format!(
            "Name: {}\nType: {}\nOwner: {}\nPermissions: {:o}\nCreated: {}\nModified: {}\n",
            stat.name,
            type_label(stat.kind),
            stat.owner,
            stat.permissions,
            stat.created.format("%Y-%m-%d %H:%M:%S"),
            stat.modified.format("%Y-%m-%d %H:%M:%S"),
        );
        if let Some(target) = stat.link_target {
            result.push_str(&format!("Symbolic Link Target: {}\n", target));
        }
        if let Some(size) = stat.size {
            result.push_str(&format!("Size: {} bytes\n", size));
        }
        Ok(result)
    }
}

/// CHMOD command - MODE is octal, as in `chmod /f 644`
pub struct ChmodCommand;

impl Command for ChmodCommand {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn usage(&self) -> &'static str {
        "PATH MODE"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (path, mode) = two_words(args)
            .ok_or_else(|| CommandError::InvalidArguments("Path or mode is missing".to_string()))?;
        let mode = u32::from_str_radix(mode, 8)
            .map_err(|_| CommandError::InvalidArguments(format!("Invalid octal mode '{}'", mode)))?;

        context.filesystem.chmod(path, mode)?;
        Ok(format!("Permissions for '{}' updated successfully.\n", path))
    }
}

/// CHOWN command
pub struct ChownCommand;

impl Command for ChownCommand {
    fn name(&self) -> &'static str {
        "chown"
    }

    fn usage(&self) -> &'static str {
        "PATH OWNER"
    }

    fn execute(&self, args: &str, context: &mut CommandContext) -> CommandResult {
        let (path, owner) = two_words(args)
            .ok_or_else(|| CommandError::InvalidArguments("Path or owner is missing".to_string()))?;
        context.filesystem.chown(path, owner)?;
        Ok(format!("Ownership of '{}' updated successfully to '{}'.\n", path, owner))
    }
}
