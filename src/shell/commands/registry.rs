use std::collections::HashMap;
use std::rc::Rc;
use super::command_trait::{Command, CommandResult, CommandError};
use super::context::CommandContext;
use super::{file_commands, metadata_commands, navigation_commands, persistence_commands, search_commands, tree_commands};

/// Registry that holds all available commands
pub struct CommandRegistry {
    /// Map of command names and aliases to command implementations
    commands: HashMap<String, Rc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new empty command registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registry holding every filesystem command
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_command(Rc::new(tree_commands::MkdirCommand));
        registry.register_command(Rc::new(navigation_commands::CdCommand));
        registry.register_command(Rc::new(navigation_commands::PwdCommand));
        registry.register_command(Rc::new(navigation_commands::LsCommand));
        registry.register_command(Rc::new(file_commands::TouchCommand));
        registry.register_command(Rc::new(file_commands::WriteCommand));
        registry.register_command(Rc::new(file_commands::CatCommand));
        registry.register_command(Rc::new(file_commands::RmCommand));
        registry.register_command(Rc::new(tree_commands::MvCommand));
        registry.register_command(Rc::new(tree_commands::CpCommand));
        registry.register_command(Rc::new(metadata_commands::StatCommand));
        registry.register_command(Rc::new(persistence_commands::SaveCommand));
        registry.register_command(Rc::new(persistence_commands::LoadCommand));
        registry.register_command(Rc::new(tree_commands::RenameCommand));
        registry.register_command(Rc::new(tree_commands::RmdirCommand));
        registry.register_command(Rc::new(tree_commands::CreateSymlinkCommand));
        registry.register_command(Rc::new(metadata_commands::ChmodCommand));
        registry.register_command(Rc::new(metadata_commands::ChownCommand));
        registry.register_command(Rc::new(search_commands::FindCommand));
        registry.register_command(Rc::new(search_commands::GrepCommand));
        registry
    }

    /// Register a command under its name and all of its aliases
    pub fn register_command(&mut self, command: Rc<dyn Command>) {
        let name = command.name().to_string();
        self.commands.insert(name, command.clone());

        for alias in command.aliases() {
            self.commands.insert(alias.to_string(), command.clone());
        }
    }

    /// Execute a command by name with the given arguments and context
    pub fn execute_command(&self, command_name: &str, args: &str, context: &mut CommandContext) -> CommandResult {
        match self.commands.get(command_name) {
            Some(command) => command.execute(args, context),
            None => Err(CommandError::NotFound(command_name.to_string())),
        }
    }

    /// Check if a command exists
    pub fn has_command(&self, command_name: &str) -> bool {
        self.commands.contains_key(command_name)
    }

    /// Get all available command names, aliases included
    pub fn get_command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get help for a specific command
    pub fn get_command_help(&self, command_name: &str) -> Option<String> {
        self.commands.get(command_name).map(|command| command.help())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
